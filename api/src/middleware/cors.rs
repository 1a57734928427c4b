//! CORS configuration
//!
//! The platform frontend is served from a different origin, and the
//! original backend ran a wide-open CORS policy; kept permissive here.

use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::permissive()
}
