//! Authentication routes: send-otp, verify-otp, login

mod login;
mod send_otp;
mod verify_otp;

pub use login::login;
pub use send_otp::send_otp;
pub use verify_otp::verify_otp;
