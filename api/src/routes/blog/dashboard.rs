//! Author dashboard handler

use actix_web::{web, HttpResponse};

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::Mailer;
use bs_shared::types::ApiResponse;

use crate::app::AppState;

/// GET /api/dashboard/{userId}: aggregated author stats
///
/// Best-effort by design: repository failures degrade to a zero-valued
/// dashboard instead of an error response.
pub async fn dashboard<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let stats = state.blog_service.dashboard(path.into_inner()).await;
    HttpResponse::Ok().json(ApiResponse::success(
        "Dashboard fetched successfully",
        stats,
    ))
}
