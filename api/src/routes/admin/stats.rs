//! Admin overview handler

use actix_web::{web, HttpResponse};

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::Mailer;
use bs_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::admin::AdminQuery;
use crate::handlers::{bad_request, domain_error_response};

/// GET /api/admin/stats?adminId=: platform-wide totals
pub async fn platform_stats<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    query: web::Query<AdminQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let admin_id = match query.admin_id {
        Some(admin_id) => admin_id,
        None => return bad_request("Admin id is required"),
    };

    match state.admin_service.platform_stats(admin_id).await {
        Ok(stats) => {
            HttpResponse::Ok().json(ApiResponse::success("Stats fetched successfully", stats))
        }
        Err(error) => domain_error_response(&error),
    }
}
