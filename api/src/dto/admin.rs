//! Admin endpoint DTOs
//!
//! Every admin request carries the acting user's id; the service
//! verifies the admin flag server-side.

use serde::{Deserialize, Serialize};

use bs_core::services::admin::UserSummary;

/// Body of state-changing admin calls
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminActionRequest {
    pub admin_id: Option<i32>,
}

/// Query string of admin read calls
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminQuery {
    pub admin_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersPayload {
    pub users: Vec<UserSummary>,
}
