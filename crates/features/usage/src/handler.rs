use axum::Json;
use axum::extract::Path;
use serde::Serialize;
use utoipa::ToSchema;
use vibe_domain::constants::USAGE_TAG;

/// Per-user usage summary
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageSummary {
    projects: u32,
    /// Storage used, in megabytes
    storage: u32,
    api_calls: u32,
    user_id: String,
}

#[utoipa::path(
    get,
    path = "/{user_id}",
    params(("user_id" = String, Path, description = "User to summarize")),
    responses((status = OK, description = "Usage summary for the user", body = UsageSummary)),
    tag = USAGE_TAG,
)]
pub(crate) async fn usage_handler(Path(user_id): Path<String>) -> Json<UsageSummary> {
    // Fixed figures until the metering backend lands.
    Json(UsageSummary { projects: 3, storage: 768, api_calls: 1425, user_id })
}
