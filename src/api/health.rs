//! Root welcome endpoint

/// Welcome message, also serves as an unauthenticated health check
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn welcome() -> &'static str {
    "Welcome to library app server !"
}
