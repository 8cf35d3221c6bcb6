// Request extractors that report failures in the API's JSON error shape

use axum::extract::FromRequest;

use super::error::ApiError;

/// `axum::Json` whose rejection is turned into an [`ApiError`], so malformed
/// or non-object bodies get the same JSON error response as everything else.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
