use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

use citypages_infra::StoreError;

pub const PAGE_NOT_FOUND: &str = "Page not found";
pub const NOT_FOUND: &str = "Not found";
pub const INTERNAL_ERROR: &str = "An error occurred";

/// Store failures are logged with detail but answered with a generic 500.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::DataUnavailable(msg) => {
            error!(error = %msg, "reference data unavailable");
            text_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

pub fn text_error(status: StatusCode, message: &'static str) -> axum::response::Response {
    (status, message).into_response()
}

pub fn not_found() -> axum::response::Response {
    text_error(StatusCode::NOT_FOUND, NOT_FOUND)
}
