use axum::http::StatusCode;
use axum::response::Json;

use crate::models::responses::ErrorResponse;
use crate::services::esv::EsvError;

pub mod health;
pub mod highlights;
pub mod passage;
pub mod search;

// Upstream failures surface as gateway errors, never as an empty 200.
pub fn upstream_error(err: &EsvError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        EsvError::Transport(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
