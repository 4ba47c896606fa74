use crate::models::responses::{HighlightedVerse, HighlightedVersesResponse};
use axum::response::Json;

pub async fn highlighted_verses() -> Json<HighlightedVersesResponse> {
    Json(HighlightedVersesResponse {
        verses: vec![HighlightedVerse {
            reference: "v43003016".to_string(),
            color: "bg-red-500".to_string(),
        }],
    })
}
