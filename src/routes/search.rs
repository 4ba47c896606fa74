use crate::models::responses::{ErrorResponse, SearchResponse};
use crate::routes::upstream_error;
use crate::services::esv::EsvClient;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

type Esv = Arc<EsvClient>;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

pub async fn passage_search(
    Query(params): Query<SearchParams>,
    State(esv): State<Esv>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    // A missing term is forwarded as-is; the upstream rejection comes back as 502.
    let term = params.search.unwrap_or_default();

    match esv.passage_search(&term).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!("Search for '{}' failed: {}", term, e);
            Err(upstream_error(&e))
        }
    }
}
