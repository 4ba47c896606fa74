use crate::models::responses::{ErrorResponse, PassageResponse};
use crate::routes::upstream_error;
use crate::services::esv::{EsvClient, PassageQuery, DEFAULT_REFERENCE};
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
pub struct PassageParams {
    pub verse: Option<String>,
    pub numbers: Option<String>,
    pub headings: Option<String>,
    pub extras: Option<String>,
}

// Only the literal string "true" enables a flag; anything else is off.
fn flag(value: Option<&str>) -> bool {
    value == Some("true")
}

impl PassageParams {
    fn into_query(self) -> PassageQuery {
        let reference = match self.verse {
            Some(verse) if !verse.is_empty() => verse,
            _ => DEFAULT_REFERENCE.to_string(),
        };

        PassageQuery {
            reference,
            include_numbers: flag(self.numbers.as_deref()),
            include_headings: flag(self.headings.as_deref()),
            include_extras: flag(self.extras.as_deref()),
        }
    }
}

pub async fn passage_lookup(
    Query(params): Query<PassageParams>,
    State(esv): State<Esv>,
) -> Result<Json<PassageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = params.into_query();

    match esv.passage_html(&query).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!("Passage lookup for '{}' failed: {}", query.reference, e);
            Err(upstream_error(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        verse: Option<&str>,
        numbers: Option<&str>,
        headings: Option<&str>,
        extras: Option<&str>,
    ) -> PassageParams {
        PassageParams {
            verse: verse.map(String::from),
            numbers: numbers.map(String::from),
            headings: headings.map(String::from),
            extras: extras.map(String::from),
        }
    }

    #[test]
    fn missing_verse_falls_back_to_default_reference() {
        let query = params(None, None, None, None).into_query();

        assert_eq!(query.reference, DEFAULT_REFERENCE);
        assert!(!query.include_numbers);
        assert!(!query.include_headings);
        assert!(!query.include_extras);
    }

    #[test]
    fn empty_verse_falls_back_to_default_reference() {
        let query = params(Some(""), None, None, None).into_query();

        assert_eq!(query.reference, DEFAULT_REFERENCE);
    }

    #[test]
    fn only_literal_true_enables_flags() {
        let query = params(Some("Romans 8"), Some("true"), Some("True"), Some("yes")).into_query();

        assert_eq!(query.reference, "Romans 8");
        assert!(query.include_numbers);
        assert!(!query.include_headings);
        assert!(!query.include_extras);
    }
}
