use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::models::responses::{PassageResponse, SearchResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.esv.org";
pub const DEFAULT_REFERENCE: &str = "John 3:16-21";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const SEARCH_PAGE: u32 = 1;
const SEARCH_PAGE_SIZE: u32 = 20;

#[derive(Error, Debug)]
pub enum EsvError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct PassageQuery {
    pub reference: String,
    pub include_numbers: bool,
    pub include_headings: bool,
    pub include_extras: bool,
}

impl Default for PassageQuery {
    fn default() -> Self {
        Self {
            reference: DEFAULT_REFERENCE.to_string(),
            include_numbers: false,
            include_headings: false,
            include_extras: false,
        }
    }
}

impl PassageQuery {
    // The passage endpoint expects all nine parameters on every call.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let numbers = self.include_numbers.to_string();
        let headings = self.include_headings.to_string();
        let extras = self.include_extras.to_string();

        vec![
            ("q", self.reference.clone()),
            ("include-passage-references", "true".to_string()),
            ("include-verse-anchors", "true".to_string()),
            ("include-chapter-numbers", numbers.clone()),
            ("include-verse-numbers", numbers),
            ("include-headings", headings.clone()),
            ("include-subheadings", headings),
            ("include-footnotes", extras.clone()),
            ("include-audio-link", extras),
        ]
    }
}

pub fn search_params(term: &str) -> Vec<(&'static str, String)> {
    vec![
        ("q", term.to_string()),
        ("page", SEARCH_PAGE.to_string()),
        ("page-size", SEARCH_PAGE_SIZE.to_string()),
    ]
}

pub struct EsvClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl EsvClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, EsvError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub async fn passage_html(&self, query: &PassageQuery) -> Result<PassageResponse, EsvError> {
        let url = format!("{}/v3/passage/html/", self.base_url);
        self.get_json(&url, &query.to_params()).await
    }

    pub async fn passage_search(&self, term: &str) -> Result<SearchResponse, EsvError> {
        let url = format!("{}/v3/passage/search/", self.base_url);
        self.get_json(&url, &search_params(term)).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, EsvError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .header(AUTHORIZATION, format!("Token {}", self.api_key))
            .send()
            .await
            .map_err(EsvError::Transport)?;

        if !response.status().is_success() {
            return Err(EsvError::UpstreamStatus(response.status()));
        }

        response.json::<T>().await.map_err(EsvError::Decode)
    }
}
