use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

// Field names are the ESV API wire names; fields are relayed without rewriting.
#[derive(Debug, Serialize, Deserialize)]
pub struct PassageResponse {
    pub query: String,
    pub canonical: String,
    pub parsed: Vec<Vec<u64>>,
    pub passage_meta: Vec<PassageMeta>,
    pub passages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PassageMeta {
    pub canonical: String,
    pub chapter_start: Vec<u64>,
    pub chapter_end: Vec<u64>,
    // null at the edges of the canon
    pub prev_verse: Option<u64>,
    pub next_verse: Option<u64>,
    pub prev_chapter: Option<Vec<u64>>,
    pub next_chapter: Option<Vec<u64>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub page: u32,
    pub total_results: u32,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub reference: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightedVerse {
    pub reference: String,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightedVersesResponse {
    pub verses: Vec<HighlightedVerse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
