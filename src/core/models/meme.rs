use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeRecord {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl MemeRecord {
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            title,
        }
    }
}

/// Body returned by the search endpoint.
///
/// Two shapes are in use: a list of records under `memes`, and a bare
/// list of image URLs under `recommended_items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Records { memes: Vec<MemeRecord> },
    ImageLinks { recommended_items: Vec<String> },
}

impl SearchResponse {
    pub fn into_records(self) -> Vec<MemeRecord> {
        match self {
            SearchResponse::Records { memes } => memes,
            SearchResponse::ImageLinks { recommended_items } => recommended_items
                .into_iter()
                .map(|url| MemeRecord::new(url, None))
                .collect(),
        }
    }
}
