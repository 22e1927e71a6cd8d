//! Patent search and lookup.

use crate::api::path_segment;
use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};

pub const SEARCH_PATH: &str = "/patents/search";
pub const PATENT_PATH: &str = "/patents";

/// Query string for `GET /patents/search`. `jurisdictions` is only emitted
/// when present, once per value.
#[derive(Debug, Clone, PartialEq)]
pub struct PatentSearchParams {
    pub q: String,
    pub jurisdictions: Option<Vec<String>>,
}

impl PatentSearchParams {
    pub fn into_envelope(self) -> RequestEnvelope {
        RequestEnvelope::get(SEARCH_PATH)
            .with_query("q", self.q)
            .with_optional_list("jurisdictions", self.jurisdictions.as_deref())
    }
}

pub fn search_patents(query: impl Into<String>, jurisdictions: Option<Vec<String>>) -> RequestEnvelope {
    PatentSearchParams {
        q: query.into(),
        jurisdictions,
    }
    .into_envelope()
}

pub fn get_patent(patent_id: &str) -> RequestEnvelope {
    RequestEnvelope::get(format!("{}/{}", PATENT_PATH, path_segment(patent_id)))
}

impl<T: Transport> KnotClient<T> {
    pub async fn search_patents(
        &self,
        query: impl Into<String>,
        jurisdictions: Option<Vec<String>>,
    ) -> Result<ResponseEnvelope> {
        self.dispatch(search_patents(query, jurisdictions)).await
    }

    pub async fn get_patent(&self, patent_id: &str) -> Result<ResponseEnvelope> {
        self.dispatch(get_patent(patent_id)).await
    }
}
