//! Prior-art search against an existing patent.

use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};
use serde::Serialize;

pub const PRIOR_ART_PATH: &str = "/validity/prior-art";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorArtRequest {
    pub patent_id: String,
    pub keywords: Vec<String>,
}

pub fn find_prior_art(patent_id: impl Into<String>, keywords: Vec<String>) -> Result<RequestEnvelope> {
    let body = PriorArtRequest {
        patent_id: patent_id.into(),
        keywords,
    };
    RequestEnvelope::post(PRIOR_ART_PATH, &body)
}

impl<T: Transport> KnotClient<T> {
    pub async fn find_prior_art(
        &self,
        patent_id: impl Into<String>,
        keywords: Vec<String>,
    ) -> Result<ResponseEnvelope> {
        self.dispatch(find_prior_art(patent_id, keywords)?).await
    }
}
