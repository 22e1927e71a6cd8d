//! Technology landscape: clusters and white-space opportunities for a domain.

use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};
use serde::Serialize;

pub const ANALYZE_PATH: &str = "/landscape/analyze";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandscapeRequest {
    pub domain: String,
    pub keywords: Vec<String>,
}

pub fn analyze_landscape(domain: impl Into<String>, keywords: Vec<String>) -> Result<RequestEnvelope> {
    let body = LandscapeRequest {
        domain: domain.into(),
        keywords,
    };
    RequestEnvelope::post(ANALYZE_PATH, &body)
}

impl<T: Transport> KnotClient<T> {
    pub async fn analyze_landscape(
        &self,
        domain: impl Into<String>,
        keywords: Vec<String>,
    ) -> Result<ResponseEnvelope> {
        self.dispatch(analyze_landscape(domain, keywords)?).await
    }
}
