//! Free-text questions routed by the backend to whichever analysis fits.

use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};
use serde::Serialize;

pub use crate::api::health::health_check;

pub const QUERY_PATH: &str = "/query";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub query: String,
}

pub fn submit_query(text: impl Into<String>) -> Result<RequestEnvelope> {
    RequestEnvelope::post(QUERY_PATH, &QueryRequest { query: text.into() })
}

impl<T: Transport> KnotClient<T> {
    pub async fn submit_query(&self, text: impl Into<String>) -> Result<ResponseEnvelope> {
        self.dispatch(submit_query(text)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_submit_query_shape() {
        let envelope = submit_query("Who owns the battery patents filed by Acme?").unwrap();
        assert_eq!(envelope.method, HttpMethod::Post);
        assert_eq!(envelope.path, "/query");
        assert_eq!(
            envelope.body,
            Some(json!({"query": "Who owns the battery patents filed by Acme?"}))
        );
    }

    #[test]
    fn test_health_check_reexported() {
        assert_eq!(health_check().path, "/health");
    }
}
