//! Corporate ownership: resolve a company name and fetch its ownership graph.

use crate::api::path_segment;
use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};
use serde::Serialize;

pub const RESOLVE_PATH: &str = "/corporate/resolve";
pub const GRAPH_PATH: &str = "/corporate/graph";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveCompanyRequest {
    pub company_name: String,
}

pub fn resolve_company(company_name: impl Into<String>) -> Result<RequestEnvelope> {
    let body = ResolveCompanyRequest {
        company_name: company_name.into(),
    };
    RequestEnvelope::post(RESOLVE_PATH, &body)
}

pub fn get_ownership_graph(company_id: &str) -> RequestEnvelope {
    RequestEnvelope::get(format!("{}/{}", GRAPH_PATH, path_segment(company_id)))
}

impl<T: Transport> KnotClient<T> {
    pub async fn resolve_company(&self, company_name: impl Into<String>) -> Result<ResponseEnvelope> {
        self.dispatch(resolve_company(company_name)?).await
    }

    pub async fn get_ownership_graph(&self, company_id: &str) -> Result<ResponseEnvelope> {
        self.dispatch(get_ownership_graph(company_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_resolve_company_shape() {
        let envelope = resolve_company("Acme Corp").unwrap();
        assert_eq!(envelope.method, HttpMethod::Post);
        assert_eq!(envelope.path, "/corporate/resolve");
        assert_eq!(envelope.body, Some(json!({"company_name": "Acme Corp"})));
        assert!(envelope.query.is_empty());
    }

    #[test]
    fn test_ownership_graph_uses_path_param_only() {
        let envelope = get_ownership_graph("c-123");
        assert_eq!(envelope.method, HttpMethod::Get);
        assert_eq!(envelope.path, "/corporate/graph/c-123");
        assert!(envelope.body.is_none());
        assert!(envelope.query.is_empty());
    }

    #[test]
    fn test_ownership_graph_escapes_dot_ids() {
        assert_eq!(get_ownership_graph("..").path, "/corporate/graph/%2E%2E");
        assert_eq!(get_ownership_graph("a/b").path, "/corporate/graph/a%2Fb");
    }
}
