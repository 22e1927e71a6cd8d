//! Freedom-to-operate analysis.

use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};
use serde::Serialize;

pub const ANALYZE_PATH: &str = "/fto/analyze";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FtoAnalyzeRequest {
    pub product_description: String,
    pub target_markets: Vec<String>,
    pub keywords: Vec<String>,
}

pub fn analyze_fto(
    product_description: impl Into<String>,
    target_markets: Vec<String>,
    keywords: Vec<String>,
) -> Result<RequestEnvelope> {
    let body = FtoAnalyzeRequest {
        product_description: product_description.into(),
        target_markets,
        keywords,
    };
    RequestEnvelope::post(ANALYZE_PATH, &body)
}

impl<T: Transport> KnotClient<T> {
    pub async fn analyze_fto(
        &self,
        product_description: impl Into<String>,
        target_markets: Vec<String>,
        keywords: Vec<String>,
    ) -> Result<ResponseEnvelope> {
        self.dispatch(analyze_fto(product_description, target_markets, keywords)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_analyze_fto_maps_wire_names() {
        let envelope = analyze_fto(
            "Solid-state battery pack",
            vec!["US".to_string(), "IN".to_string()],
            vec!["electrolyte".to_string()],
        )
        .unwrap();

        assert_eq!(envelope.method, HttpMethod::Post);
        assert_eq!(envelope.path, "/fto/analyze");
        assert_eq!(
            envelope.body,
            Some(json!({
                "product_description": "Solid-state battery pack",
                "target_markets": ["US", "IN"],
                "keywords": ["electrolyte"]
            }))
        );

        let body = envelope.body.unwrap();
        let object = body.as_object().unwrap();
        assert!(!object.contains_key("productDescription"));
        assert!(!object.contains_key("targetMarkets"));
    }

    #[test]
    fn test_empty_lists_are_still_sent() {
        let envelope = analyze_fto("Widget", vec![], vec![]).unwrap();
        assert_eq!(envelope.body.unwrap()["target_markets"], json!([]));
    }
}
