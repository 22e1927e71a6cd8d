//! Patent-to-product matching.

use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};
use serde::Serialize;

pub const MATCH_PATH: &str = "/products/match";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMatchRequest {
    pub product_description: String,
    pub keywords: Vec<String>,
}

pub fn match_products(
    product_description: impl Into<String>,
    keywords: Vec<String>,
) -> Result<RequestEnvelope> {
    let body = ProductMatchRequest {
        product_description: product_description.into(),
        keywords,
    };
    RequestEnvelope::post(MATCH_PATH, &body)
}

impl<T: Transport> KnotClient<T> {
    pub async fn match_products(
        &self,
        product_description: impl Into<String>,
        keywords: Vec<String>,
    ) -> Result<ResponseEnvelope> {
        self.dispatch(match_products(product_description, keywords)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_match_products_shape() {
        let envelope =
            match_products("Smart thermostat", vec!["hvac".to_string(), "sensor".to_string()])
                .unwrap();

        assert_eq!(envelope.method, HttpMethod::Post);
        assert_eq!(envelope.path, "/products/match");
        assert_eq!(
            envelope.body,
            Some(json!({
                "product_description": "Smart thermostat",
                "keywords": ["hvac", "sensor"]
            }))
        );
    }
}
