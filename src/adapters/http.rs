use crate::config::TransportConfig;
use crate::domain::model::{HttpMethod, RequestEnvelope, ResponseEnvelope};
use crate::domain::ports::Transport;
use crate::utils::error::{KnotError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tokio_util::sync::CancellationToken;

/// reqwest-backed transport. Holds nothing but its fixed configuration and a
/// connection pool, so it is safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: TransportConfig,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.effective_headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                KnotError::InvalidConfigValueError {
                    field: "transport.headers".to_string(),
                    value: name.clone(),
                    reason: format!("Invalid header name: {}", e),
                }
            })?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|e| KnotError::InvalidConfigValueError {
                    field: format!("transport.headers.{}", name),
                    value: value.clone(),
                    reason: format!("Invalid header value: {}", e),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(KnotError::Transport)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// URL parsing folds `.`/`..` segments (escaped or not) into their
    /// parent, which would send the call to a different route.
    fn reject_dot_segments(path: &str) -> Result<()> {
        let collapses = path.split('/').any(|segment| {
            let unescaped = segment.to_ascii_lowercase().replace("%2e", ".");
            unescaped == "." || unescaped == ".."
        });
        if collapses {
            return Err(KnotError::InvalidConfigValueError {
                field: "request.path".to_string(),
                value: path.to_string(),
                reason: "Dot segments would be normalised into a different route".to_string(),
            });
        }
        Ok(())
    }

    fn classify(&self, error: reqwest::Error, url: &str) -> KnotError {
        if error.is_timeout() {
            tracing::warn!(
                "⏱️ {} timed out after {}s",
                url,
                self.config.timeout_seconds
            );
            KnotError::Timeout {
                url: url.to_string(),
                timeout_seconds: self.config.timeout_seconds,
            }
        } else {
            tracing::warn!("📡 {} failed before a response arrived: {}", url, error);
            KnotError::Transport(error)
        }
    }

    async fn exchange(&self, request: &RequestEnvelope, url: &str) -> Result<ResponseEnvelope> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(e, url))?;
        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", request.method, url, status);

        if !status.is_success() {
            tracing::warn!("📡 {} {} returned {}", request.method, url, status);
            // 狀態碼優先於讀取失敗
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("📡 {} {} body unreadable: {}", request.method, url, e);
                    String::new()
                }
            };
            return Err(KnotError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| self.classify(e, url))?;

        // 空回應視為 null
        let payload = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).map_err(KnotError::Decode)?
        };

        Ok(ResponseEnvelope::new(status.as_u16(), payload))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: RequestEnvelope,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope> {
        Self::reject_dot_segments(&request.path)?;
        let url = self.config.resolve_url(&request.path);
        tracing::debug!("📡 {} {} (query: {:?})", request.method, url, request.query);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!("🛑 {} {} cancelled by caller", request.method, url);
                Err(KnotError::Cancelled { url: url.clone() })
            }
            result = self.exchange(&request, &url) => result,
        }
    }
}
