use crate::utils::error::{KnotError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound call, shaped but not yet dispatched.
///
/// `path` is relative to the transport's base prefix. Query parameters keep
/// insertion order and may repeat a key (list-valued parameters are sent as
/// `key=a&key=b`). The timeout is not stored here; every envelope inherits
/// the transport's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestEnvelope {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Appends `key` once per value. An absent list adds nothing at all.
    pub fn with_optional_list<S: AsRef<str>>(mut self, key: &str, values: Option<&[S]>) -> Self {
        if let Some(values) = values {
            for value in values {
                self.query.push((key.to_string(), value.as_ref().to_string()));
            }
        }
        self
    }

    pub fn query_values(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has_query(&self, key: &str) -> bool {
        self.query.iter().any(|(k, _)| k == key)
    }
}

/// A successful inbound result. The payload is the backend's JSON as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub payload: serde_json::Value,
}

impl ResponseEnvelope {
    pub fn new(status: u16, payload: serde_json::Value) -> Self {
        Self { status, payload }
    }

    /// Opt-in typed view of the payload.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.payload.clone()).map_err(KnotError::Decode)
    }

    pub fn into_payload(self) -> serde_json::Value {
        self.payload
    }
}
