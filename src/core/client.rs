use crate::adapters::HttpTransport;
use crate::config::TransportConfig;
use crate::domain::model::{RequestEnvelope, ResponseEnvelope};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Entry point for every backend capability.
///
/// The per-capability methods (`resolve_company`, `analyze_fto`, ...) live in
/// the `api` modules. Each one shapes exactly one [`RequestEnvelope`] and
/// hands it to [`dispatch`](Self::dispatch); responses come back untouched.
///
/// Clones share the transport. [`with_cancellation`](Self::with_cancellation)
/// returns a handle whose calls are abandoned once the given token fires.
pub struct KnotClient<T: Transport> {
    transport: Arc<T>,
    cancel: CancellationToken,
}

impl<T: Transport> Clone for KnotClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cancel: self.cancel.clone(),
        }
    }
}

impl KnotClient<HttpTransport> {
    pub fn from_config(config: TransportConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> KnotClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cancel: token,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub async fn dispatch(&self, request: RequestEnvelope) -> Result<ResponseEnvelope> {
        self.transport.send(request, &self.cancel).await
    }
}
