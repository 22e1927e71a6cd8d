use crate::domain::model::{RequestEnvelope, ResponseEnvelope};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// The single outbound channel every API module dispatches through.
///
/// Implementations resolve `request.path` against their own base prefix and
/// apply their own timeout. A triggered `cancel` token must abandon the call
/// with `KnotError::Cancelled`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: RequestEnvelope,
        cancel: &CancellationToken,
    ) -> Result<ResponseEnvelope>;
}

