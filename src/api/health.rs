//! Backend liveness probe.

use crate::core::{KnotClient, RequestEnvelope, ResponseEnvelope, Result, Transport};

pub const HEALTH_PATH: &str = "/health";

pub fn health_check() -> RequestEnvelope {
    RequestEnvelope::get(HEALTH_PATH)
}

impl<T: Transport> KnotClient<T> {
    pub async fn health_check(&self) -> Result<ResponseEnvelope> {
        self.dispatch(health_check()).await
    }
}
