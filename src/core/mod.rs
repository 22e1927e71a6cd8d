pub mod client;

pub use crate::domain::model::{HttpMethod, RequestEnvelope, ResponseEnvelope};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
pub use client::KnotClient;
