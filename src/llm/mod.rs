pub mod client;
pub mod error;
pub mod retry;

pub use client::{extract_reply, ChatClient};
pub use error::UpstreamError;
