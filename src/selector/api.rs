pub mod client;
mod error;
mod response;

pub use client::Client;
pub use error::{Error, Result};

use crate::problem::{Problem, Submission};
use async_trait::async_trait;

/// Read-only endpoints of the judge.
#[async_trait]
pub trait Judge: Send + Sync {
    /// `Ok(false)` when the judge does not know the handle.
    async fn user_exists(&self, handle: &str) -> Result<bool>;
    async fn problems(&self, tag: &str) -> Result<Vec<Problem>>;
    async fn submissions(&self, handle: &str) -> Result<Vec<Submission>>;
}
