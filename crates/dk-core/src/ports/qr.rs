use async_trait::async_trait;
use url::Url;

use crate::error::ToolResult;

/// Fetches a rendered QR image from the remote endpoint.
#[async_trait]
pub trait QrImagePort: Send + Sync {
    /// Returns the raw PNG bytes behind `url`.
    ///
    /// Transport failures and non-success statuses are reported as
    /// `ToolError::ExternalService`.
    async fn fetch(&self, url: &Url) -> ToolResult<Vec<u8>>;
}
