use std::path::Path;

use crate::codec::ImageConversion;
use crate::error::ToolResult;

/// Reads an image file from disk and renders it as a `data:` URL.
pub trait ImageFilePort: Send + Sync {
    /// Files that are not a recognised image format are rejected with
    /// `ToolError::InvalidFormat`.
    fn read_data_url(&self, path: &Path) -> ToolResult<ImageConversion>;
}
