use std::path::Path;
use std::sync::Arc;

use dk_core::codec::ImageConversion;
use dk_core::error::ToolResult;
use dk_core::ports::ImageFilePort;
use tracing::info;

/// Converts an image file on disk into a `data:` URL.
pub struct ConvertImageFile {
    reader: Arc<dyn ImageFilePort>,
}

impl ConvertImageFile {
    pub fn from_port(reader: Arc<dyn ImageFilePort>) -> Self {
        Self { reader }
    }

    #[tracing::instrument(name = "usecase.convert_image.execute", skip(self), fields(path = %path.display()))]
    pub fn execute(&self, path: &Path) -> ToolResult<ImageConversion> {
        let conversion = self.reader.read_data_url(path)?;
        info!(
            file = %conversion.file_name,
            size = %conversion.size_label,
            encoded_len = conversion.data_url.len(),
            "Image converted successfully"
        );
        Ok(conversion)
    }
}
