use anyhow::{Context, Result};
use dk_core::codec::ImageConversion;
use dk_core::ports::ImageFilePort;
use dk_core::{error::ToolResult, ToolError};
use std::fs;
use std::path::Path;
use tracing::debug;

const NOT_AN_IMAGE: &str = "Please select an image file";

/// Reads `path` and renders it as a `data:` URL.
///
/// The MIME type comes from the file's magic bytes, not its extension. The
/// image itself is never decoded.
///
/// Read failures come back as `anyhow` errors; a readable file that is not an
/// image comes back as `ToolError::InvalidFormat` wrapped in the same error,
/// so callers can downcast.
pub fn read_image_data_url(path: &Path) -> Result<ImageConversion> {
    let bytes =
        fs::read(path).with_context(|| format!("read image file failed: {}", path.display()))?;

    let format = image::guess_format(&bytes)
        .map_err(|_| ToolError::invalid_format(NOT_AN_IMAGE))?;
    let mime = format.to_mime_type();

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(file = %file_name, mime, bytes = bytes.len(), "image converted to data url");
    Ok(ImageConversion::new(file_name, &bytes, mime))
}

/// [`ImageFilePort`] over the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFileReader;

impl ImageFilePort for ImageFileReader {
    fn read_data_url(&self, path: &Path) -> ToolResult<ImageConversion> {
        read_image_data_url(path).map_err(|err| match err.downcast::<ToolError>() {
            Ok(tool_err) => tool_err,
            Err(err) => ToolError::invalid_format(format!("Failed to read file: {err:#}")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn png_bytes() -> Vec<u8> {
        let image = image::RgbImage::new(2, 2);
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn png_becomes_png_data_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pixel.png");
        let bytes = png_bytes();
        fs::write(&path, &bytes).unwrap();

        let conversion = read_image_data_url(&path).unwrap();
        assert_eq!(conversion.file_name, "pixel.png");
        assert!(conversion.data_url.starts_with("data:image/png;base64,iVBORw0KGgo"));
        assert_eq!(
            conversion.size_label,
            dk_core::codec::data_url::format_file_size(bytes.len() as u64)
        );
    }

    #[test]
    fn mime_comes_from_content_not_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("really-a-gif.png");
        fs::write(&path, b"GIF89a\x01\x00\x01\x00").unwrap();

        let conversion = ImageFileReader.read_data_url(&path).unwrap();
        assert!(conversion.data_url.starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn text_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "just some text").unwrap();

        assert_eq!(
            ImageFileReader.read_data_url(&path),
            Err(ToolError::InvalidFormat(NOT_AN_IMAGE.to_string()))
        );
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let dir = TempDir::new().unwrap();
        let err = ImageFileReader
            .read_data_url(&dir.path().join("missing.png"))
            .unwrap_err();
        match err {
            ToolError::InvalidFormat(msg) => assert!(msg.starts_with("Failed to read file")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
