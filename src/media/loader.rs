/// Selected-file loader
///
/// Turns a path from the file dialog or a window drop into a `SelectedFile`.
/// The media type is guessed from the extension; the contents are only read
/// for image types, since the session rejects everything else on type alone.

use std::path::PathBuf;
use tracing::debug;

use crate::error::{Error, Result};
use crate::state::SelectedFile;

/// Media type used when the extension is unknown
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Extensions offered by the browse dialog
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff",
];

/// Guess the media type of `path` from its extension
pub fn media_type_of(path: &std::path::Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
        .to_string()
}

pub async fn load_selected_file(path: PathBuf) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let media_type = media_type_of(&path);

    if !media_type.starts_with("image/") {
        debug!("Not reading {} ({})", path.display(), media_type);
        return Ok(SelectedFile {
            name,
            media_type,
            bytes: Vec::new(),
        });
    }

    let bytes = tokio::fs::read(&path).await.map_err(|e| Error::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    debug!("📂 Read {} bytes from {}", bytes.len(), path.display());

    Ok(SelectedFile {
        name,
        media_type,
        bytes,
    })
}
