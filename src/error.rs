/// Error types shared by the session, the media loader and settings
///
/// Every variant carries owned strings so the error can travel inside
/// iced messages, which must be `Clone`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The selected file does not have an `image/*` media type
    #[error("Please upload an image file ({filename} is {media_type})")]
    InvalidFileType {
        filename: String,
        media_type: String,
    },

    /// The selected file could not be read from disk
    #[error("Could not read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// The settings file could not be read or parsed
    #[error("Invalid settings file {}: {reason}", path.display())]
    Settings { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_type_message() {
        let err = Error::InvalidFileType {
            filename: "notes.txt".to_string(),
            media_type: "text/plain".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Please upload an image file (notes.txt is text/plain)"
        );
    }
}
