// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A drop event carried no file.
    NoFileSelected,
    /// The file failed allow-list validation and was never ingested.
    UnsupportedFileType { file_name: String },
    /// The raster decoder rejected the payload, panicked, or timed out.
    DecodeFailed(String),
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoFileSelected => write!(f, "No file was selected"),
            Error::UnsupportedFileType { file_name } => {
                write!(f, "Unsupported file type: {}", file_name)
            }
            Error::DecodeFailed(e) => write!(f, "Image decoding failed: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_unsupported_file_type() {
        let err = Error::UnsupportedFileType {
            file_name: "notes.txt".to_string(),
        };
        assert_eq!(format!("{}", err), "Unsupported file type: notes.txt");
    }

    #[test]
    fn display_formats_no_file_selected() {
        assert_eq!(format!("{}", Error::NoFileSelected), "No file was selected");
    }

    #[test]
    fn display_formats_decode_failed() {
        let err = Error::DecodeFailed("truncated image".to_string());
        assert_eq!(format!("{}", err), "Image decoding failed: truncated image");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
