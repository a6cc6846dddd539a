// SPDX-License-Identifier: MPL-2.0
//! Reading accepted files into parseable raw content.
//!
//! The read mode is chosen by declared MIME type: SVG files are read as text,
//! everything else becomes a base64 data URI. Reads are asynchronous and each
//! belongs to an ingest generation handed out by the upload state; the caller
//! is responsible for discarding completions of superseded generations.

use crate::error::Result;
use crate::media::{self, raster, SVG_MIME};
use std::path::{Path, PathBuf};

/// A validated file awaiting ingestion. Owned by the read task for the
/// duration of one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
}

impl CandidateFile {
    /// Builds a candidate from a dropped or picked path, declaring its MIME
    /// type from the file extension.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let mime = media::declared_mime(&path).to_string();
        Self { path, name, mime }
    }
}

/// How a candidate's bytes are turned into raw content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// SVG markup, read as UTF-8 text.
    SvgText,
    /// Any other format, read as a base64 data URI.
    DataUri,
}

/// Chooses the read mode for a declared MIME type.
#[must_use]
pub fn read_mode(mime: &str) -> ReadMode {
    if mime == SVG_MIME {
        ReadMode::SvgText
    } else {
        ReadMode::DataUri
    }
}

/// Raw content of a completed read, ready for the matching parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestPayload {
    pub raw_content: String,
    pub mode: ReadMode,
    pub name: String,
}

/// Reads a candidate's bytes according to its declared MIME type.
pub async fn read_file(file: CandidateFile) -> Result<IngestPayload> {
    let mode = read_mode(&file.mime);
    let raw_content = match mode {
        ReadMode::SvgText => read_text(&file.path).await?,
        ReadMode::DataUri => {
            let bytes = tokio::fs::read(&file.path).await?;
            raster::encode_data_uri(&file.mime, &bytes)
        }
    };

    Ok(IngestPayload {
        raw_content,
        mode,
        name: file.name,
    })
}

async fn read_text(path: &Path) -> Result<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}
