// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ParsedAsset;
use crate::upload::IngestPayload;
use std::path::PathBuf;

/// Launch flags parsed by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to ingest immediately at startup.
    pub file_path: Option<String>,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A drag carrying files entered the window.
    DragEntered,
    /// All hovered files left the window.
    DragLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Trigger the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file read finished for the given ingest generation.
    FileRead {
        generation: u64,
        result: Result<IngestPayload, Error>,
    },
    /// A raster decode finished for the given ingest generation.
    RasterDecoded {
        generation: u64,
        result: Result<ParsedAsset, Error>,
    },
    /// Clear the current upload.
    ClearUpload,
    /// Dismiss the status line.
    DismissError,
}
