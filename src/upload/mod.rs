// SPDX-License-Identifier: MPL-2.0
//! The file ingestion pipeline.
//!
//! Drag gesture tracking ([`dropzone`]) feeds accepted files through the
//! validator ([`allowlist`]) into the reader ([`ingest`]); parsed results
//! land in the session [`state`]. The flow is:
//! dropzone (or file picker) → allow-list → read → parse → upload state.

pub mod allowlist;
pub mod dropzone;
pub mod ingest;
pub mod state;

pub use allowlist::AllowList;
pub use dropzone::{DragState, Dropzone};
pub use ingest::{read_file, CandidateFile, IngestPayload, ReadMode};
pub use state::UploadState;
