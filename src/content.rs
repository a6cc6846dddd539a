// SPDX-License-Identifier: MPL-2.0
//! In-memory content store backing displayable references.
//!
//! Vector assets are kept as raw bytes in a session-local registry and
//! addressed through a revocable `blob:` URI; raster assets travel as
//! self-contained data URIs and need no registry entry. Releasing a blob
//! through the store frees its bytes. Release is idempotent: references are
//! cheap string-like values that may be cloned (messages require it), and a
//! stale clone simply no longer resolves.

use std::collections::HashMap;
use std::sync::Arc;

const BLOB_URI_PREFIX: &str = "blob:iced-dropzone/";

/// A string reference a display layer can resolve into pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentRef {
    /// No content installed.
    #[default]
    Empty,
    /// Self-contained `data:` URI.
    Data(String),
    /// Revocable reference into the [`ContentStore`].
    Blob(BlobRef),
}

impl ContentRef {
    /// The reference as a display-source string. Empty references render as
    /// the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            ContentRef::Empty => "",
            ContentRef::Data(uri) => uri,
            ContentRef::Blob(blob) => &blob.uri,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ContentRef::Empty)
    }
}

/// Handle to registered bytes. Resolvable until released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    id: u64,
    uri: String,
}

impl BlobRef {
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Registry of transient byte buffers addressed by blob references.
///
/// Owned by the application root; the pipeline allocates into it when parsing
/// vector content and the upload state releases superseded entries.
#[derive(Debug, Default)]
pub struct ContentStore {
    next_id: u64,
    blobs: HashMap<u64, Arc<[u8]>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` and returns an owning reference to them.
    pub fn insert(&mut self, bytes: Vec<u8>) -> ContentRef {
        let id = self.next_id;
        self.next_id += 1;
        self.blobs.insert(id, bytes.into());
        ContentRef::Blob(BlobRef {
            id,
            uri: format!("{BLOB_URI_PREFIX}{id}"),
        })
    }

    /// Resolves a reference to its bytes, if still registered.
    pub fn resolve(&self, content: &ContentRef) -> Option<Arc<[u8]>> {
        match content {
            ContentRef::Blob(blob) => self.blobs.get(&blob.id).cloned(),
            _ => None,
        }
    }

    /// Frees the bytes behind a blob reference. Non-blob references and
    /// already-released blobs are ignored.
    pub fn release(&mut self, content: &ContentRef) {
        if let ContentRef::Blob(blob) = content {
            self.blobs.remove(&blob.id);
        }
    }

    /// Number of live blob entries.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
