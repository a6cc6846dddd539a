// SPDX-License-Identifier: MPL-2.0
//! Parsing of accepted files into displayable assets.
//!
//! Two paths: SVG markup is scanned for declared dimensions and registered as
//! a revocable blob ([`svg`]); everything else is decoded for intrinsic pixel
//! dimensions from a data URI ([`raster`]). Both produce a [`ParsedAsset`].

pub mod raster;
pub mod svg;

pub use raster::parse_raster;
pub use svg::parse_svg;

use crate::content::ContentRef;
use std::path::Path;

/// Declared MIME type that routes a file through the SVG path.
pub const SVG_MIME: &str = "image/svg+xml";

/// Extension to declared MIME type, for candidates coming from bare paths.
pub mod mime {
    /// Extension/MIME pairs for the formats the pipeline understands.
    pub const KNOWN_TYPES: &[(&str, &str)] = &[
        ("svg", super::SVG_MIME),
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
        ("tif", "image/tiff"),
        ("tiff", "image/tiff"),
        ("ico", "image/x-icon"),
    ];

    /// Returns the declared MIME type for a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> &'static str {
        let ext = ext.to_lowercase();
        KNOWN_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, mime)| *mime)
            .unwrap_or("application/octet-stream")
    }

    /// Returns the canonical extension for a MIME type, if known.
    #[must_use]
    pub fn extension_for(mime: &str) -> Option<&'static str> {
        KNOWN_TYPES
            .iter()
            .find(|(_, known)| *known == mime)
            .map(|(ext, _)| *ext)
    }
}

/// Declares a MIME type for a path based on its extension.
#[must_use]
pub fn declared_mime<P: AsRef<Path>>(path: P) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    mime::from_extension(extension)
}

/// Intrinsic dimensions and source name of a parsed asset.
///
/// Either fully populated or absent; the pipeline never exposes a partial
/// record. Dimensions are always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMetadata {
    pub width: u32,
    pub height: u32,
    pub name: String,
}

/// Output of a successful parse: a display reference plus metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAsset {
    pub content: ContentRef,
    pub metadata: AssetMetadata,
}
