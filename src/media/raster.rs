// SPDX-License-Identifier: MPL-2.0
//! Raster asset parsing.
//!
//! Raster files travel through the pipeline as base64 data URIs. Parsing
//! decodes the payload on a blocking task to learn the intrinsic pixel
//! dimensions; the content reference stays the data URI itself. Every way a
//! decode can go wrong, including never finishing within the configured
//! timeout, surfaces as [`Error::DecodeFailed`].

use crate::content::ContentRef;
use crate::error::{Error, Result};
use crate::media::{AssetMetadata, ParsedAsset};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image_rs::GenericImageView;
use std::time::Duration;

/// Wraps raw file bytes in a self-contained `data:` URI.
#[must_use]
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Recovers the raw bytes from a base64 `data:` URI.
#[must_use]
pub fn data_uri_bytes(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    BASE64.decode(payload).ok()
}

/// Decodes a raster asset to obtain its intrinsic dimensions.
///
/// `timeout` bounds the whole decode; `None` waits indefinitely. On success
/// the returned asset carries the same data URI as its content reference.
pub async fn parse_raster(
    content: String,
    file_name: String,
    timeout: Option<Duration>,
) -> Result<ParsedAsset> {
    let (width, height) = match timeout {
        Some(limit) => tokio::time::timeout(limit, decode_dimensions(&content))
            .await
            .map_err(|_| {
                Error::DecodeFailed(format!(
                    "decode did not finish within {}ms",
                    limit.as_millis()
                ))
            })??,
        None => decode_dimensions(&content).await?,
    };

    Ok(ParsedAsset {
        content: ContentRef::Data(content),
        metadata: AssetMetadata {
            width,
            height,
            name: file_name,
        },
    })
}

async fn decode_dimensions(content: &str) -> Result<(u32, u32)> {
    let bytes = data_uri_bytes(content)
        .ok_or_else(|| Error::DecodeFailed("content is not a base64 data URI".into()))?;

    tokio::task::spawn_blocking(move || {
        image_rs::load_from_memory(&bytes)
            .map(|img| img.dimensions())
            .map_err(|e| Error::DecodeFailed(e.to_string()))
    })
    .await
    .map_err(|e| Error::DecodeFailed(format!("decode task failed: {e}")))?
}
