// SPDX-License-Identifier: MPL-2.0
//! SVG asset parsing.
//!
//! Reads the declared `width`/`height` attributes off the root element and
//! registers the markup in the content store as a revocable blob. The parser
//! is deliberately infallible: markup that yields no usable attributes gets
//! the standard replaced-element fallback of 300×150, mirroring how display
//! layers treat dimensionless SVG.

use crate::content::{ContentRef, ContentStore};
use crate::media::{AssetMetadata, ParsedAsset};
use quick_xml::events::Event;
use quick_xml::Reader;

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 150;

/// Parses SVG markup into a displayable asset.
///
/// Synchronous: dimensions come straight from the root element attributes,
/// no rendering is involved. The returned blob reference is owned by whoever
/// installs it and must be released through the store when superseded.
pub fn parse_svg(markup: &str, file_name: &str, store: &mut ContentStore) -> ParsedAsset {
    let (width, height) = root_dimensions(markup);
    let content = store.insert(markup.as_bytes().to_vec());

    ParsedAsset {
        content,
        metadata: AssetMetadata {
            width,
            height,
            name: file_name.to_string(),
        },
    }
}

/// Extracts declared dimensions from the first element of the markup,
/// falling back to 300×150 per attribute.
fn root_dimensions(markup: &str) -> (u32, u32) {
    let mut width = None;
    let mut height = None;

    let mut reader = Reader::from_str(markup);
    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                for attr in element.attributes().flatten() {
                    let value = match attr.unescape_value() {
                        Ok(value) => value,
                        Err(_) => continue,
                    };
                    match attr.key.local_name().as_ref() {
                        b"width" => width = int_prefix(&value),
                        b"height" => height = int_prefix(&value),
                        _ => {}
                    }
                }
                break;
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    (
        width.unwrap_or(DEFAULT_WIDTH),
        height.unwrap_or(DEFAULT_HEIGHT),
    )
}

/// Leading-integer parse: `"640px"` is 640, `"auto"` is nothing. Zero counts
/// as unusable so metadata dimensions stay positive.
fn int_prefix(value: &str) -> Option<u32> {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(markup: &str) -> (ParsedAsset, ContentStore) {
        let mut store = ContentStore::new();
        let asset = parse_svg(markup, "sample.svg", &mut store);
        (asset, store)
    }

    #[test]
    fn declared_dimensions_are_read_from_the_root_element() {
        let (asset, _) = parse(r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="480"></svg>"#);
        assert_eq!(asset.metadata.width, 640);
        assert_eq!(asset.metadata.height, 480);
        assert_eq!(asset.metadata.name, "sample.svg");
    }

    #[test]
    fn missing_dimensions_fall_back_to_defaults() {
        let (asset, _) = parse(r#"<svg xmlns="http://www.w3.org/2000/svg"><rect/></svg>"#);
        assert_eq!(asset.metadata.width, DEFAULT_WIDTH);
        assert_eq!(asset.metadata.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn unit_suffixed_dimensions_parse_as_their_integer_prefix() {
        let (asset, _) = parse(r#"<svg width="640px" height="480px"/>"#);
        assert_eq!(asset.metadata.width, 640);
        assert_eq!(asset.metadata.height, 480);
    }

    #[test]
    fn unparsable_or_zero_dimensions_fall_back() {
        let (asset, _) = parse(r#"<svg width="auto" height="0"/>"#);
        assert_eq!(asset.metadata.width, DEFAULT_WIDTH);
        assert_eq!(asset.metadata.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn percentage_dimensions_parse_as_their_integer_prefix() {
        // Same leading-integer rule as unit suffixes: "100%" reads as 100.
        let (asset, _) = parse(r#"<svg width="100%" height="50%"/>"#);
        assert_eq!(asset.metadata.width, 100);
        assert_eq!(asset.metadata.height, 50);
    }

    #[test]
    fn broken_markup_still_produces_an_asset_with_defaults() {
        let (asset, store) = parse("<svg>oops");
        assert_eq!(asset.metadata.width, DEFAULT_WIDTH);
        assert_eq!(asset.metadata.height, DEFAULT_HEIGHT);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn markup_bytes_are_registered_behind_the_reference() {
        let markup = r#"<svg width="6" height="3"/>"#;
        let (asset, store) = parse(markup);
        let bytes = store.resolve(&asset.content).expect("blob should resolve");
        assert_eq!(bytes.as_ref(), markup.as_bytes());
    }

    #[test]
    fn leading_whitespace_before_digits_is_accepted() {
        assert_eq!(int_prefix("  42pt"), Some(42));
        assert_eq!(int_prefix("auto"), None);
        assert_eq!(int_prefix(""), None);
    }
}
