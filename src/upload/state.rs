// SPDX-License-Identifier: MPL-2.0
//! Session upload state.
//!
//! Exactly one `UploadState` exists per session. Overlapping ingests are
//! serialized by a monotonic generation counter: every ingest takes a fresh
//! generation at start, completions carry it back, and anything stale is
//! discarded — the newest ingest always wins, however slowly an older read
//! or decode resolves. Installing or cancelling releases the previously
//! owned blob handle so superseded vector content does not accumulate.

use crate::content::{ContentRef, ContentStore};
use crate::media::{AssetMetadata, ParsedAsset};

#[derive(Debug, Default)]
pub struct UploadState {
    raw_content: String,
    image_content: ContentRef,
    image_metadata: Option<AssetMetadata>,
    generation: u64,
}

impl UploadState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new ingest and returns its generation. Any completion still
    /// in flight for an earlier generation is superseded from this moment.
    pub fn begin_ingest(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a completion for `generation` is still the active ingest.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Stores the raw text/data of a completed read, before parsing.
    pub fn set_raw_content(&mut self, raw_content: String) {
        self.raw_content = raw_content;
    }

    /// Installs a parsed asset, releasing the previously owned content
    /// handle. Trusts upstream validation.
    pub fn install(&mut self, asset: ParsedAsset, store: &mut ContentStore) {
        store.release(&self.image_content);
        self.image_content = asset.content;
        self.image_metadata = Some(asset.metadata);
    }

    /// Clears the upload entirely: content reference, metadata, and raw
    /// content, releasing the owned handle.
    pub fn cancel(&mut self, store: &mut ContentStore) {
        store.release(&self.image_content);
        self.image_content = ContentRef::Empty;
        self.image_metadata = None;
        self.raw_content.clear();
    }

    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    #[must_use]
    pub fn image_content(&self) -> &ContentRef {
        &self.image_content
    }

    #[must_use]
    pub fn image_metadata(&self) -> Option<&AssetMetadata> {
        self.image_metadata.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::svg::parse_svg;

    fn svg_asset(store: &mut ContentStore, name: &str) -> ParsedAsset {
        parse_svg(r#"<svg width="6" height="3"/>"#, name, store)
    }

    #[test]
    fn install_populates_content_and_metadata_together() {
        let mut store = ContentStore::new();
        let mut state = UploadState::new();
        let asset = svg_asset(&mut store, "a.svg");

        state.set_raw_content("<svg/>".into());
        state.install(asset, &mut store);

        assert!(!state.image_content().is_empty());
        let metadata = state.image_metadata().expect("metadata should be set");
        assert_eq!(metadata.name, "a.svg");
        assert_eq!((metadata.width, metadata.height), (6, 3));
    }

    #[test]
    fn install_releases_the_superseded_blob() {
        let mut store = ContentStore::new();
        let mut state = UploadState::new();

        let first = svg_asset(&mut store, "a.svg");
        let first_ref = first.content.clone();
        state.install(first, &mut store);

        let second = svg_asset(&mut store, "b.svg");
        state.install(second, &mut store);

        assert_eq!(store.len(), 1, "only the live blob should remain");
        assert!(store.resolve(&first_ref).is_none());
        assert!(store.resolve(state.image_content()).is_some());
    }

    #[test]
    fn cancel_clears_everything_and_releases_the_blob() {
        let mut store = ContentStore::new();
        let mut state = UploadState::new();
        state.set_raw_content("<svg/>".into());
        let asset = svg_asset(&mut store, "a.svg");
        state.install(asset, &mut store);

        state.cancel(&mut store);

        assert!(state.image_content().is_empty());
        assert!(state.image_metadata().is_none());
        assert!(state.raw_content().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn cancel_on_an_empty_state_is_harmless() {
        let mut store = ContentStore::new();
        let mut state = UploadState::new();
        state.cancel(&mut store);
        assert!(state.image_metadata().is_none());
    }

    #[test]
    fn generations_are_monotonic_and_supersede_older_ingests() {
        let mut state = UploadState::new();
        let first = state.begin_ingest();
        let second = state.begin_ingest();

        assert!(second > first);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn stale_completion_is_detectable_after_install() {
        let mut store = ContentStore::new();
        let mut state = UploadState::new();

        let slow = state.begin_ingest();
        let fast = state.begin_ingest();

        // The fast ingest completes and installs.
        let asset = svg_asset(&mut store, "fast.svg");
        assert!(state.is_current(fast));
        state.install(asset, &mut store);

        // The slow ingest's completion arrives afterwards and must be
        // discarded by the caller.
        assert!(!state.is_current(slow));
        assert_eq!(
            state.image_metadata().map(|m| m.name.as_str()),
            Some("fast.svg")
        );
    }
}
