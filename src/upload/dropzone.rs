// SPDX-License-Identifier: MPL-2.0
//! Drag gesture tracking over the drop surface.
//!
//! The visible "dragging" indicator must not flicker when nested elements of
//! the surface fire their own enter/leave pairs, so the tracker counts hover
//! depth instead of toggling a boolean. Depth is saturating and reaching zero
//! always turns the indicator off.

use crate::error::{Error, Result};
use crate::upload::allowlist::AllowList;
use crate::upload::ingest::CandidateFile;
use std::path::PathBuf;

/// Pure drag state: nesting depth of enter events and the derived indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    hover_depth: u32,
    is_dragging: bool,
}

impl DragState {
    /// A drag entered the surface or one of its children. The indicator only
    /// lights up when the payload advertises at least one item.
    pub fn enter(&mut self, item_count: usize) {
        self.hover_depth += 1;
        if item_count > 0 {
            self.is_dragging = true;
        }
    }

    /// A drag left the surface or one of its children.
    pub fn leave(&mut self) {
        self.hover_depth = self.hover_depth.saturating_sub(1);
        if self.hover_depth == 0 {
            self.is_dragging = false;
        }
    }

    /// Returns to the idle resting state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn hover_depth(&self) -> u32 {
        self.hover_depth
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}

/// Drop surface: tracks the drag gesture and validates dropped files against
/// the allow-list before they reach the ingestor.
#[derive(Debug, Clone)]
pub struct Dropzone {
    state: DragState,
    allowlist: AllowList,
}

impl Dropzone {
    #[must_use]
    pub fn new(allowlist: AllowList) -> Self {
        Self {
            state: DragState::default(),
            allowlist,
        }
    }

    pub fn enter(&mut self, item_count: usize) {
        self.state.enter(item_count);
    }

    pub fn leave(&mut self) {
        self.state.leave();
    }

    /// All hovered items left at once (the windowing layer reports this as a
    /// single event, not one leave per enter).
    pub fn leave_all(&mut self) {
        self.state.reset();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    #[must_use]
    pub fn allowlist(&self) -> &AllowList {
        &self.allowlist
    }

    /// Handles a drop: the gesture always ends (back to idle regardless of
    /// the outcome), the first file is taken and validated, and only an
    /// accepted candidate is returned for ingestion.
    pub fn handle_drop(&mut self, files: Vec<PathBuf>) -> Result<CandidateFile> {
        self.state.reset();

        let path = files.into_iter().next().ok_or(Error::NoFileSelected)?;
        self.validate(CandidateFile::from_path(path))
    }

    /// Validates an already-built candidate (shared with the file picker,
    /// which funnels into the same ingest path).
    pub fn validate(&self, candidate: CandidateFile) -> Result<CandidateFile> {
        if self.allowlist.accepts(&candidate.mime, &candidate.name) {
            Ok(candidate)
        } else {
            Err(Error::UnsupportedFileType {
                file_name: candidate.name,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> Dropzone {
        Dropzone::new(AllowList::new(vec!["image/svg+xml".into(), ".svg".into()]))
    }

    #[test]
    fn indicator_follows_hover_depth() {
        let mut state = DragState::default();
        assert!(!state.is_dragging());

        state.enter(1);
        assert!(state.is_dragging());
        assert_eq!(state.hover_depth(), 1);

        state.leave();
        assert!(!state.is_dragging());
        assert_eq!(state.hover_depth(), 0);
    }

    #[test]
    fn nested_enter_leave_does_not_flicker_the_indicator() {
        let mut state = DragState::default();
        state.enter(1);
        state.enter(1); // child element
        state.leave(); // child element
        assert!(state.is_dragging(), "leaving a child must keep the indicator on");
        state.leave();
        assert!(!state.is_dragging());
    }

    #[test]
    fn depth_never_goes_negative() {
        let mut state = DragState::default();
        state.leave();
        state.leave();
        assert_eq!(state.hover_depth(), 0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn empty_payload_does_not_light_the_indicator() {
        let mut state = DragState::default();
        state.enter(0);
        assert_eq!(state.hover_depth(), 1);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drop_resets_the_gesture_regardless_of_outcome() {
        let mut zone = zone();
        zone.enter(1);
        assert!(zone.is_dragging());

        let rejected = zone.handle_drop(vec![PathBuf::from("photo.png")]);
        assert!(rejected.is_err());
        assert!(!zone.is_dragging());

        zone.enter(1);
        let accepted = zone.handle_drop(vec![PathBuf::from("logo.svg")]);
        assert!(accepted.is_ok());
        assert!(!zone.is_dragging());
    }

    #[test]
    fn drop_without_files_is_no_file_selected() {
        let mut zone = zone();
        match zone.handle_drop(Vec::new()) {
            Err(Error::NoFileSelected) => {}
            other => panic!("expected NoFileSelected, got {other:?}"),
        }
    }

    #[test]
    fn drop_of_non_matching_type_is_rejected_with_the_file_name() {
        let mut zone = zone();
        match zone.handle_drop(vec![PathBuf::from("shot.png")]) {
            Err(Error::UnsupportedFileType { file_name }) => assert_eq!(file_name, "shot.png"),
            other => panic!("expected UnsupportedFileType, got {other:?}"),
        }
    }

    #[test]
    fn only_the_first_dropped_file_is_taken() {
        let mut zone = zone();
        let candidate = zone
            .handle_drop(vec![PathBuf::from("a.svg"), PathBuf::from("b.svg")])
            .expect("first file should be accepted");
        assert_eq!(candidate.name, "a.svg");
    }

    #[test]
    fn leave_all_clears_any_depth() {
        let mut zone = zone();
        zone.enter(1);
        zone.enter(1);
        zone.enter(1);
        zone.leave_all();
        assert!(!zone.is_dragging());
    }
}
