// SPDX-License-Identifier: MPL-2.0
//! File-type validation against a configurable allow-list.

use crate::media::mime;

/// Ordered acceptance patterns: each entry is either an exact MIME type or a
/// file-name suffix. Wildcards are stripped before suffix comparison, so
/// `*.svg` and `.svg` are equivalent. Matching is case-insensitive on names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<String>,
}

impl AllowList {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Accepts a candidate iff its declared MIME type equals an entry exactly
    /// or its lowercased name ends with an entry's wildcard-stripped suffix.
    #[must_use]
    pub fn accepts(&self, mime_type: &str, file_name: &str) -> bool {
        if self.entries.iter().any(|entry| entry == mime_type) {
            return true;
        }

        let name = file_name.to_lowercase();
        self.entries.iter().any(|entry| {
            let suffix = entry.replace('*', "").to_lowercase();
            !suffix.is_empty() && name.ends_with(&suffix)
        })
    }

    /// Extensions (without dots) for the file dialog filter, derived from
    /// both suffix entries and known MIME entries.
    #[must_use]
    pub fn dialog_extensions(&self) -> Vec<String> {
        let mut extensions = Vec::new();
        for entry in &self.entries {
            let ext = if entry.contains('/') {
                mime::extension_for(entry).map(str::to_string)
            } else {
                let suffix = entry.replace('*', "");
                suffix
                    .strip_prefix('.')
                    .map(str::to_lowercase)
                    .filter(|s| !s.is_empty())
            };
            if let Some(ext) = ext {
                if !extensions.contains(&ext) {
                    extensions.push(ext);
                }
            }
        }
        extensions
    }
}
