// SPDX-License-Identifier: MPL-2.0
//! `iced_dropzone` is a small image intake tool built with the Iced GUI framework.
//!
//! Drop an SVG or raster image on the window (or pick one with the file
//! dialog) and the ingestion pipeline validates it against a configurable
//! allow-list, reads it, and parses it into a displayable content reference
//! plus intrinsic dimensions.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod media;
pub mod upload;
