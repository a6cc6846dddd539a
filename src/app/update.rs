// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Drag events feed the gesture tracker; drops and picked files run through
//! the validator and into asynchronous ingest tasks. Every completion carries
//! its ingest generation and is discarded when a newer ingest has superseded
//! it, so the newest upload always determines the final state.

use super::{App, Message, Preview};
use crate::content::{ContentRef, ContentStore};
use crate::error::Error;
use crate::media::{self, parse_raster, parse_svg, ParsedAsset};
use crate::upload::{self, CandidateFile, IngestPayload, ReadMode};
use iced::widget::{image, svg};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::DragEntered => {
            app.dropzone.enter(1);
            Task::none()
        }
        Message::DragLeft => {
            app.dropzone.leave_all();
            Task::none()
        }
        Message::FileDropped(path) => match app.dropzone.handle_drop(vec![path]) {
            Ok(candidate) => start_ingest(app, candidate),
            Err(err) => {
                app.last_error = Some(err);
                Task::none()
            }
        },
        Message::OpenFileDialog => open_file_dialog(app.dropzone.allowlist().dialog_extensions()),
        Message::OpenFileDialogResult(None) => Task::none(),
        Message::OpenFileDialogResult(Some(path)) => {
            match app.dropzone.validate(CandidateFile::from_path(path)) {
                Ok(candidate) => start_ingest(app, candidate),
                Err(err) => {
                    app.last_error = Some(err);
                    Task::none()
                }
            }
        }
        Message::FileRead { generation, result } => handle_file_read(app, generation, result),
        Message::RasterDecoded { generation, result } => {
            handle_raster_decoded(app, generation, result)
        }
        Message::ClearUpload => {
            app.upload.cancel(&mut app.store);
            app.preview = None;
            Task::none()
        }
        Message::DismissError => {
            app.last_error = None;
            Task::none()
        }
    }
}

/// Kicks off an ingest for an accepted candidate: takes a fresh generation
/// and reads the file asynchronously.
pub(super) fn start_ingest(app: &mut App, file: CandidateFile) -> Task<Message> {
    app.last_error = None;
    let generation = app.upload.begin_ingest();
    Task::perform(upload::read_file(file), move |result| Message::FileRead {
        generation,
        result,
    })
}

fn handle_file_read(
    app: &mut App,
    generation: u64,
    result: Result<IngestPayload, Error>,
) -> Task<Message> {
    if !app.upload.is_current(generation) {
        return Task::none();
    }

    let payload = match result {
        Ok(payload) => payload,
        Err(err) => {
            app.last_error = Some(err);
            return Task::none();
        }
    };

    app.upload.set_raw_content(payload.raw_content.clone());

    match payload.mode {
        ReadMode::SvgText => {
            let asset = parse_svg(&payload.raw_content, &payload.name, &mut app.store);
            install(app, asset);
            Task::none()
        }
        ReadMode::DataUri => {
            let timeout = app.decode_timeout;
            Task::perform(
                parse_raster(payload.raw_content, payload.name, timeout),
                move |result| Message::RasterDecoded { generation, result },
            )
        }
    }
}

fn handle_raster_decoded(
    app: &mut App,
    generation: u64,
    result: Result<ParsedAsset, Error>,
) -> Task<Message> {
    if !app.upload.is_current(generation) {
        return Task::none();
    }

    match result {
        Ok(asset) => install(app, asset),
        Err(err) => app.last_error = Some(err),
    }
    Task::none()
}

/// Installs a parsed asset into the upload state and builds the display
/// handle once, before the state takes ownership of the reference.
fn install(app: &mut App, asset: ParsedAsset) {
    app.preview = build_preview(&asset, &app.store);
    app.upload.install(asset, &mut app.store);
}

fn build_preview(asset: &ParsedAsset, store: &ContentStore) -> Option<Preview> {
    match &asset.content {
        ContentRef::Blob(_) => store
            .resolve(&asset.content)
            .map(|bytes| Preview::Vector(svg::Handle::from_memory(bytes.to_vec()))),
        ContentRef::Data(uri) => media::raster::data_uri_bytes(uri)
            .map(|bytes| Preview::Raster(image::Handle::from_bytes(bytes))),
        ContentRef::Empty => None,
    }
}

fn open_file_dialog(extensions: Vec<String>) -> Task<Message> {
    Task::perform(
        async move {
            let filter: Vec<&str> = extensions.iter().map(String::as_str).collect();
            rfd::AsyncFileDialog::new()
                .add_filter("Images", &filter)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}
