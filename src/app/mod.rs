// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the ingestion pipeline.
//!
//! The `App` struct owns the single upload session: the drop surface, the
//! upload state, the content store backing blob references, and the display
//! handle for whatever is currently installed. The update loop translates
//! window events and dialog results into pipeline calls.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::ContentStore;
use crate::error::Error;
use crate::upload::{AllowList, CandidateFile, Dropzone, UploadState};
use iced::widget::{image, svg};
use iced::{Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Display handle built once at install time, so the view never re-decodes
/// a content reference per frame.
#[derive(Debug, Clone)]
pub enum Preview {
    Vector(svg::Handle),
    Raster(image::Handle),
}

/// Root Iced application state bridging the ingestion pipeline and the view.
pub struct App {
    pub(crate) dropzone: Dropzone,
    pub(crate) upload: UploadState,
    pub(crate) store: ContentStore,
    pub(crate) preview: Option<Preview>,
    pub(crate) drop_text: String,
    pub(crate) decode_timeout: Option<Duration>,
    pub(crate) last_error: Option<Error>,
}

impl App {
    /// Initializes application state from the settings file and optionally
    /// kicks off an ingest for a file passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings, using defaults: {err}");
            config::Config::default()
        });

        let mut app = App {
            dropzone: Dropzone::new(AllowList::new(config.accepted_file_types())),
            upload: UploadState::new(),
            store: ContentStore::new(),
            preview: None,
            drop_text: config.drop_text(),
            decode_timeout: config.decode_timeout(),
            last_error: None,
        };

        let task = match flags.file_path {
            Some(path) => {
                let candidate = CandidateFile::from_path(PathBuf::from(path));
                match app.dropzone.validate(candidate) {
                    Ok(candidate) => update::start_ingest(&mut app, candidate),
                    Err(err) => {
                        app.last_error = Some(err);
                        Task::none()
                    }
                }
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.upload.image_metadata() {
            Some(metadata) => format!("{} — Iced Dropzone", metadata.name),
            None => "Iced Dropzone".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
