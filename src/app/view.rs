// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Either an empty-state prompt or the installed preview with its metadata
//! line, plus a dismissible status line for pipeline errors. While a drag
//! hovers the window, a dimmed overlay with the configured drop prompt is
//! stacked over everything.

use super::{App, Message, Preview};
use crate::media::AssetMetadata;
use iced::widget::{button, center, container, stack, text, Column, Row};
use iced::{Border, Color, Element, Length};

const PREVIEW_HEIGHT: f32 = 320.0;

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let body: Element<'_, Message> = match (&app.preview, app.upload.image_metadata()) {
        (Some(preview), Some(metadata)) => preview_view(preview, metadata),
        _ => empty_state(),
    };

    let mut column = Column::new().spacing(16).push(body);
    if let Some(error) = &app.last_error {
        column = column.push(status_line(error));
    }

    let base: Element<'_, Message> = center(column).padding(24).into();

    if app.dropzone.is_dragging() {
        stack(vec![base, drop_overlay(&app.drop_text)]).into()
    } else {
        base
    }
}

fn preview_view<'a>(preview: &'a Preview, metadata: &'a AssetMetadata) -> Element<'a, Message> {
    let display: Element<'a, Message> = match preview {
        Preview::Vector(handle) => iced::widget::svg(handle.clone())
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into(),
        Preview::Raster(handle) => iced::widget::image(handle.clone())
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into(),
    };

    let caption = text(format!(
        "{} — {} × {}",
        metadata.name, metadata.width, metadata.height
    ))
    .size(14);

    let controls = Row::new()
        .spacing(12)
        .push(button(text("Clear")).on_press(Message::ClearUpload))
        .push(button(text("Open another file")).on_press(Message::OpenFileDialog));

    Column::new()
        .spacing(16)
        .align_x(iced::Alignment::Center)
        .push(display)
        .push(caption)
        .push(controls)
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(16)
        .align_x(iced::Alignment::Center)
        .push(text("Drag an image here").size(20))
        .push(button(text("Open file")).on_press(Message::OpenFileDialog))
        .into()
}

fn status_line(error: &crate::error::Error) -> Element<'_, Message> {
    Row::new()
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .push(
            text(error.to_string())
                .size(14)
                .color(Color::from_rgb(0.9, 0.3, 0.3)),
        )
        .push(button(text("Dismiss").size(12)).on_press(Message::DismissError))
        .into()
}

fn drop_overlay(drop_text: &str) -> Element<'_, Message> {
    center(text(drop_text).size(28))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.8).into()),
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.3),
                width: 2.0,
                radius: 12.0.into(),
            },
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        })
        .padding(24)
        .into()
}
