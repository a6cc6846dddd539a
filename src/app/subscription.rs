// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The windowing layer reports one `FileHovered` per hovered file and a
//! single `FilesHoveredLeft` when the drag exits; these map onto the drag
//! tracker's enter/leave-all transitions, and `FileDropped` carries the path.

use super::Message;
use iced::{event, window, Subscription};

/// Routes native window events into drag-gesture and drop messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
