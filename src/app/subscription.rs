// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{window, Subscription};

/// Subscribes to the window frame clock while a cell is animating.
///
/// Frames stop as soon as every cell has settled, so an idle gallery
/// does not redraw.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
