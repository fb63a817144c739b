// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::theming::ColorScheme;
use iced::{widget::Container, Background, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub colors: &'a ColorScheme,
}

/// Renders the single gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface = ctx.colors.surface_primary;

    let content = ctx
        .gallery
        .view(GalleryViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        })
        .map(Message::Gallery);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(surface)),
            ..Default::default()
        })
        .into()
}
