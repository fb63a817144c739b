// SPDX-License-Identifier: MPL-2.0
//! A single gallery photo that toggles between two sizes when clicked.

use super::transition::SizeTransition;
use crate::config::{PHOTO_SIZE_LARGE, PHOTO_SIZE_SMALL};
use crate::gallery::{AssetHandle, PhotoAsset, PhotoRecord};
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, image, mouse_area, svg, text, tooltip};
use iced::{mouse, Background, ContentFit, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Messages for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The photo was clicked or tapped.
    Pressed,
}

/// One rendered record together with its display state.
#[derive(Debug, Clone)]
pub struct Cell {
    record: PhotoRecord,
    asset: PhotoAsset,
    handle: AssetHandle,
    enlarged: bool,
    size: SizeTransition,
}

impl Cell {
    /// Resolves the record's asset once and starts in the small state.
    #[must_use]
    pub fn new(record: PhotoRecord, transition: Duration) -> Self {
        let asset = PhotoAsset::resolve(&record.file_name);
        if asset.is_placeholder() {
            tracing::debug!(file = %record.file_name, "no bundled photo, showing placeholder");
        }

        Self {
            handle: asset.load(),
            asset,
            record,
            enlarged: false,
            size: SizeTransition::new(PHOTO_SIZE_SMALL, transition),
        }
    }

    /// Handle a cell message. Only this cell's state changes.
    pub fn handle(&mut self, msg: Message, now: Instant) {
        match msg {
            Message::Pressed => self.set_enlarged(!self.enlarged, now),
        }
    }

    fn set_enlarged(&mut self, enlarged: bool, now: Instant) {
        self.enlarged = enlarged;
        self.size.retarget(self.target_size(), now);
    }

    #[must_use]
    pub fn record(&self) -> &PhotoRecord {
        &self.record
    }

    #[must_use]
    pub fn asset(&self) -> PhotoAsset {
        self.asset
    }

    #[must_use]
    pub fn is_enlarged(&self) -> bool {
        self.enlarged
    }

    /// Size the cell is resting at or heading toward.
    #[must_use]
    pub fn target_size(&self) -> f32 {
        if self.enlarged {
            PHOTO_SIZE_LARGE
        } else {
            PHOTO_SIZE_SMALL
        }
    }

    /// Side length shown at `now`.
    #[must_use]
    pub fn size_at(&self, now: Instant) -> f32 {
        self.size.value_at(now)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.size.is_animating(now)
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let side = Length::Fixed(self.size_at(now));

        let picture: Element<'_, Message> = match &self.handle {
            AssetHandle::Raster(handle) => image(handle.clone())
                .width(side)
                .height(side)
                .content_fit(ContentFit::Cover)
                .into(),
            AssetHandle::Vector(handle) => svg(handle.clone())
                .width(side)
                .height(side)
                .content_fit(ContentFit::Contain)
                .into(),
        };

        let clickable = mouse_area(picture)
            .on_press(Message::Pressed)
            .interaction(mouse::Interaction::Pointer);

        let caption = container(text(self.record.title.as_str()).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(Background::Color(palette.background.strong.color)),
                    text_color: Some(palette.background.strong.text),
                    border: iced::Border {
                        radius: radius::SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            });

        tooltip(clickable, caption, tooltip::Position::Bottom).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSITION: Duration = Duration::from_millis(300);

    fn rose() -> Cell {
        Cell::new(PhotoRecord::new("Rose", "rose.jpg"), TRANSITION)
    }

    #[test]
    fn starts_small_and_resolved() {
        let cell = rose();
        assert!(!cell.is_enlarged());
        assert_eq!(cell.asset(), PhotoAsset::Rose);
        assert_eq!(cell.size_at(Instant::now()), PHOTO_SIZE_SMALL);
    }

    #[test]
    fn tap_targets_large_then_small() {
        let mut cell = rose();
        let now = Instant::now();

        cell.handle(Message::Pressed, now);
        assert_eq!(cell.target_size(), PHOTO_SIZE_LARGE);
        assert!(cell.is_animating(now));

        cell.handle(Message::Pressed, now + Duration::from_millis(10));
        assert_eq!(cell.target_size(), PHOTO_SIZE_SMALL);
    }

    #[test]
    fn tap_parity_decides_target() {
        let start = Instant::now();
        for taps in 0..9u64 {
            let mut cell = rose();
            for i in 0..taps {
                cell.handle(Message::Pressed, start + Duration::from_millis(i * 7));
            }
            let expected = if taps % 2 == 0 {
                PHOTO_SIZE_SMALL
            } else {
                PHOTO_SIZE_LARGE
            };
            assert_eq!(cell.target_size(), expected, "after {taps} taps");
            assert_eq!(cell.is_enlarged(), taps % 2 == 1);
        }
    }

    #[test]
    fn size_settles_on_target_after_transition() {
        let mut cell = rose();
        let now = Instant::now();
        cell.handle(Message::Pressed, now);

        let done = now + TRANSITION;
        assert!(!cell.is_animating(done));
        assert!((cell.size_at(done) - PHOTO_SIZE_LARGE).abs() < 0.01);
    }

    #[test]
    fn rapid_taps_reverse_from_current_size() {
        let mut cell = rose();
        let now = Instant::now();
        cell.handle(Message::Pressed, now);

        let midway = now + Duration::from_millis(100);
        let shown = cell.size_at(midway);
        cell.handle(Message::Pressed, midway);

        assert!((cell.size_at(midway) - shown).abs() < 0.01);
        assert!(cell.size_at(midway) > PHOTO_SIZE_SMALL);
        assert!(cell.is_animating(midway + Duration::from_millis(1)));
    }

    #[test]
    fn instant_transition_reports_no_animation() {
        let mut cell = Cell::new(PhotoRecord::new("Rose", "rose.jpg"), Duration::ZERO);
        let now = Instant::now();
        cell.handle(Message::Pressed, now);
        assert!(!cell.is_animating(now));
        assert_eq!(cell.size_at(now), PHOTO_SIZE_LARGE);
    }

    #[test]
    fn unknown_file_uses_placeholder() {
        let cell = Cell::new(PhotoRecord::new("Tulip", "tulip.jpg"), TRANSITION);
        assert_eq!(cell.asset(), PhotoAsset::Placeholder);
        assert_eq!(cell.size_at(Instant::now()), PHOTO_SIZE_SMALL);
    }
}
