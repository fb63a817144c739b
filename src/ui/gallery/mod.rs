// SPDX-License-Identifier: MPL-2.0
//! Two-column photo grid.
//!
//! The grid only lays cells out and forwards each message to the cell it
//! names; display state lives in the cells themselves. Cells fill rows left
//! to right, top to bottom, wrapping every [`GRID_COLUMNS`] cells.

pub mod cell;
pub mod transition;

pub use cell::Cell;

use crate::config::GRID_COLUMNS;
use crate::gallery::PhotoRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Container, Row, Scrollable, Text};
use iced::{Alignment, Element, Length};
use std::time::{Duration, Instant};

/// Messages routed through the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the cell at `index` (position in manifest order).
    Cell { index: usize, message: cell::Message },
    /// The window presented a frame at this instant.
    Frame(Instant),
}

/// Context required to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Gallery state: one cell per record plus the latest frame timestamp.
#[derive(Debug, Clone)]
pub struct State {
    cells: Vec<Cell>,
    now: Instant,
}

impl State {
    #[must_use]
    pub fn new(photos: Vec<PhotoRecord>, transition: Duration) -> Self {
        let cells = photos
            .into_iter()
            .map(|record| Cell::new(record, transition))
            .collect();

        Self {
            cells,
            now: Instant::now(),
        }
    }

    pub fn update(&mut self, message: Message) {
        self.update_at(message, Instant::now());
    }

    /// Applies `message` as if it arrived at `now`. Frame messages carry
    /// their own timestamp.
    pub fn update_at(&mut self, message: Message, now: Instant) {
        match message {
            Message::Cell { index, message } => {
                self.now = now;
                match self.cells.get_mut(index) {
                    Some(cell) => {
                        cell.handle(message, now);
                        tracing::debug!(
                            index,
                            enlarged = cell.is_enlarged(),
                            animating = cell.is_animating(now),
                            "cell toggled"
                        );
                    }
                    None => tracing::warn!(index, "message for unknown cell"),
                }
            }
            Message::Frame(at) => {
                self.now = at;
            }
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Timestamp the view renders at.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Whether any cell still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_animating(self.now))
    }

    /// Cells grouped into display rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if self.cells.is_empty() {
            return Container::new(
                Text::new(ctx.i18n.tr("gallery-empty"))
                    .size(typography::TITLE_MD)
                    .color(ctx.colors.text_secondary),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
        }

        let now = self.now;
        let mut grid = Column::new().spacing(spacing::XS);

        for (row_index, row) in self.rows().enumerate() {
            let mut cells = Row::new().spacing(spacing::XS).align_y(Alignment::Start);
            for (offset, cell) in row.iter().enumerate() {
                let index = row_index * GRID_COLUMNS + offset;
                cells = cells.push(
                    cell.view(now)
                        .map(move |message| Message::Cell { index, message }),
                );
            }
            grid = grid.push(cells);
        }

        let hint = Text::new(ctx.i18n.tr("gallery-hint"))
            .size(typography::BODY)
            .color(ctx.colors.text_secondary);

        let content = Column::new()
            .push(hint)
            .push(grid)
            .spacing(spacing::MD)
            .padding(spacing::LG);

        Scrollable::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Both {
                vertical: Scrollbar::default(),
                horizontal: Scrollbar::default(),
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PHOTO_SIZE_LARGE, PHOTO_SIZE_SMALL};

    const TRANSITION: Duration = Duration::from_millis(300);

    fn flowers(n: usize) -> Vec<PhotoRecord> {
        ["Rose", "Lily", "Daisy", "Marigold", "Lavender"]
            .iter()
            .cycle()
            .take(n)
            .map(|name| PhotoRecord::new(*name, format!("{}.jpg", name.to_lowercase())))
            .collect()
    }

    fn tap(index: usize) -> Message {
        Message::Cell {
            index,
            message: cell::Message::Pressed,
        }
    }

    #[test]
    fn empty_manifest_renders_no_cells() {
        let state = State::new(Vec::new(), TRANSITION);
        assert!(state.is_empty());
        assert_eq!(state.rows().count(), 0);
        assert!(!state.is_animating());
    }

    #[test]
    fn rows_wrap_every_two_cells_in_order() {
        let state = State::new(flowers(5), TRANSITION);
        let rows: Vec<Vec<&str>> = state
            .rows()
            .map(|row| row.iter().map(|c| c.record().title.as_str()).collect())
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["Rose", "Lily"],
                vec!["Daisy", "Marigold"],
                vec!["Lavender"],
            ]
        );
    }

    #[test]
    fn tapping_one_cell_leaves_neighbors_alone() {
        let mut state = State::new(flowers(2), TRANSITION);
        let now = Instant::now();

        state.update_at(tap(0), now);

        assert!(state.cells()[0].is_enlarged());
        assert!(!state.cells()[1].is_enlarged());
        assert_eq!(state.cells()[1].target_size(), PHOTO_SIZE_SMALL);

        state.update_at(tap(1), now);
        state.update_at(tap(1), now);
        assert!(state.cells()[0].is_enlarged());
        assert!(!state.cells()[1].is_enlarged());
    }

    #[test]
    fn frames_advance_until_animation_ends() {
        let mut state = State::new(flowers(1), TRANSITION);
        let start = Instant::now();

        state.update_at(tap(0), start);
        assert!(state.is_animating());

        state.update_at(Message::Frame(start + Duration::from_millis(150)), start);
        assert!(state.is_animating());

        let end = start + TRANSITION;
        state.update_at(Message::Frame(end), end);
        assert!(!state.is_animating());
        assert!((state.cells()[0].size_at(state.now()) - PHOTO_SIZE_LARGE).abs() < 0.01);
    }

    #[test]
    fn tap_requests_frames_only_with_a_transition() {
        let now = Instant::now();

        let mut animated = State::new(flowers(2), TRANSITION);
        animated.update_at(tap(1), now);
        assert!(animated.is_animating());

        let mut instant = State::new(flowers(2), Duration::ZERO);
        instant.update_at(tap(1), now);
        assert!(!instant.is_animating());
        assert_eq!(instant.cells()[1].size_at(now), PHOTO_SIZE_LARGE);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut state = State::new(flowers(1), TRANSITION);
        state.update_at(tap(7), Instant::now());
        assert!(!state.cells()[0].is_enlarged());
    }
}
