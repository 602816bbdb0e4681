//! Screen geometry.
//!
//! Rendering and mouse hit-testing both go through these functions, so
//! a click lands on exactly the cells that were drawn.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position as Cell, Rect},
    text::Line,
    widgets::{Block, Borders, Padding},
};

use crate::constants::{dialog, layout};
use crate::evasion::Position;

/// Regions of the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub dialog: Rect,
    pub body: Rect,
    pub decline: Rect,
    pub accept: Rect,
}

/// Regions of the success panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessLayout {
    pub panel: Rect,
    pub title: Rect,
    pub body: Rect,
    pub retry: Rect,
}

/// Splits the screen into the arena and the commands bar.
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0), // Arena
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Size in cells of a bordered button showing `label`.
pub fn target_size(label: &str) -> (u16, u16) {
    let label_width = Line::from(label).width() as u16;
    (
        label_width + 2 * layout::TARGET_PADDING + 2,
        layout::TARGET_HEIGHT,
    )
}

/// Where the target is drawn for a given center position.
pub fn target_rect(arena: Rect, position: Position, size: (u16, u16)) -> Rect {
    let (x, width) = place_axis(arena.x, arena.width, position.x, size.0);
    let (y, height) = place_axis(arena.y, arena.height, position.y, size.1);
    Rect::new(x, y, width, height)
}

/// Centers a span of `size` cells at `percent` of the axis, kept inside it.
fn place_axis(start: u16, extent: u16, percent: f64, size: u16) -> (u16, u16) {
    let size = size.min(extent);
    let center = f64::from(start) + percent / 100.0 * f64::from(extent);
    let offset = (center - f64::from(size) / 2.0).round() as i64;
    let max = i64::from(start) + i64::from(extent - size);
    (offset.clamp(i64::from(start), max) as u16, size)
}

/// Centered rectangle taking a percentage of `area`, but never smaller
/// than the minimum size unless `area` itself is.
pub fn centered_rect(percent_x: u16, percent_y: u16, min: (u16, u16), area: Rect) -> Rect {
    let scale = |extent: u16, percent: u16| (u32::from(extent) * u32::from(percent) / 100) as u16;
    let width = scale(area.width, percent_x).max(min.0).min(area.width);
    let height = scale(area.height, percent_y).max(min.1).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn framed_inner(area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(2))
        .inner(area)
}

/// Confirmation dialog: message on top, decline and accept side by side.
pub fn dialog_layout(area: Rect) -> DialogLayout {
    let outer = centered_rect(
        dialog::CONFIRM_WIDTH,
        dialog::CONFIRM_HEIGHT,
        (34, 10),
        area,
    );
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(dialog::BUTTON_HEIGHT),
        ])
        .split(framed_inner(outer));
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(rows[1]);

    DialogLayout {
        dialog: outer,
        body: rows[0],
        decline: buttons[0],
        accept: buttons[1],
    }
}

/// Success panel: title, message and a centered retry button.
pub fn success_layout(area: Rect) -> SuccessLayout {
    let panel = centered_rect(
        dialog::SUCCESS_WIDTH,
        dialog::SUCCESS_HEIGHT,
        (40, 11),
        area,
    );
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Min(1), // Body
            Constraint::Length(dialog::BUTTON_HEIGHT),
        ])
        .split(framed_inner(panel));
    let button_row = rows[3];
    let retry_width = dialog::RETRY_WIDTH.min(button_row.width);
    let retry = Rect::new(
        button_row.x + (button_row.width - retry_width) / 2,
        button_row.y,
        retry_width,
        button_row.height,
    );

    SuccessLayout {
        panel,
        title: rows[0],
        body: rows[2],
        retry,
    }
}

/// Whether the cell at (`col`, `row`) falls inside `rect`.
pub fn hit(rect: Rect, col: u16, row: u16) -> bool {
    rect.contains(Cell::new(col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_screen() {
        let (arena, bar) = split_screen(Rect::new(0, 0, 80, 24));
        assert_eq!(arena, Rect::new(0, 0, 80, 22));
        assert_eq!(bar, Rect::new(0, 22, 80, 2));
    }

    #[test]
    fn test_target_size_counts_display_width() {
        // "Haz click aquí" is 14 columns; 2x2 padding, 2 borders
        assert_eq!(target_size("Haz click aquí"), (20, 3));
        assert_eq!(target_size("Click here"), (16, 3));
    }

    #[test]
    fn test_target_rect_is_centered_on_position() {
        let arena = Rect::new(0, 0, 80, 22);
        let rect = target_rect(arena, Position::CENTER, (20, 3));
        assert_eq!(rect, Rect::new(30, 10, 20, 3));
    }

    #[test]
    fn test_target_rect_stays_inside_arena() {
        let arena = Rect::new(0, 0, 80, 22);
        let rect = target_rect(arena, Position { x: 100.0, y: 0.0 }, (20, 3));
        assert_eq!(rect, Rect::new(60, 0, 20, 3));

        let tiny = Rect::new(0, 0, 10, 2);
        let rect = target_rect(tiny, Position::CENTER, (20, 3));
        assert_eq!(rect, Rect::new(0, 0, 10, 2));
    }

    #[test]
    fn test_dialog_buttons_sit_inside_dialog() {
        let area = Rect::new(0, 0, 80, 22);
        let layout = dialog_layout(area);
        assert!(layout.dialog.width >= 34);
        for rect in [layout.body, layout.decline, layout.accept] {
            assert_eq!(rect.intersection(layout.dialog), rect);
        }
        assert!(layout.decline.right() <= layout.accept.left());
        assert_eq!(layout.decline.height, dialog::BUTTON_HEIGHT);
    }

    #[test]
    fn test_success_retry_is_centered() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = success_layout(area);
        assert_eq!(layout.retry.width, dialog::RETRY_WIDTH);
        let left = layout.retry.left() - layout.panel.left();
        let right = layout.panel.right() - layout.retry.right();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(hit(rect, 10, 5));
        assert!(hit(rect, 13, 6));
        assert!(!hit(rect, 14, 6));
        assert!(!hit(rect, 9, 5));
    }
}
