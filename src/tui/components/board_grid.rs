//! # BoardGrid Component
//!
//! Draws the 4×4 board as a box-drawn grid with colored tiles.
//!
//! ```text
//! ┌──────┬──────┬──────┬──────┐
//! │      │      │      │      │
//! │  2   │      │  4   │      │
//! │      │      │      │      │
//! ├──────┼──────┼──────┼──────┤
//! ...
//! └──────┴──────┴──────┴──────┘
//! ```
//!
//! ## Sizing
//!
//! Cell size is derived from the viewport, not fixed: the whole grid may
//! take up `board_scale` of the terminal in each dimension. Cells never
//! shrink below 3 columns × 1 row, and never get narrower than the widest
//! tile's digits so large tiles don't break the borders.
//!
//! ## Colors
//!
//! Tiles 2 through 2048 each have their own background. Anything past 2048
//! reuses the 2048 color; from 2048 up the digits switch to white so they
//! stay readable on the dark red.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::board::{Board, SIZE};
use crate::tui::component::Component;

pub const MIN_CELL_WIDTH: u16 = 3;
pub const MIN_CELL_HEIGHT: u16 = 1;

/// Interior size of a single cell, borders excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub width: u16,
    pub height: u16,
}

impl CellGeometry {
    /// Fits cells so the board fills at most `scale` of the viewport.
    pub fn fit(viewport: (u16, u16), scale: f32, max_tile: u32) -> Self {
        let (term_width, term_height) = viewport;
        let max_board_width = (term_width as f32 * scale) as u16;
        let max_board_height = (term_height as f32 * scale) as u16;
        let borders = SIZE as u16 + 1;

        let width = (max_board_width.saturating_sub(borders) / SIZE as u16)
            .max(MIN_CELL_WIDTH)
            .max(digits(max_tile));
        let height = (max_board_height.saturating_sub(borders) / SIZE as u16).max(MIN_CELL_HEIGHT);

        Self { width, height }
    }

    /// Total grid width including borders.
    pub fn board_width(&self) -> u16 {
        self.width * SIZE as u16 + SIZE as u16 + 1
    }

    /// Total grid height including borders.
    pub fn board_height(&self) -> u16 {
        self.height * SIZE as u16 + SIZE as u16 + 1
    }
}

fn digits(value: u32) -> u16 {
    value.to_string().len() as u16
}

/// Background color for a tile value.
pub fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::Rgb(0xFF, 0xEB, 0xCD),
        4 => Color::Rgb(0xFF, 0xE4, 0xB5),
        8 => Color::Rgb(0xFF, 0xDA, 0xB9),
        16 => Color::Rgb(0xFF, 0xA0, 0x7A),
        32 => Color::Rgb(0xFF, 0x8C, 0x00),
        64 => Color::Rgb(0xFF, 0x7F, 0x50),
        128 => Color::Rgb(0xFF, 0x63, 0x47),
        256 => Color::Rgb(0xFF, 0x45, 0x00),
        512 => Color::Rgb(0xFF, 0x30, 0x30),
        1024 => Color::Rgb(0xFF, 0x00, 0x00),
        _ => Color::Rgb(0x8B, 0x00, 0x00),
    }
}

pub fn tile_style(value: u32) -> Style {
    let fg = if value >= 2048 {
        Color::White
    } else {
        Color::Black
    };
    Style::default()
        .fg(fg)
        .bg(tile_color(value))
        .add_modifier(Modifier::BOLD)
}

pub struct BoardGrid<'a> {
    pub board: &'a Board,
    pub geometry: CellGeometry,
}

impl<'a> BoardGrid<'a> {
    pub fn new(board: &'a Board, geometry: CellGeometry) -> Self {
        Self { board, geometry }
    }

    /// Builds every line of the grid, top border to bottom border.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let CellGeometry { width, height } = self.geometry;
        let w = width as usize;
        let mut lines = Vec::with_capacity(self.geometry.board_height() as usize);

        lines.push(border_line('┌', '┬', '┐', w));
        for (r, row) in self.board.rows().iter().enumerate() {
            for sub_row in 0..height {
                let mut spans = Vec::with_capacity(SIZE * 2 + 1);
                for &value in row {
                    spans.push(Span::raw("│"));
                    spans.push(cell_span(value, w, sub_row == height / 2));
                }
                spans.push(Span::raw("│"));
                lines.push(Line::from(spans));
            }
            if r + 1 < SIZE {
                lines.push(border_line('├', '┼', '┤', w));
            }
        }
        lines.push(border_line('└', '┴', '┘', w));
        lines
    }
}

fn border_line(left: char, join: char, right: char, width: usize) -> Line<'static> {
    let segment = "─".repeat(width);
    let mut text = String::new();
    text.push(left);
    for i in 0..SIZE {
        if i > 0 {
            text.push(join);
        }
        text.push_str(&segment);
    }
    text.push(right);
    Line::raw(text)
}

fn cell_span(value: u32, width: usize, label_row: bool) -> Span<'static> {
    if value == 0 {
        return Span::raw(" ".repeat(width));
    }
    let text = if label_row {
        format!("{:^width$}", value)
    } else {
        " ".repeat(width)
    };
    Span::styled(text, tile_style(value))
}

impl Component for BoardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
