//! # TitleBar Component
//!
//! The game title, centered above the board.
//!
//! ## Conditional Formatting
//!
//! 1. **Seeded game**: `"2048 Game · seed 42"`, so a replayable run can be
//!    identified from a screenshot
//! 2. **Default**: `"2048 Game"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "2048 Game";

/// Top title line.
///
/// # Props
///
/// - `seed`: The fixed RNG seed, if the game was started with one
pub struct TitleBar {
    pub seed: Option<u64>,
}

impl TitleBar {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(seed) = self.seed {
            spans.push(Span::styled(
                format!(" · seed {}", seed),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}
