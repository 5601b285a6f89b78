//! # StatusBar Component
//!
//! Score line plus a one-line hint underneath. The hint switches to the
//! restart prompt once the game is over.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const CONTROLS_HINT: &str = "Use arrow keys to move. Press 'q' to quit.";
pub const GAME_OVER_HINT: &str = "Game Over! Press 'r' to restart or 'q' to quit.";

pub struct StatusBar {
    pub score: u32,
    pub game_over: bool,
}

impl StatusBar {
    pub fn new(score: u32, game_over: bool) -> Self {
        Self { score, game_over }
    }

    /// Height needed to show everything.
    pub const fn height() -> u16 {
        2
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hint = if self.game_over {
            Line::styled(
                GAME_OVER_HINT,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(CONTROLS_HINT, Style::default().fg(Color::DarkGray))
        };
        let lines = vec![Line::raw(format!("Score: {}", self.score)), hint];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
