use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{components::Component, state::State, tui::Frame};

/// Compact bottom bar with the fixed key hints.
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    fn hints(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("Tab/↓ ↑", Style::default().fg(Color::White)),
            Span::raw(": Navigate   "),
            Span::styled("Enter", Style::default().fg(Color::White)),
            Span::raw(": Submit   "),
            Span::styled("Esc", Style::default().fg(Color::White)),
            Span::raw(": Quit"),
        ])
        .style(Style::default().fg(Color::DarkGray))
    }
}

impl Component for Footer {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(1)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        f.render_widget(Paragraph::new(self.hints()), area);
        Ok(())
    }
}
