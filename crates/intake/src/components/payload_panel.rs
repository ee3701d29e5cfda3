use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{components::Component, state::State, tui::Frame};

/// Read-only panel echoing the last validated submission as pretty-printed
/// JSON. Before the first submission it shows the empty payload.
pub struct PayloadPanel;

impl PayloadPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for PayloadPanel {
    fn height_constraint(&self) -> Constraint {
        // 5 JSON lines + borders, grows with the available space
        Constraint::Min(7)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        if area.width < 5 || area.height < 3 {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&state.payload)?;
        let block = Block::default()
            .title(" Payload ")
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(Color::DarkGray));
        let body = Paragraph::new(json)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(body, area);
        Ok(())
    }
}
