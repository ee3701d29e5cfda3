use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use form::FormSchema;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{backend::crossterm::EventHandler, Input, InputRequest};

use crate::{
    action::Action,
    components::Component,
    contact::ContactPayload,
    state::State,
    tui::{EventResponse, Frame},
};

/// The form itself: one outlined editor per schema field, with inline error
/// or help text beneath each box.
///
/// Interaction model: the focused field is always editable (every printable
/// key goes straight into its buffer), Tab/Down and BackTab/Up move focus,
/// Enter submits the whole form. Fields with a mask have their buffer
/// rewritten after every edit, cursor pinned to the end.
pub struct FormPanel {
    schema: FormSchema,
    inputs: Vec<Input>,
    focused: usize,
}

impl FormPanel {
    pub fn new(schema: FormSchema) -> Self {
        let inputs = vec![Input::default(); schema.field_count()];
        Self {
            schema,
            inputs,
            focused: 0,
        }
    }

    fn focus_next(&mut self) {
        if self.schema.field_count() == 0 {
            return;
        }
        self.focused = (self.focused + 1) % self.schema.field_count();
    }

    fn focus_prev(&mut self) {
        if self.schema.field_count() == 0 {
            return;
        }
        if self.focused == 0 {
            self.focused = self.schema.field_count() - 1;
        } else {
            self.focused -= 1;
        }
    }

    /// Route a keystroke into the focused field's editor, re-apply the
    /// field's mask, and mirror the buffer into the shared form state.
    fn edit_focused(&mut self, key: KeyEvent, state: &mut State) {
        let Some(field) = self.schema.fields.get(self.focused) else {
            return;
        };
        let input = &mut self.inputs[self.focused];
        input.handle_event(&crossterm::event::Event::Key(key));

        let masked = field.apply_mask(input.value());
        if masked != input.value() {
            *input = Input::new(masked);
        }

        state.form.set_value(&field.key, input.value());
        state.form.clear_error(&field.key);
    }

    /// Insert pasted text into the focused field at the cursor, then
    /// re-apply the field's mask. Control characters (newlines in
    /// multi-line pastes) are dropped; these are single-line editors.
    fn paste_into_focused(&mut self, text: &str, state: &mut State) {
        let Some(field) = self.schema.fields.get(self.focused) else {
            return;
        };
        let input = &mut self.inputs[self.focused];
        for ch in text.chars().filter(|c| !c.is_control()) {
            input.handle(InputRequest::InsertChar(ch));
        }

        let masked = field.apply_mask(input.value());
        if masked != input.value() {
            *input = Input::new(masked);
        }

        state.form.set_value(&field.key, input.value());
        state.form.clear_error(&field.key);
    }
}

impl Component for FormPanel {
    fn init(&mut self, state: &State) -> Result<()> {
        for (field, input) in self.schema.fields.iter().zip(self.inputs.iter_mut()) {
            if let Some(value) = state.form.get_value(&field.key) {
                *input = Input::new(value.to_string());
            }
        }
        Ok(())
    }

    fn height_constraint(&self) -> Constraint {
        // outer frame + 4 rows per field (3 for the box, 1 for error/help)
        Constraint::Length(2 + self.schema.field_count() as u16 * 4)
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
            KeyCode::Enter => Ok(Some(EventResponse::Stop(Action::Submit))),
            // Esc and Ctrl-z fall through so the app can quit or suspend
            KeyCode::Esc => Ok(None),
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => Ok(None),
            _ => {
                self.edit_focused(key, state);
                Ok(Some(EventResponse::Stop(Action::Update)))
            }
        }
    }

    fn handle_paste_events(
        &mut self,
        text: String,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        self.paste_into_focused(&text, state);
        Ok(Some(EventResponse::Stop(Action::Update)))
    }

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        match action {
            Action::Submit => {
                if state.form.validate(&self.schema) {
                    state.payload = ContactPayload::from_form(&state.form);
                    tracing::info!("form submitted");
                } else {
                    tracing::debug!(errors = state.form.errors.len(), "submission rejected");
                }
                Ok(Some(Action::Update))
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }

        let frame_block = Block::default()
            .title(format!(" {} ", self.schema.title))
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED);
        let inner = frame_block.inner(area);
        f.render_widget(frame_block, area);

        let rows = Layout::vertical(vec![Constraint::Length(4); self.schema.field_count()])
            .split(inner);

        for (idx, field) in self.schema.fields.iter().enumerate() {
            let row = rows[idx];
            let box_area = Rect { height: row.height.min(3), ..row };
            let focused = idx == self.focused;
            let error = state.form.errors.get(&field.key);

            let border_style = if error.is_some() {
                Style::default().fg(Color::Red)
            } else if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label_style = if focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let input_block = Block::default()
                .title(Span::styled(format!(" {} ", field.label), label_style))
                .borders(Borders::ALL)
                .border_style(border_style);
            let value_area = input_block.inner(box_area);
            f.render_widget(input_block, box_area);

            let input = &self.inputs[idx];
            let scroll = input.visual_scroll(value_area.width.max(1) as usize);
            let value = Paragraph::new(input.value()).scroll((0, scroll as u16));
            f.render_widget(value, value_area);

            if focused {
                f.set_cursor_position((
                    value_area.x + (input.visual_cursor().max(scroll) - scroll) as u16,
                    value_area.y,
                ));
            }

            // message row: error wins over help text
            let message_area = Rect {
                y: row.y.saturating_add(3),
                height: row.height.saturating_sub(3),
                ..row
            };
            if let Some(err) = error {
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        err.as_str(),
                        Style::default().fg(Color::Red),
                    ))),
                    message_area,
                );
            } else if let Some(help) = &field.help {
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        help.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ))),
                    message_area,
                );
            }
        }

        Ok(())
    }
}
