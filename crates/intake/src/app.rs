use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;

use crate::{
    action::Action,
    components::{footer::Footer, form_panel::FormPanel, payload_panel::PayloadPanel, Component},
    config::Config,
    contact::contact_schema,
    state::State,
    tui::{Event, EventResponse, Frame, Tui},
};

/// Width of the centered content column.
const COLUMN_WIDTH: u16 = 64;

pub struct App {
    #[allow(dead_code)]
    pub config: Config,
    pub components: Vec<Box<dyn Component>>,
    pub state: State,
    pub should_quit: bool,
    pub should_suspend: bool,
    tick_rate: f64,
    frame_rate: f64,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        let state = State::default();

        Ok(Self {
            config,
            components: vec![
                Box::new(FormPanel::new(contact_schema())),
                Box::new(PayloadPanel::new()),
                Box::new(Footer::new()),
            ],
            state,
            should_quit: false,
            should_suspend: false,
            tick_rate,
            frame_rate,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.init(&self.state)?;
        }

        loop {
            if let Some(e) = tui.next().await {
                let mut stop_event_propagation = false;
                for component in self.components.iter_mut() {
                    if stop_event_propagation {
                        break;
                    }
                    match component.handle_events(e.clone(), &mut self.state)? {
                        Some(EventResponse::Continue(action)) => {
                            action_tx.send(action)?;
                        }
                        Some(EventResponse::Stop(action)) => {
                            action_tx.send(action)?;
                            stop_event_propagation = true;
                        }
                        None => {}
                    }
                }

                if !stop_event_propagation {
                    match e {
                        Event::Quit => action_tx.send(Action::Quit)?,
                        Event::Tick => action_tx.send(Action::Tick)?,
                        Event::Render => action_tx.send(Action::Render)?,
                        Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                        Event::Key(key) => match key.code {
                            KeyCode::Esc => action_tx.send(Action::Quit)?,
                            KeyCode::Char('z')
                                if key.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                action_tx.send(Action::Suspend)?
                            }
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    tracing::debug!("{action:?}");
                }
                match action {
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Error(ref msg) => tracing::error!("{msg}"),
                    // draw() autoresizes the fullscreen viewport
                    Action::Resize(_, _) => {
                        tui.draw(|f| {
                            self.render_into(f, &action_tx);
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            self.render_into(f, &action_tx);
                        })?;
                    }
                    _ => {}
                }

                for component in self.components.iter_mut() {
                    if let Some(next) = component.update(action.clone(), &mut self.state)? {
                        action_tx.send(next)?;
                    }
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::Render)?;
                tui.resume()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn render_into(&mut self, frame: &mut Frame<'_>, action_tx: &mpsc::UnboundedSender<Action>) {
        self.render(frame).unwrap_or_else(|err| {
            action_tx
                .send(Action::Error(format!("Failed to draw: {err:?}")))
                .unwrap();
        });
    }

    /// Center a fixed-width column and stack the components according to
    /// their height constraints.
    fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(COLUMN_WIDTH.min(frame.area().width)),
            Constraint::Fill(1),
        ])
        .areas(frame.area());

        let constraints: Vec<Constraint> = self
            .components
            .iter()
            .map(|c| c.height_constraint())
            .collect();
        let areas = Layout::vertical(constraints).split(column);

        for (component, area) in self.components.iter_mut().zip(areas.iter()) {
            component.draw(frame, *area, &self.state)?;
        }
        Ok(())
    }
}
