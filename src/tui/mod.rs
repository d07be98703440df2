//! Single-screen terminal UI: a three-field product form, a rendered
//! analysis pane, and a modal error alert.

pub mod app;
mod form;
mod input;
mod markdown;
mod render;
pub mod terminal;
mod theme;

pub use app::{AppState, UiEvent};
pub use form::FormState;
pub use markdown::render_markdown;
pub use terminal::{init_tracing, restore_terminal, setup_terminal};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::application::AnalyzeProductUseCase;

use input::{handle_key_event, InputOutcome};
use render::draw_ui;

/// Drive the screen until the user quits.
///
/// Each validated submit spawns exactly one analysis task; its outcome
/// comes back over the channel and is drained into [`AppState`] on the
/// next tick. The busy flag spans the whole round trip.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    use_case: Arc<AnalyzeProductUseCase>,
) -> anyhow::Result<()> {
    let (ui_tx, mut ui_rx) = mpsc::channel::<UiEvent>(16);
    let mut app = AppState::default();

    let tick_rate = Duration::from_millis(100);
    loop {
        while let Ok(event) = ui_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match handle_key_event(key, &mut app) {
                    InputOutcome::Quit => break,
                    InputOutcome::Submit(profile) => {
                        let use_case = Arc::clone(&use_case);
                        let tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let event = match use_case.execute(&profile).await {
                                Ok(report) => UiEvent::ReportReady(report),
                                Err(e) => UiEvent::AnalysisFailed(e.to_string()),
                            };
                            let _ = tx.send(event).await;
                        });
                    }
                    InputOutcome::Continue => {}
                }
            }
        }
    }

    Ok(())
}
