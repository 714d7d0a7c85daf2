//! Application runtime: terminal lifecycle and the event loop.

use std::io;
use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::info;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::form::{AccountForm, Outcome};
use crate::terminal::TerminalGuard;
use crate::ui;
use crate::widgets::spinner::Spinner;

/// How often the busy spinner animates while a submission is pending.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can take the runtime down.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Run the account form until the user quits.
pub async fn run() -> Result<(), RuntimeError> {
    let mut terminal = TerminalGuard::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut form = AccountForm::new(tx);
    let mut spinner = Spinner::new();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    info!("account form started");
    draw(&mut terminal, &form, &spinner)?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else {
                    break;
                };
                if form.handle_event(&event?) == Outcome::Quit {
                    break;
                }
            }
            Some(message) = rx.recv() => {
                form.on_message(message);
            }
            _ = ticker.tick() => {
                if form.submission.is_pending() {
                    spinner.advance();
                    form.mark_dirty();
                }
            }
        }

        if form.take_dirty() {
            draw(&mut terminal, &form, &spinner)?;
        }
    }

    info!("account form closed");
    Ok(())
}

fn draw(terminal: &mut TerminalGuard, form: &AccountForm, spinner: &Spinner) -> io::Result<()> {
    terminal
        .terminal()
        .draw(|frame| ui::render(frame, form, spinner))?;
    Ok(())
}
