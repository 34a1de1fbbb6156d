use crate::app::{input::map_event_to_action, reducer, state::AppState, ui};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

const READER_POLL: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    // Poll so the reader exits once the loop drops the receiver
    tokio::task::spawn_blocking(move || loop {
        if event_tx.is_closed() {
            break;
        }
        match event::poll(READER_POLL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx).await
}

/// Draw, wait for the next terminal event, reduce, repeat. Nothing happens
/// between events, so there is no tick.
pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let Some(res) = event_rx.recv().await else {
            tracing::debug!("input channel closed");
            break;
        };
        let event = res?;
        let Some(action) = map_event_to_action(event, &app_state, terminal.size()?) else {
            continue;
        };

        // --- 3. Update (Reducer) ---
        reducer::update(&mut app_state, action);
        if app_state.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
