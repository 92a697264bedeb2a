//! Unified event loop merging crossterm input, tick, and API events.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use super::app::ApiEvent;

/// Unified event type consumed by the main loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input (already filtered to Press only).
    Key(KeyEvent),
    /// 100ms render tick.
    Tick,
    /// Completed (or failed) backend request.
    Api(ApiEvent),
    /// Terminal resized.
    #[allow(dead_code)]
    Resize(u16, u16),
}

/// Merges crossterm input and API completion events into a single stream.
pub struct EventHandler {
    tick_rate: Duration,
    api_rx: mpsc::Receiver<ApiEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, api_rx: mpsc::Receiver<ApiEvent>) -> Self {
        Self { tick_rate, api_rx }
    }

    /// Wait for the next event.  Returns `Tick` if nothing happens within the tick rate.
    pub async fn next(&mut self) -> anyhow::Result<AppEvent> {
        // Drain any pending API events first (non-blocking)
        if let Ok(evt) = self.api_rx.try_recv() {
            return Ok(AppEvent::Api(evt));
        }

        // Poll crossterm with the tick timeout
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(AppEvent::Key(key));
                }
                Event::Resize(w, h) => return Ok(AppEvent::Resize(w, h)),
                _ => {}
            }
        }

        // Check API events again after the poll wait
        if let Ok(evt) = self.api_rx.try_recv() {
            return Ok(AppEvent::Api(evt));
        }

        Ok(AppEvent::Tick)
    }
}
