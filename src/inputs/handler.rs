// inputs/handler.rs

//! Event handler that wraps crossterm input and tick event.

use crossterm::event::KeyEventKind;
use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub enum Event {
    /// A key was pressed.
    Input(crossterm::event::KeyEvent),
    /// No input during a tick.
    Tick,
}

/// Event handler that wraps crossterm input and tick event.
/// Terminal polling runs on a blocking thread and is forwarded to a common `Receiver`
pub struct EventHandler {
    rx: tokio::sync::mpsc::Receiver<Event>,
    // Need to be kept around to prevent disposing the sender side.
    _tx: tokio::sync::mpsc::Sender<Event>,
    // To stop the loop
    stop_capture: Arc<AtomicBool>,
}

impl EventHandler {
    /// Constructs a new instance of `EventHandler` with the given `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = tokio::sync::mpsc::channel(100);
        let stop_capture = Arc::new(AtomicBool::new(false));

        let event_tx = tx.clone();
        let event_stop_capture = stop_capture.clone();
        tokio::task::spawn_blocking(move || loop {
            // poll for tick rate duration, if no event, send tick event.
            let event = match crossterm::event::poll(tick_rate) {
                Ok(true) => match crossterm::event::read() {
                    Ok(crossterm::event::Event::Key(key_event))
                        if key_event.kind == KeyEventKind::Press =>
                    {
                        Some(Event::Input(key_event))
                    }
                    Ok(_) => None,
                    Err(err) => {
                        error!("Could not read terminal event: {}", err);
                        break;
                    }
                },
                Ok(false) => Some(Event::Tick),
                Err(err) => {
                    error!("Could not poll terminal events: {}", err);
                    break;
                }
            };
            if let Some(event) = event {
                if event_tx.blocking_send(event).is_err() {
                    error!("Could not send terminal event to main thread!");
                    break;
                }
            }
            if event_stop_capture.load(Ordering::Relaxed) {
                break;
            }
        });

        EventHandler {
            rx,
            _tx: tx,
            stop_capture,
        }
    }

    /// Attempts to read an event.
    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }

    /// Close
    pub fn close(&mut self) {
        self.stop_capture.store(true, Ordering::Relaxed)
    }
}
