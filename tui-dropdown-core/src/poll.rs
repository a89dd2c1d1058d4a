//! Terminal event polling for driving loops

use std::time::Duration;

use crossterm::event;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::event::EventKind;

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

/// Process a raw event into an [`EventKind`]
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => EventKind::Mouse(mouse),
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}

/// Spawn the crossterm polling task.
///
/// Forwards key, mouse, and resize input as [`RawEvent`]s on `tx`, reading
/// at most `EVENT_BATCH_LIMIT` events per wakeup so one burst of mouse
/// movement cannot starve the select loop. Runs until `cancel_token` fires
/// or the receiving side goes away.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    const EVENT_BATCH_LIMIT: usize = 20;

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("event poller stopping");
                    // Leave no queued input behind for the restored terminal
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut batched = 0;
                    while batched < EVENT_BATCH_LIMIT
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        batched += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("event receiver dropped, poller exiting");
                            return;
                        }
                    }
                }
            }
        }
    })
}
