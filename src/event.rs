use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::warn;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// What the input thread does with one poll result.
enum Polled {
    Forward(AppEvent),
    Skip,
    /// Poll failed; wait a tick before trying again.
    Backoff,
}

fn classify(polled: io::Result<bool>, read: impl FnOnce() -> io::Result<Event>) -> Polled {
    match polled {
        Ok(true) => match read() {
            // Release/Repeat events would double-submit a choice
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                Polled::Forward(AppEvent::Key(key))
            }
            Ok(Event::Resize(_, _)) => Polled::Forward(AppEvent::Resize),
            Ok(_) => Polled::Skip,
            Err(err) => {
                warn!(%err, "terminal read failed");
                Polled::Skip
            }
        },
        Ok(false) => Polled::Forward(AppEvent::Tick),
        Err(err) => {
            warn!(%err, "terminal poll failed");
            Polled::Backoff
        }
    }
}

/// Reads terminal input on a background thread and forwards it to the UI loop.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let event = match classify(event::poll(tick_rate), event::read) {
                    Polled::Forward(event) => event,
                    Polled::Skip => continue,
                    Polled::Backoff => {
                        thread::sleep(tick_rate);
                        AppEvent::Tick
                    }
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn failed_poll_backs_off_without_reading() {
        let polled = classify(Err(io::Error::other("no tty")), || {
            panic!("read must not run after a failed poll")
        });
        assert!(matches!(polled, Polled::Backoff));
    }

    #[test]
    fn idle_poll_is_a_tick() {
        let polled = classify(Ok(false), || panic!("nothing to read"));
        assert!(matches!(polled, Polled::Forward(AppEvent::Tick)));
    }

    #[test]
    fn only_key_presses_are_forwarded() {
        assert!(matches!(
            classify(Ok(true), || Ok(key(KeyEventKind::Press))),
            Polled::Forward(AppEvent::Key(_))
        ));
        assert!(matches!(
            classify(Ok(true), || Ok(key(KeyEventKind::Release))),
            Polled::Skip
        ));
        assert!(matches!(
            classify(Ok(true), || Ok(Event::Resize(80, 24))),
            Polled::Forward(AppEvent::Resize)
        ));
        assert!(matches!(
            classify(Ok(true), || Err(io::Error::other("gone"))),
            Polled::Skip
        ));
    }
}
