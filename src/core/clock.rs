//! Cosmetic wall-clock tick.
//!
//! Purely a display aid: the presentation layer subscribes if it wants a
//! live clock. Not part of the tracker's contract.

use chrono::{DateTime, Local};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// Spawn a background ticker that sends the current local time once per
/// `interval`. The thread stops when the receiver is dropped.
pub fn ticker(interval: Duration) -> Receiver<DateTime<Local>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        loop {
            if tx.send(Local::now()).is_err() {
                break;
            }
            thread::sleep(interval);
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_delivers_ticks() {
        let rx = ticker(Duration::from_millis(5));
        let first = rx.recv_timeout(Duration::from_secs(1));
        assert!(first.is_ok());
        let second = rx.recv_timeout(Duration::from_secs(1));
        assert!(second.is_ok());
    }
}
