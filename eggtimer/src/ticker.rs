//! Background tick source.
//!
//! The ticker never looks at the timer.  It sleeps, sends a fixed
//! increment, and repeats; the UI decides whether a tick counts.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::Result;

/// One progress increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick(pub f32);

/// Spawn the ticker thread.
///
/// Every `interval` it sends `Tick(increment)`.  At most `capacity` ticks
/// wait in the channel; past that the ticker blocks until the UI drains
/// them.  The thread returns once the receiver is dropped.
pub fn spawn(interval: Duration, increment: f32, capacity: usize) -> Result<(JoinHandle<()>, Receiver<Tick>)> {
    let (tx, rx) = mpsc::sync_channel(capacity);
    let handle = thread::Builder::new()
        .name("egg-ticker".to_string())
        .spawn(move || run(tx, interval, increment))?;
    tracing::debug!(?interval, increment, capacity, "ticker started");
    Ok((handle, rx))
}

fn run(tx: SyncSender<Tick>, interval: Duration, increment: f32) {
    loop {
        thread::sleep(interval);
        if tx.send(Tick(increment)).is_err() {
            tracing::debug!("tick receiver gone, ticker stopping");
            return;
        }
    }
}
