//! Periodic keep-alive signal sent to the hosting process.
//!
//! The list manager never sees any of this; the TUI event loop ticks a
//! [`KeepAlive`] and a [`Host`] acknowledges. [`NoopHost`] is the default.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Message sent to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostMessage {
    KeepAlive,
}

/// Host reply to a keep-alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HostReply {
    Alive,
}

/// The collaborator receiving keep-alive signals
pub trait Host {
    /// Deliver a message; `None` means the host did not answer
    fn send(&mut self, message: HostMessage) -> Option<HostReply>;
}

/// Acknowledges every signal and does nothing else
#[derive(Debug, Default)]
pub struct NoopHost;

impl Host for NoopHost {
    fn send(&mut self, message: HostMessage) -> Option<HostReply> {
        match message {
            HostMessage::KeepAlive => Some(HostReply::Alive),
        }
    }
}

/// Sends [`HostMessage::KeepAlive`] every `interval`
pub struct KeepAlive {
    host: Box<dyn Host>,
    interval: Option<Duration>,
    last: Instant,
    sent: u64,
}

impl KeepAlive {
    /// `interval_secs == 0` disables the signal
    pub fn new(host: Box<dyn Host>, interval_secs: u64, now: Instant) -> Self {
        KeepAlive {
            host,
            interval: (interval_secs > 0).then(|| Duration::from_secs(interval_secs)),
            last: now,
            sent: 0,
        }
    }

    /// Signals sent so far
    pub fn sent(&self) -> u64 {
        self.sent
    }

    /// Send a signal if the interval has elapsed. Returns true when one was sent.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        if now.duration_since(self.last) < interval {
            return false;
        }
        self.last = now;
        self.sent += 1;
        match self.host.send(HostMessage::KeepAlive) {
            Some(HostReply::Alive) => tracing::trace!(sent = self.sent, "keep-alive acknowledged"),
            None => tracing::debug!(sent = self.sent, "keep-alive not acknowledged"),
        }
        true
    }
}
