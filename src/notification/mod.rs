//! Transient status indicators
//! Feeds the status line: failures and confirmations surface here rather
//! than interrupting editing. Entries expire on a per-kind TTL and the
//! shell prunes them on every tick; there is no dismiss surface because
//! nothing renders them individually.

use crate::constants::notifications as ttl;
use crate::error::ErrorSeverity;
use std::time::{Duration, Instant};

/// Kind of a status-line entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// How long entries of this kind stay on the status line
    pub fn ttl(self) -> Duration {
        let secs = match self {
            NotificationType::Success => ttl::SUCCESS_TTL_SECS,
            NotificationType::Info => ttl::INFO_TTL_SECS,
            NotificationType::Warning => ttl::WARNING_TTL_SECS,
            NotificationType::Error => ttl::ERROR_TTL_SECS,
        };
        Duration::from_secs(secs)
    }

    /// Display priority; a live failure outranks later chatter
    fn priority(self) -> u8 {
        match self {
            NotificationType::Info => 0,
            NotificationType::Success => 1,
            NotificationType::Warning => 2,
            NotificationType::Error => 3,
        }
    }
}

impl From<ErrorSeverity> for NotificationType {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Info => NotificationType::Info,
            ErrorSeverity::Warning => NotificationType::Warning,
            ErrorSeverity::Error => NotificationType::Error,
            ErrorSeverity::Critical => NotificationType::Error,
        }
    }
}

/// One status-line entry
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationType,
    pub posted_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.posted_at) > self.kind.ttl()
    }
}

/// Holds the live status-line entries
pub struct NotificationManager {
    entries: Vec<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: NotificationType, message: impl Into<String>) {
        self.entries.push(Notification {
            message: message.into(),
            kind,
            posted_at: Instant::now(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationType::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationType::Success, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(NotificationType::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationType::Error, message);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entry the status line shows. The highest-priority live entry
    /// wins; recency breaks ties, so a save failure is not hidden by an
    /// info posted right after it.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries
            .iter()
            .enumerate()
            .max_by_key(|(i, n)| (n.kind.priority(), *i))
            .map(|(_, n)| n)
    }

    /// Drop entries whose TTL has elapsed at `now`
    pub fn prune_expired(&mut self, now: Instant) {
        self.entries.retain(|n| !n.is_expired(now));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
