//! Notifications - User-Visible Messages with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::error::Error;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// Where a notification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeOrigin {
    /// Outcome of something the user asked for
    User,
    /// Backend broke its response contract; no user action caused it
    BackendDefect,
    /// Readiness gate (connectivity / engine state)
    Gate,
}

impl NoticeOrigin {
    /// Marker rendered next to the severity; user-triggered outcomes carry none
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            NoticeOrigin::User => None,
            NoticeOrigin::BackendDefect => Some("backend defect"),
            NoticeOrigin::Gate => Some("connection"),
        }
    }
}

/// A notification produced by a state transition, not yet logged
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub origin: NoticeOrigin,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            origin: NoticeOrigin::User,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            origin: NoticeOrigin::User,
            message: message.into(),
        }
    }

    /// Failure of a user-triggered request; backend defects are tagged separately
    pub fn failure(action: &str, error: &Error) -> Self {
        let origin = if error.is_backend_defect() {
            NoticeOrigin::BackendDefect
        } else {
            NoticeOrigin::User
        };
        Self {
            severity: Severity::Error,
            origin,
            message: format!("Failed to {action}: {error}"),
        }
    }

    /// Gate notice; fatal errors halt interaction and are reported as errors
    pub fn gate(error: &Error) -> Self {
        let severity = if error.is_fatal() {
            Severity::Error
        } else {
            Severity::Warn
        };
        Self {
            severity,
            origin: NoticeOrigin::Gate,
            message: error.to_string(),
        }
    }
}

/// A logged notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub origin: NoticeOrigin,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Notification history using a ring buffer
#[derive(Debug)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
    next_id: u64,
}

impl NotificationLog {
    /// Create a new log with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
        }
    }

    /// Push a notice with the current timestamp
    pub fn push(&mut self, notice: Notice) -> &Notification {
        let entry = Notification {
            id: self.next_id,
            severity: notice.severity,
            origin: notice.origin,
            message: notice.message,
            timestamp: Local::now(),
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        // just pushed, so never empty
        &self.entries[self.entries.len() - 1]
    }

    /// Get all entries, oldest first
    pub fn entries(&self) -> &VecDeque<Notification> {
        &self.entries
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new(crate::constants::NOTIFICATION_CAPACITY)
    }
}
