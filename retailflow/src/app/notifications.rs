//! Notification system for user-visible feedback
//!
//! Two kinds of feedback: transient toasts kept by [`NotificationManager`],
//! and a single blocking [`Alert`] that must be dismissed before any other
//! key is handled.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::commands::NotificationLevel;

const AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_NOTIFICATIONS: usize = 50;

/// A toast shown until `expires_at`
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: usize,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Bounded queue of toasts, oldest first
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    next_id: usize,
    ttl: Duration,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::with_ttl(AUTO_DISMISS)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            next_id: 0,
            ttl,
        }
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Error, title, message)
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Success, title, message)
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Warning, title, message)
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Info, title, message)
    }

    /// Queue a toast and return its id. The oldest toast is dropped once the
    /// queue is full.
    pub fn push(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        if self.queue.len() == MAX_NOTIFICATIONS {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            id,
            level,
            title: title.into(),
            message: message.into(),
            expires_at: Instant::now() + self.ttl,
        });

        id
    }

    pub fn dismiss(&mut self, id: usize) {
        self.queue.retain(|n| n.id != id);
    }

    /// Toasts still on screen, oldest first
    pub fn get_active(&self) -> Vec<&Notification> {
        let now = Instant::now();
        self.queue.iter().filter(|n| !n.is_expired(now)).collect()
    }

    pub fn cleanup_expired(&mut self) {
        let now = Instant::now();
        self.queue.retain(|n| !n.is_expired(now));
    }

    /// Most recent toast, expired or not
    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
}

impl Alert {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn error(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            message: message.into(),
            detail: Some(detail.into()),
        }
    }
}
