//! Transient user notifications.
//!
//! Each booking or planning action emits exactly one notification. They are
//! not durable state; presentation is behind the [`Notifier`] seam.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A transient success/error/info message shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Sink for user notifications, decoupling services from presentation.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Test notifier that records everything it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, in order.
    pub fn recorded(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut guard) = self.notifications.lock() {
            guard.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::info("Opening Golden Triangle Tour itinerary details"));
        notifier.notify(Notification::success("Itinerary booked successfully!"));

        let recorded = notifier.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].level, NotificationLevel::Info);
        assert_eq!(recorded[1].level, NotificationLevel::Success);
    }
}
