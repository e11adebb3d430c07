//! Default notification sink.

use tracing::{error, info};

use voyageur_core::notification::{Notification, NotificationLevel, Notifier};

/// Notifier that logs through `tracing`.
///
/// Stands in for the toast presentation layer; each notification becomes one
/// structured log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                info!(level = ?notification.level, "{}", notification.message);
            }
            NotificationLevel::Error => {
                error!("{}", notification.message);
            }
        }
    }
}
