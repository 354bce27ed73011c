//! Error dispatch
//! Every handled error becomes a status-line notification; the severity
//! picks the notification kind and therefore its TTL and display priority.

use crate::error::LoftError;
use crate::notification::{NotificationManager, NotificationType};

pub struct ErrorManager {
    notifications: NotificationManager,
}

impl ErrorManager {
    pub fn new() -> Self {
        Self {
            notifications: NotificationManager::new(),
        }
    }

    /// Surface an error on the status line
    pub fn handle(&mut self, err: LoftError) {
        self.notifications
            .push(NotificationType::from(err.severity), err.message);
    }

    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationManager {
        &mut self.notifications
    }
}

impl Default for ErrorManager {
    fn default() -> Self {
        Self::new()
    }
}
