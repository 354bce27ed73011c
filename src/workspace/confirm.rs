//! Delete-confirmation state machine
//! `idle -> pending(target) -> idle`, gating only the single delete action

/// Tracks the tab awaiting delete confirmation.
/// Not a lock: other workspace operations proceed while pending, and a
/// pending target that no longer exists is treated as stale by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirm {
    pending: Option<String>,
}

impl DeleteConfirm {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the confirmation for a target tab. A second request replaces
    /// the first; only one dialog is ever shown.
    pub fn request(&mut self, target: impl Into<String>) {
        self.pending = Some(target.into());
    }

    /// Dismiss without deleting
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consume the pending target, returning to idle
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// The armed target, if any
    pub fn target(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for DeleteConfirm {
    fn default() -> Self {
        Self::new()
    }
}
