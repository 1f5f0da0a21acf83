//! Add-to-cart notification state.

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Increases with every toast shown; used to match expiry timers.
    pub seq: u64,
    pub message: String,
}

/// Holds at most one toast. A new toast replaces the visible one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    next_seq: u64,
    current: Option<Toast>,
}

impl ToastSlot {
    /// Show a message and return the sequence number to expire it with.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(Toast {
            seq,
            message: message.into(),
        });
        seq
    }

    /// Hide the toast if it is still the one identified by `seq`.
    ///
    /// Timers of replaced toasts must not hide their successor.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Hide whatever is visible.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Notification text for a dish that was just added.
pub fn added_message(name: &str) -> String {
    format!("{} добавлен в корзину", name)
}
