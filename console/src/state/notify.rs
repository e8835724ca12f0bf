//! Toast notifications shown after profile and account actions.
//!
//! One toast is visible at a time; showing a new one replaces the old. Each
//! toast carries a sequence number so the auto-dismiss timer of a replaced
//! toast cannot close its successor.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a toast stays up unless closed by hand.
pub const NOTIFICATION_TIMEOUT_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub seq: u64,
    pub kind: NotifyKind,
    /// Already-localized text.
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    pub current: Option<Notification>,
    next_seq: u64,
}

impl NotifyState {
    /// Replace the visible toast; returns its sequence number.
    pub fn show(&mut self, kind: NotifyKind, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notification { seq, kind, message: message.into() });
        seq
    }

    /// Close toast `seq` if it is still the visible one.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }
}
