//! Global alert slot for transient, color-tagged notifications.
//!
//! DESIGN
//! ======
//! One slot, no queue: every `show` overwrites whatever is displayed. A
//! sequence number lets the banner's expiry timer tell whether the message it
//! scheduled is still the one on screen.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationColor {
    Green,
    Red,
}

impl NotificationColor {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Green => "alert--green",
            Self::Red => "alert--red",
        }
    }
}

/// A user-facing message and its color tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub color: NotificationColor,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { color: NotificationColor::Green, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { color: NotificationColor::Red, message: message.into() }
    }
}

/// Contents of the single alert slot.
#[derive(Clone, Debug, Default)]
pub struct AlertState {
    pub current: Option<Notification>,
    pub seq: u64,
}

impl AlertState {
    /// Replace the displayed notification and return its sequence number.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.current = Some(notification);
        self.seq
    }

    /// Clear the slot if `seq` is still the latest notification.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// Anything that can surface a notification to the user.
pub trait Notifier {
    fn show(&self, notification: Notification);
}

impl Notifier for RwSignal<AlertState> {
    fn show(&self, notification: Notification) {
        self.update(|state| {
            state.show(notification);
        });
    }
}
