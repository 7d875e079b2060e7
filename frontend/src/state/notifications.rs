//! Transient status messages.
//!
//! The center only holds data. The `NotificationArea` component renders it
//! and drives the timers that call [`NotificationCenter::begin_fade`] and
//! [`NotificationCenter::dismiss`].

use crate::{NotificationKind, DEFAULT_NOTIFICATION_TIMEOUT_MS};

pub type NotificationId = u64;

/// A single stacked notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Time on screen before the fade starts.
    pub timeout_ms: u32,
    /// Set once the fade-out transition has started.
    pub fading: bool,
}

/// What to show, before it is placed on the stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Ordered stack of live notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationCenter {
    /// Push a notification with the default timeout.
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.push(kind, title, message, DEFAULT_NOTIFICATION_TIMEOUT_MS)
    }

    /// Push a prepared notice with the default timeout.
    pub fn post(&mut self, notice: Notice) -> NotificationId {
        self.notify(notice.kind, notice.title, notice.message)
    }

    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timeout_ms: u32,
    ) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            timeout_ms,
            fading: false,
        });
        id
    }

    /// Start the fade-out. Unknown ids are ignored.
    pub fn begin_fade(&mut self, id: NotificationId) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.fading = true;
        }
    }

    /// Remove a notification right away. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.items.retain(|n| n.id != id);
    }

    pub fn is_fading(&self, id: NotificationId) -> bool {
        self.items.iter().any(|n| n.id == id && n.fading)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Whether any live notification has the given kind.
    pub fn has_kind(&self, kind: NotificationKind) -> bool {
        self.items.iter().any(|n| n.kind == kind)
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_stack_in_order() {
        let mut center = NotificationCenter::default();
        let first = center.notify(NotificationKind::Info, "One", "first");
        let second = center.push(NotificationKind::Error, "Two", "second", 10_000);

        assert_ne!(first, second);
        let titles: Vec<_> = center.items().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert_eq!(center.items()[0].timeout_ms, DEFAULT_NOTIFICATION_TIMEOUT_MS);
        assert_eq!(center.items()[1].timeout_ms, 10_000);
    }

    #[test]
    fn test_fade_then_dismiss() {
        let mut center = NotificationCenter::default();
        let id = center.notify(NotificationKind::Success, "Saved", "ok");
        assert!(!center.is_fading(id));
        center.begin_fade(id);
        assert!(center.is_fading(id));

        center.dismiss(id);
        assert!(center.items().is_empty());

        // Timers firing after a manual close are harmless.
        center.begin_fade(id);
        center.dismiss(id);
        assert!(center.items().is_empty());
    }

    #[test]
    fn test_dismiss_keeps_other_notifications() {
        let mut center = NotificationCenter::default();
        let a = center.notify(NotificationKind::Info, "A", "");
        let b = center.notify(NotificationKind::Info, "B", "");
        center.dismiss(a);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].id, b);
    }
}
