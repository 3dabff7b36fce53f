//! Transient user notifications.
//!
//! The cart view writes one-shot notices into a [`Notifier`]. How they reach
//! the user (a toast, a terminal line, a log record) is up to the
//! implementation.

use serde::{Deserialize, Serialize};

/// Display options for a plain notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeOptions {
    /// How long the notice stays visible.
    pub duration_ms: u64,
    /// Icon shown next to the message.
    pub icon: String,
}

/// Kind of notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Neutral information.
    Info,
    /// Confirmation of a completed action.
    Success,
}

/// A notice as delivered to a notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    /// Show a neutral notice.
    fn notify(&mut self, message: &str, options: NoticeOptions);

    /// Show a success notice.
    fn notify_success(&mut self, message: &str, icon: &str);
}

/// Notifier that buffers notices for the caller to drain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    /// Pending notices without consuming them.
    pub fn pending(&self) -> &[Notice] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, message: &str, options: NoticeOptions) {
        self.pending.push(Notice {
            kind: NoticeKind::Info,
            message: message.to_string(),
            icon: options.icon,
            duration_ms: Some(options.duration_ms),
        });
    }

    fn notify_success(&mut self, message: &str, icon: &str) {
        self.pending.push(Notice {
            kind: NoticeKind::Success,
            message: message.to_string(),
            icon: icon.to_string(),
            duration_ms: None,
        });
    }
}

/// Notifier that only emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str, options: NoticeOptions) {
        tracing::info!(
            icon = %options.icon,
            duration_ms = options.duration_ms,
            "{}",
            message
        );
    }

    fn notify_success(&mut self, message: &str, icon: &str) {
        tracing::info!(icon = %icon, success = true, "{}", message);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str, options: NoticeOptions) {
        (**self).notify(message, options)
    }

    fn notify_success(&mut self, message: &str, icon: &str) {
        (**self).notify_success(message, icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_records_in_order() {
        let mut queue = NoticeQueue::new();
        queue.notify(
            "Discount Applied",
            NoticeOptions {
                duration_ms: 1000,
                icon: "👏".to_string(),
            },
        );
        queue.notify_success("Checkout Successful", "🚀");

        let notices = queue.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::Info);
        assert_eq!(notices[0].duration_ms, Some(1000));
        assert_eq!(notices[1].kind, NoticeKind::Success);
        assert_eq!(notices[1].icon, "🚀");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_notice_json() {
        let notice = Notice {
            kind: NoticeKind::Success,
            message: "Checkout Successful".to_string(),
            icon: "🚀".to_string(),
            duration_ms: None,
        };
        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["kind"], "success");
        assert!(json.get("duration_ms").is_none());
    }

    #[test]
    fn test_notifier_through_mut_ref() {
        fn confirm<N: Notifier>(mut notifier: N) {
            notifier.notify_success("ok", "✓");
        }

        let mut queue = NoticeQueue::new();
        confirm(&mut queue);
        confirm(&mut queue);
        assert_eq!(queue.len(), 2);
    }
}
