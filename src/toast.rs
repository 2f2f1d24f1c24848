use std::time::Duration;

/// How many toasts are on screen at once; newer ones push older ones out.
pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
}

/// Visible toasts, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.insert(0, Toast { id, notification });
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::new();
        let id = queue.push(Notification::new("Hi", "there"));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].notification.title, "Hi");
        assert!(queue.dismiss(id));
        assert!(queue.toasts().is_empty());
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_limit_keeps_newest() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::new("first", ""));
        let second = queue.push(Notification::new("second", ""));
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), TOAST_LIMIT);
        assert_eq!(queue.toasts()[0].id, second);
        // already evicted
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = ToastQueue::new();
        let ids = (0..5)
            .map(|i| queue.push(Notification::new(format!("t{i}"), "")))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(ids.len(), 5);
    }
}
