//! Transient toast messages

/// Toast colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Something worked
    Success,
    /// Something failed
    Error,
}

/// One toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used to dismiss the toast
    pub id: u64,
    /// Colour
    pub kind: ToastKind,
    /// Text
    pub message: String,
}

/// Toasts on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Notifications {
    /// Show a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Show a success toast
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    /// Show an error toast
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Remove the toast with `id`, if still shown
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Toasts on screen
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Most recent toast
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
