//! Delete confirmation dialog

/// Dialog open/pending state and the order it targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalState {
    target: Option<String>,
    open: bool,
    pending: bool,
}

impl RemovalState {
    /// Open the dialog for `id`
    pub fn open(&mut self, id: impl Into<String>) {
        if self.pending {
            return;
        }
        self.target = Some(id.into());
        self.open = true;
    }

    /// Close without side effects; ignored while a delete is running
    pub fn cancel(&mut self) {
        if self.pending {
            return;
        }
        self.open = false;
        self.target = None;
    }

    /// Mark the delete as running and hand out the target
    ///
    /// Returns `None` when there is no target or a delete is already running.
    pub fn begin_confirm(&mut self) -> Option<String> {
        if self.pending || !self.open {
            return None;
        }
        let target = self.target.clone()?;
        self.pending = true;
        Some(target)
    }

    /// The delete finished, whatever the result
    pub fn finish(&mut self) {
        self.pending = false;
        self.open = false;
        self.target = None;
    }

    /// Whether the dialog is shown
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the confirm button is disabled
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Order the dialog targets
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
