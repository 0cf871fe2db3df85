//! Previous/next page transitions

use crate::text;

/// Pagination controls for a page within `[1, total]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total: u32,
}

impl Pagination {
    /// Controls for `current` of `total` pages; a total of 0 counts as 1
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    /// Whether "previous" is enabled
    pub const fn has_prev(self) -> bool {
        self.current > 1
    }

    /// Whether "next" is enabled
    pub const fn has_next(self) -> bool {
        self.current < self.total
    }

    /// Page "previous" leads to
    pub const fn prev(self) -> Option<u32> {
        if self.has_prev() {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// Page "next" leads to
    pub const fn next(self) -> Option<u32> {
        if self.has_next() {
            Some(self.current + 1)
        } else {
            None
        }
    }

    /// "Strona {current} z {total}"
    pub fn label(self) -> String {
        text::page_label(self.current, self.total)
    }
}
