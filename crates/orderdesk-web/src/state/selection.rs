//! Checked rows

use indexmap::IndexSet;

/// Ids of the rows the user has checked, in the order they were checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: IndexSet<String>,
}

impl Selection {
    /// Check `id` if unchecked, uncheck it otherwise
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.shift_remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Whether `id` is checked
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether every id in `ids` is checked, and there is at least one
    pub fn covers<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for id in ids {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Replace the selection with `ids`
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.ids = ids.into_iter().map(str::to_string).collect();
    }

    /// Keep only the ids `keep` accepts
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    /// Uncheck everything
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Checked ids
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of checked rows
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is checked
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::default();
        selection.toggle("a");
        selection.toggle("b");
        selection.toggle("a");

        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_covers_needs_rows() {
        let mut selection = Selection::default();
        assert!(!selection.covers([]));

        selection.select_all(["a", "b"]);
        assert!(selection.covers(["a", "b"]));
        assert!(!selection.covers(["a", "b", "c"]));
    }

    #[test]
    fn test_retain() {
        let mut selection = Selection::default();
        selection.select_all(["a", "b", "c"]);
        selection.retain(|id| id != "b");

        assert_eq!(selection.len(), 2);
        assert!(!selection.contains("b"));
    }
}
