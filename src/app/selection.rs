//! Per-row selection for the card list: one action tag per row at most

use std::collections::BTreeMap;

/// Action attached to a selected row. The legacy screen letters are S (view)
/// and U (update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTag {
    View,
    Update,
}

impl SelectionTag {
    pub fn letter(self) -> char {
        match self {
            SelectionTag::View => 'S',
            SelectionTag::Update => 'U',
        }
    }
}

/// Row index to tag map, reset whenever the result set it annotates is
/// replaced. Ordered so "first selected row" is well defined.
#[derive(Default)]
pub struct SelectionTracker {
    tags: BTreeMap<usize, SelectionTag>,
}

impl SelectionTracker {
    /// Toggle semantics: same tag again clears the row, a different tag
    /// replaces it (a row carries one action at most).
    pub fn toggle(&mut self, row: usize, tag: SelectionTag) {
        if self.tags.get(&row) == Some(&tag) {
            self.tags.remove(&row);
        } else {
            self.tags.insert(row, tag);
        }
    }

    pub fn tag(&self, row: usize) -> Option<SelectionTag> {
        self.tags.get(&row).copied()
    }

    pub fn selected_count(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Lowest-index tagged row, the one selection processing acts on.
    pub fn first(&self) -> Option<(usize, SelectionTag)> {
        self.tags.iter().next().map(|(&row, &tag)| (row, tag))
    }

    pub fn reset(&mut self) {
        self.tags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_tag_clears_row() {
        let mut sel = SelectionTracker::default();
        sel.toggle(2, SelectionTag::View);
        assert_eq!(sel.tag(2), Some(SelectionTag::View));
        sel.toggle(2, SelectionTag::View);
        assert_eq!(sel.tag(2), None);
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn test_toggle_other_tag_replaces() {
        let mut sel = SelectionTracker::default();
        sel.toggle(2, SelectionTag::View);
        sel.toggle(2, SelectionTag::Update);
        assert_eq!(sel.tag(2), Some(SelectionTag::Update));
        assert_eq!(sel.selected_count(), 1);
    }

    #[test]
    fn test_rows_are_independent() {
        let mut sel = SelectionTracker::default();
        sel.toggle(0, SelectionTag::View);
        sel.toggle(4, SelectionTag::Update);
        assert_eq!(sel.selected_count(), 2);
        assert_eq!(sel.tag(0), Some(SelectionTag::View));
        assert_eq!(sel.tag(4), Some(SelectionTag::Update));
    }

    #[test]
    fn test_first_is_lowest_row() {
        let mut sel = SelectionTracker::default();
        sel.toggle(5, SelectionTag::Update);
        sel.toggle(1, SelectionTag::View);
        assert_eq!(sel.first(), Some((1, SelectionTag::View)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut sel = SelectionTracker::default();
        sel.toggle(1, SelectionTag::View);
        sel.toggle(2, SelectionTag::Update);
        sel.reset();
        assert!(sel.is_empty());
        assert_eq!(sel.first(), None);
    }

    #[test]
    fn test_tag_letters() {
        assert_eq!(SelectionTag::View.letter(), 'S');
        assert_eq!(SelectionTag::Update.letter(), 'U');
    }
}
