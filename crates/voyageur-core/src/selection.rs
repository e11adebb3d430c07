//! List/detail view state.

/// The two states of a listing view: the list itself, or one focused record.
///
/// Selecting while already in detail replaces the current selection; there is
/// no stacking. An explicit back action returns to the list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    /// The initial state: the full (filtered) list is shown.
    #[default]
    List,
    /// One record has the focus (hotel detail page, itinerary modal).
    Detail(T),
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        ViewState::List
    }

    /// Focuses `record`, replacing any current selection.
    pub fn select(&mut self, record: T) {
        *self = ViewState::Detail(record);
    }

    /// Returns to the list.
    pub fn back(&mut self) {
        *self = ViewState::List;
    }

    /// The focused record, if any.
    pub fn selected(&self) -> Option<&T> {
        match self {
            ViewState::List => None,
            ViewState::Detail(record) => Some(record),
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, ViewState::Detail(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_list() {
        let state: ViewState<u32> = ViewState::new();
        assert!(!state.is_detail());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_select_and_back() {
        let mut state = ViewState::new();
        state.select("Taj Palace");
        assert_eq!(state.selected(), Some(&"Taj Palace"));

        state.back();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_reselect_replaces_without_stacking() {
        let mut state = ViewState::new();
        state.select("Taj Palace");
        state.select("Leela Palace");
        assert_eq!(state.selected(), Some(&"Leela Palace"));

        // One back action is enough to reach the list again.
        state.back();
        assert_eq!(state.selected(), None);
    }
}
