//! Listing browse state: one dataset, one filter, one selection.

use voyageur_core::catalog::filter::{self, ListingFilter};
use voyageur_core::selection::ViewState;

/// State of one listing view (flights, hotels, attractions or itineraries).
///
/// Holds the full dataset, the current filter, the visible subset derived
/// from them, and the list/detail selection. Every filter change recomputes
/// the visible subset from scratch; nothing is cached across changes.
pub struct ListingView<T, F>
where
    T: Clone,
    F: ListingFilter<T>,
{
    records: Vec<T>,
    filter: F,
    visible: Vec<T>,
    selection: ViewState<T>,
}

impl<T, F> ListingView<T, F>
where
    T: Clone,
    F: ListingFilter<T>,
{
    /// Builds a view showing whatever `filter` lets through initially.
    pub fn new(records: Vec<T>, filter: F) -> Self {
        let visible = filter::apply(&records, &filter)
            .into_iter()
            .cloned()
            .collect();
        Self {
            records,
            filter,
            visible,
            selection: ViewState::new(),
        }
    }

    /// Replaces the filter and recomputes the visible subset.
    ///
    /// The selection is left alone: a focused record stays focused even if
    /// the new filter would hide it from the list behind the detail page.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.visible = filter::apply(&self.records, &self.filter)
            .into_iter()
            .cloned()
            .collect();
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// The records passing the current filter, in dataset order.
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    /// Focuses `record`, switching the view to detail.
    pub fn select(&mut self, record: T) {
        self.selection.select(record);
    }

    /// Leaves the detail view; the filtered list is shown as it was.
    pub fn back(&mut self) {
        self.selection.back();
    }

    pub fn selected(&self) -> Option<&T> {
        self.selection.selected()
    }

    pub fn is_detail(&self) -> bool {
        self.selection.is_detail()
    }
}
