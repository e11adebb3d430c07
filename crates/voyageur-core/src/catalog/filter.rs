//! Filter predicate evaluation over listing datasets.
//!
//! A filter state is a small set of user-adjustable values; applying it is a
//! pure, full re-evaluation of the conjunction of its active predicates over
//! the whole dataset. The result preserves dataset order (stable filter, not
//! a re-sort) and is idempotent for a fixed `(dataset, filter)` pair.
//! Datasets are bounded (single-digit thousands at most), so a linear pass
//! per change is fine.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::model::{Attraction, AttractionCategory, Flight, Hotel, Itinerary};

/// The predicate seam between a filter state and one listing type.
pub trait ListingFilter<T> {
    /// Whether `record` passes every active predicate of this filter.
    ///
    /// Predicates have no side effects, so evaluation order is irrelevant.
    fn matches(&self, record: &T) -> bool;
}

/// Applies `filter` to `records`, preserving dataset order.
pub fn apply<'a, T, F>(records: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: ListingFilter<T>,
{
    records.iter().filter(|record| filter.matches(record)).collect()
}

/// Category selection with the "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategorySelection {
    /// No category constraint.
    #[default]
    All,
    /// Only records of the given category pass.
    Only(AttractionCategory),
}

impl CategorySelection {
    fn allows(&self, category: AttractionCategory) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
        }
    }
}

/// Price floor and ceiling for the flight view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFilter {
    pub min_price: u32,
    pub max_price: u32,
}

impl FlightFilter {
    /// Defaults to the full dataset price range (nothing filtered out).
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            min_price: bounds.min,
            max_price: bounds.max,
        }
    }
}

impl ListingFilter<Flight> for FlightFilter {
    fn matches(&self, record: &Flight) -> bool {
        record.price >= self.min_price && record.price <= self.max_price
    }
}

/// Price ceiling for the hotel view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelFilter {
    pub max_price: u32,
}

impl HotelFilter {
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            max_price: bounds.max,
        }
    }
}

impl ListingFilter<Hotel> for HotelFilter {
    fn matches(&self, record: &Hotel) -> bool {
        record.price <= self.max_price
    }
}

/// Price ceiling and category selection for the attraction view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionFilter {
    pub max_price: u32,
    pub category: CategorySelection,
}

impl AttractionFilter {
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            max_price: bounds.max,
            category: CategorySelection::All,
        }
    }
}

impl ListingFilter<Attraction> for AttractionFilter {
    fn matches(&self, record: &Attraction) -> bool {
        record.price <= self.max_price && self.category.allows(record.category)
    }
}

/// Price ceiling and day range for the itinerary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryFilter {
    pub max_price: u32,
    pub min_days: u32,
    pub max_days: u32,
}

impl ItineraryFilter {
    pub fn from_bounds(price_bounds: Bounds, duration_bounds: Bounds) -> Self {
        Self {
            max_price: price_bounds.max,
            min_days: duration_bounds.min,
            max_days: duration_bounds.max,
        }
    }
}

impl ListingFilter<Itinerary> for ItineraryFilter {
    fn matches(&self, record: &Itinerary) -> bool {
        record.price <= self.max_price
            && record.duration >= self.min_days
            && record.duration <= self.max_days
    }
}
