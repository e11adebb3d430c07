//! Min/max bounds derived from a dataset's numeric field.

use serde::{Deserialize, Serialize};

/// Inclusive `(min, max)` bounds over a numeric listing field.
///
/// Listing views derive these once per dataset and use them to initialize
/// filter defaults (e.g. the price slider's range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    /// Computes the bounds of `field` over `records`.
    ///
    /// An empty dataset yields `(0, 0)` rather than the reduction identity
    /// `(+inf, -inf)`; callers never have to guard for it themselves.
    pub fn over<T>(records: &[T], field: impl Fn(&T) -> u32) -> Self {
        let mut values = records.iter().map(field);
        let Some(first) = values.next() else {
            return Bounds { min: 0, max: 0 };
        };

        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for value in values {
            bounds.min = bounds.min.min(value);
            bounds.max = bounds.max.max(value);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::samples::{sample_hotels, sample_itineraries};

    #[test]
    fn test_hotel_price_bounds() {
        let bounds = Bounds::over(sample_hotels(), |h| h.price);
        assert_eq!(bounds, Bounds { min: 11500, max: 22000 });
    }

    #[test]
    fn test_itinerary_duration_bounds() {
        let bounds = Bounds::over(sample_itineraries(), |i| i.duration);
        assert_eq!(bounds, Bounds { min: 4, max: 10 });
    }

    #[test]
    fn test_empty_dataset_falls_back_to_zero() {
        let records: Vec<u32> = Vec::new();
        let bounds = Bounds::over(&records, |v| *v);
        assert_eq!(bounds, Bounds { min: 0, max: 0 });
    }

    #[test]
    fn test_single_record() {
        let records = [7u32];
        let bounds = Bounds::over(&records, |v| *v);
        assert_eq!(bounds, Bounds { min: 7, max: 7 });
    }
}
