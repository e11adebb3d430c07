//! Trip planner domain models.
//!
//! The budget breakdown is a fixed-percentage split: accommodation 40%,
//! flights 30%, local transport 15%, activities 15%. A disabled category
//! contributes 0 and the remaining percentages are NOT redistributed, so the
//! breakdown can sum to less than the total budget. That asymmetry is
//! intentional, preserved behavior.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoyageurError};

/// The trip-details form as filled in by the user, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub source: String,
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travelers: u32,
    /// Total budget in whole rupees.
    pub budget: u32,
    pub include_flights: bool,
    pub include_hotels: bool,
    pub include_transport: bool,
}

impl Default for TripRequest {
    /// The form's reset state: two travelers, a 2,000 rupee budget, flights
    /// and hotels included, local transport not.
    fn default() -> Self {
        Self {
            source: String::new(),
            destination: String::new(),
            start_date: None,
            end_date: None,
            travelers: 2,
            budget: 2000,
            include_flights: true,
            include_hotels: true,
            include_transport: false,
        }
    }
}

impl TripRequest {
    /// Validates the form, reporting every failing field at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.source.trim().is_empty() {
            errors.push(VoyageurError::validation("source", "Source is required"));
        }
        if self.destination.trim().is_empty() {
            errors.push(VoyageurError::validation(
                "destination",
                "Destination is required",
            ));
        }
        if self.travelers == 0 {
            errors.push(VoyageurError::validation(
                "travelers",
                "At least one traveler is required",
            ));
        }
        if self.start_date.is_none() {
            errors.push(VoyageurError::validation(
                "startDate",
                "Start date is required",
            ));
        }
        match (self.start_date, self.end_date) {
            (_, None) => errors.push(VoyageurError::validation(
                "endDate",
                "End date is required",
            )),
            (Some(start), Some(end)) if end <= start => {
                errors.push(VoyageurError::validation(
                    "endDate",
                    "End date must be after start date",
                ));
            }
            _ => {}
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(VoyageurError::Multiple(errors)),
        }
    }

    /// Whole-day trip duration. Requires a validated request.
    fn duration_days(&self) -> Option<u32> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if end > start => {
                Some((end - start).num_days() as u32)
            }
            _ => None,
        }
    }
}

/// One category line of the budget breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    /// Allocated amount in whole rupees (floored).
    pub amount: u32,
    /// Percentage applied; 0 when the category is excluded.
    pub percentage: u8,
}

/// The four-category budget split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub accommodation: BudgetLine,
    pub flights: BudgetLine,
    pub transport: BudgetLine,
    /// Activities are always allocated; the form has no toggle for them.
    pub activities: BudgetLine,
}

impl BudgetBreakdown {
    const ACCOMMODATION_PCT: u8 = 40;
    const FLIGHTS_PCT: u8 = 30;
    const TRANSPORT_PCT: u8 = 15;
    const ACTIVITIES_PCT: u8 = 15;

    /// Splits `budget` across the categories. Excluded categories get 0 and
    /// nothing is redistributed.
    pub fn allocate(
        budget: u32,
        include_flights: bool,
        include_hotels: bool,
        include_transport: bool,
    ) -> Self {
        // Widened intermediate; budget * 100 does not fit in u32.
        let line = |included: bool, percentage: u8| BudgetLine {
            amount: if included {
                (u64::from(budget) * u64::from(percentage) / 100) as u32
            } else {
                0
            },
            percentage: if included { percentage } else { 0 },
        };

        Self {
            accommodation: line(include_hotels, Self::ACCOMMODATION_PCT),
            flights: line(include_flights, Self::FLIGHTS_PCT),
            transport: line(include_transport, Self::TRANSPORT_PCT),
            activities: line(true, Self::ACTIVITIES_PCT),
        }
    }

    /// Sum of the allocated amounts. May be less than the budget when a
    /// category is excluded, and slightly less even when none is (flooring).
    pub fn total(&self) -> u32 {
        self.accommodation.amount + self.flights.amount + self.transport.amount
            + self.activities.amount
    }
}

/// A generated trip plan, optionally persisted to the saved-plan list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    /// Generated identifier of the form `trip-<epoch milliseconds>`.
    pub id: String,
    pub source: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    pub travelers: u32,
    pub budget: u32,
    /// `floor(budget / duration_days)`.
    pub daily_budget: u32,
    pub breakdown: BudgetBreakdown,
    /// RFC 3339 creation timestamp.
    pub saved_at: DateTime<Utc>,
}

impl TripPlan {
    /// Builds a plan from a request, validating it first.
    pub fn from_request(request: &TripRequest) -> Result<Self> {
        request.validate()?;

        let start_date = request
            .start_date
            .ok_or_else(|| VoyageurError::internal("validated request missing start date"))?;
        let end_date = request
            .end_date
            .ok_or_else(|| VoyageurError::internal("validated request missing end date"))?;
        let duration_days = request
            .duration_days()
            .ok_or_else(|| VoyageurError::internal("validated request has no duration"))?;

        let now = Utc::now();
        Ok(Self {
            id: format!("trip-{}", now.timestamp_millis()),
            source: request.source.clone(),
            destination: request.destination.clone(),
            start_date,
            end_date,
            duration_days,
            travelers: request.travelers,
            budget: request.budget,
            daily_budget: request.budget / duration_days,
            breakdown: BudgetBreakdown::allocate(
                request.budget,
                request.include_flights,
                request.include_hotels,
                request.include_transport,
            ),
            saved_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            source: "Delhi".to_string(),
            destination: "Goa".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 11, 25),
            end_date: NaiveDate::from_ymd_opt(2023, 11, 30),
            travelers: 2,
            budget: 20000,
            include_flights: true,
            include_hotels: true,
            include_transport: false,
        }
    }

    #[test]
    fn test_allocation_without_transport() {
        let breakdown = BudgetBreakdown::allocate(20000, true, true, false);
        assert_eq!(breakdown.flights.amount, 6000);
        assert_eq!(breakdown.accommodation.amount, 8000);
        assert_eq!(breakdown.transport.amount, 0);
        assert_eq!(breakdown.transport.percentage, 0);
        assert_eq!(breakdown.activities.amount, 3000);
        // The split does not renormalize: 17,000 of 20,000 allocated.
        assert_eq!(breakdown.total(), 17000);
    }

    #[test]
    fn test_full_allocation_sums_to_budget() {
        let breakdown = BudgetBreakdown::allocate(20000, true, true, true);
        assert_eq!(breakdown.total(), 20000);
    }

    #[test]
    fn test_amounts_are_floored() {
        let breakdown = BudgetBreakdown::allocate(999, true, true, true);
        assert_eq!(breakdown.accommodation.amount, 399);
        assert_eq!(breakdown.flights.amount, 299);
        assert_eq!(breakdown.transport.amount, 149);
        assert_eq!(breakdown.activities.amount, 149);
    }

    #[test]
    fn test_large_budget_does_not_overflow() {
        let breakdown = BudgetBreakdown::allocate(200_000_000, true, true, true);
        assert_eq!(breakdown.accommodation.amount, 80_000_000);
        assert_eq!(breakdown.total(), 200_000_000);
    }

    #[test]
    fn test_zero_travelers_fails_validation() {
        let bad = TripRequest {
            travelers: 0,
            ..request()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.validation_messages()[0].0, "travelers");
    }

    #[test]
    fn test_plan_duration_and_daily_budget() {
        let plan = TripPlan::from_request(&request()).unwrap();
        assert_eq!(plan.duration_days, 5);
        assert_eq!(plan.daily_budget, 4000);
        assert!(plan.id.starts_with("trip-"));
    }

    #[test]
    fn test_validation_collects_all_missing_fields() {
        let request = TripRequest {
            source: String::new(),
            destination: String::new(),
            start_date: None,
            end_date: None,
            ..request()
        };
        let err = request.validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.validation_messages().len(), 4);
    }

    #[test]
    fn test_end_date_must_follow_start_date() {
        let bad = TripRequest {
            end_date: NaiveDate::from_ymd_opt(2023, 11, 25),
            ..request()
        };
        let err = bad.validate().unwrap_err();
        assert_eq!(err.validation_messages()[0].0, "endDate");
    }

    #[test]
    fn test_default_form_state() {
        let form = TripRequest::default();
        assert_eq!(form.travelers, 2);
        assert_eq!(form.budget, 2000);
        assert!(form.include_flights);
        assert!(form.include_hotels);
        assert!(!form.include_transport);
    }
}
