//! Booking domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{ListingKind, RoomTier};
use crate::error::{Result, VoyageurError};

/// A booking form as filled in by the user, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub kind: ListingKind,
    pub listing_id: u32,
    /// Display name of the booked listing (hotel name, airline, tour title).
    pub listing_name: String,
    /// Unit price in whole rupees (nightly rate for hotels, fare otherwise).
    pub unit_price: u32,
    /// Check-in date for stays, travel/start date otherwise.
    pub check_in: Option<NaiveDate>,
    /// Check-out date; only meaningful for hotel stays.
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    /// Chosen room tier; only meaningful for hotel stays.
    pub room_tier: Option<RoomTier>,
}

impl BookingRequest {
    /// Validates the request, reporting every failing field at once.
    ///
    /// Hotel stays need both dates in order; other listing kinds only need
    /// the travel date. A failed validation must cause no side effect.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        match self.kind {
            ListingKind::Hotel => {
                if self.check_in.is_none() {
                    errors.push(VoyageurError::validation(
                        "checkIn",
                        "Check-in date is required",
                    ));
                }
                if self.check_out.is_none() {
                    errors.push(VoyageurError::validation(
                        "checkOut",
                        "Check-out date is required",
                    ));
                }
                if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
                    if check_out <= check_in {
                        errors.push(VoyageurError::validation(
                            "checkOut",
                            "Check-out date must be after check-in date",
                        ));
                    }
                }
            }
            ListingKind::Flight | ListingKind::Attraction | ListingKind::Itinerary => {
                if self.check_in.is_none() {
                    errors.push(VoyageurError::validation(
                        "checkIn",
                        "Travel date is required",
                    ));
                }
            }
        }

        if self.guests == 0 {
            errors.push(VoyageurError::validation(
                "guests",
                "At least one guest is required",
            ));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(VoyageurError::Multiple(errors)),
        }
    }
}

/// A confirmed booking: a derived copy of the listing plus a generated id
/// and creation timestamp. Never mutated or removed once persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Generated identifier of the form `BK<random integer>`.
    pub id: String,
    pub kind: ListingKind,
    pub listing_id: u32,
    pub listing_name: String,
    pub unit_price: u32,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub room_tier: Option<RoomTier>,
    /// RFC 3339 creation timestamp.
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    /// Builds a booking from a request that already passed validation.
    pub fn from_request(request: &BookingRequest) -> Self {
        Self {
            id: generate_booking_id(),
            kind: request.kind,
            listing_id: request.listing_id,
            listing_name: request.listing_name.clone(),
            unit_price: request.unit_price,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            room_tier: request.room_tier,
            booked_at: Utc::now(),
        }
    }
}

fn generate_booking_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("BK{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel_request() -> BookingRequest {
        BookingRequest {
            kind: ListingKind::Hotel,
            listing_id: 1,
            listing_name: "Taj Palace".to_string(),
            unit_price: 12500,
            check_in: NaiveDate::from_ymd_opt(2023, 11, 25),
            check_out: NaiveDate::from_ymd_opt(2023, 11, 27),
            guests: 2,
            room_tier: Some(RoomTier::Deluxe),
        }
    }

    #[test]
    fn test_valid_hotel_request() {
        assert!(hotel_request().validate().is_ok());
    }

    #[test]
    fn test_missing_check_in_fails() {
        let request = BookingRequest {
            check_in: None,
            ..hotel_request()
        };
        let err = request.validate().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.validation_messages()[0].0, "checkIn");
    }

    #[test]
    fn test_missing_both_dates_reports_both_fields() {
        let request = BookingRequest {
            check_in: None,
            check_out: None,
            ..hotel_request()
        };
        let err = request.validate().unwrap_err();
        let fields: Vec<String> = err
            .validation_messages()
            .into_iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(fields, vec!["checkIn", "checkOut"]);
    }

    #[test]
    fn test_check_out_must_follow_check_in() {
        let request = BookingRequest {
            check_out: NaiveDate::from_ymd_opt(2023, 11, 25),
            ..hotel_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_flight_needs_only_travel_date() {
        let request = BookingRequest {
            kind: ListingKind::Flight,
            listing_name: "Air India".to_string(),
            unit_price: 4850,
            check_out: None,
            room_tier: None,
            ..hotel_request()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_booking_id_format() {
        let booking = Booking::from_request(&hotel_request());
        assert!(booking.id.starts_with("BK"));
        assert!(booking.id[2..].chars().all(|c| c.is_ascii_digit()));
    }
}
