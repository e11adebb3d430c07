//! Listing domain models.
//!
//! Each listing type is an immutable value constructed once as sample data
//! and read-only for the rest of the session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which kind of listing a derived record (e.g. a booking) refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingKind {
    Flight,
    Hotel,
    Attraction,
    Itinerary,
}

/// A bookable flight between two cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: u32,
    pub airline: String,
    /// Origin in "City (IATA)" form, e.g. "Delhi (DEL)".
    pub from: String,
    /// Destination in "City (IATA)" form.
    pub to: String,
    pub departure_time: String,
    pub arrival_time: String,
    /// Display label such as "2h 10m".
    pub duration: String,
    /// Fare in whole rupees.
    pub price: u32,
    pub date: NaiveDate,
    pub direct: bool,
}

/// Room tiers offered by every hotel in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomTier {
    Standard,
    Deluxe,
    Suite,
}

impl RoomTier {
    /// Display name of the tier.
    pub fn name(&self) -> &'static str {
        match self {
            RoomTier::Standard => "Standard Room",
            RoomTier::Deluxe => "Deluxe Room",
            RoomTier::Suite => "Executive Suite",
        }
    }
}

/// A room choice derived from a hotel's nightly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOption {
    pub tier: RoomTier,
    /// Nightly price in whole rupees.
    pub price: u32,
    /// Maximum number of guests.
    pub capacity: u32,
}

impl RoomOption {
    /// The rate as rendered in the detail view, e.g. `₹12,500/night`.
    pub fn nightly_rate_label(&self) -> String {
        format!("{}/night", super::currency::format_inr(self.price))
    }
}

/// Amenities shared by every hotel in the catalog.
pub const HOTEL_AMENITIES: [&str; 8] = [
    "Free WiFi",
    "Restaurant",
    "Parking",
    "Swimming Pool",
    "Fitness Center",
    "Air Conditioning",
    "TV",
    "Room Service",
];

/// A hotel listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    /// Location in "City, Country" form.
    pub location: String,
    /// Nightly rate for the Deluxe tier, in whole rupees.
    pub price: u32,
    pub rating: f32,
}

impl Hotel {
    /// Returns the room tiers derived from the nightly rate: Standard at
    /// 80%, Deluxe at 100% and the Executive Suite at 150%.
    pub fn room_options(&self) -> Vec<RoomOption> {
        vec![
            RoomOption {
                tier: RoomTier::Standard,
                price: self.price * 4 / 5,
                capacity: 2,
            },
            RoomOption {
                tier: RoomTier::Deluxe,
                price: self.price,
                capacity: 2,
            },
            RoomOption {
                tier: RoomTier::Suite,
                price: self.price * 3 / 2,
                capacity: 4,
            },
        ]
    }

    /// Finds the room option for a given tier.
    pub fn room_option(&self, tier: RoomTier) -> RoomOption {
        // room_options always contains every tier
        self.room_options()
            .into_iter()
            .find(|r| r.tier == tier)
            .unwrap_or(RoomOption {
                tier: RoomTier::Deluxe,
                price: self.price,
                capacity: 2,
            })
    }

    /// Detail-view blurb derived from the hotel's name and city.
    pub fn detail_description(&self) -> String {
        let city = self.location.split(',').next().unwrap_or(&self.location);
        format!(
            "Experience luxury and comfort at {}, located in the heart of {}. \
             Our hotel offers stunning views, exceptional service, and \
             world-class amenities to make your stay memorable.",
            self.name, city
        )
    }
}

/// Attraction categories present in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttractionCategory {
    Historical,
    Natural,
    Cultural,
}

impl std::fmt::Display for AttractionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AttractionCategory::Historical => "Historical",
            AttractionCategory::Natural => "Natural",
            AttractionCategory::Cultural => "Cultural",
        };
        write!(f, "{}", label)
    }
}

/// A point of interest with an entry fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Entry fee in whole rupees; 0 means free entry.
    pub price: u32,
    pub rating: f32,
    pub category: AttractionCategory,
    pub description: String,
}

impl Attraction {
    /// Distinct categories over a dataset, in first-seen order.
    ///
    /// The "All" sentinel lives at the filter level, not here.
    pub fn distinct_categories(attractions: &[Attraction]) -> Vec<AttractionCategory> {
        let mut seen = Vec::new();
        for attraction in attractions {
            if !seen.contains(&attraction.category) {
                seen.push(attraction.category);
            }
        }
        seen
    }
}

/// One generated day of an itinerary's day-by-day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub description: String,
}

/// A packaged multi-day tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: u32,
    pub title: String,
    pub destinations: Vec<String>,
    /// Length of the tour in days.
    pub duration: u32,
    /// Per-person price in whole rupees.
    pub price: u32,
    pub description: String,
    pub highlights: Vec<String>,
}

impl Itinerary {
    /// Generates a day-by-day plan of `duration` entries, cycling through
    /// the destination list.
    pub fn day_plan(&self) -> Vec<DayPlan> {
        if self.destinations.is_empty() {
            return Vec::new();
        }
        (0..self.duration)
            .map(|i| {
                let destination = &self.destinations[i as usize % self.destinations.len()];
                DayPlan {
                    day: i + 1,
                    title: format!("Day {}: {}", i + 1, destination),
                    description: format!(
                        "Explore the beautiful sights of {} with guided tours \
                         and authentic experiences.",
                        destination
                    ),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> Hotel {
        Hotel {
            id: 1,
            name: "Taj Palace".to_string(),
            location: "New Delhi, India".to_string(),
            price: 12500,
            rating: 4.8,
        }
    }

    #[test]
    fn test_room_options_derive_from_nightly_rate() {
        let rooms = hotel().room_options();
        assert_eq!(rooms.len(), 3);
        assert_eq!(rooms[0].price, 10000);
        assert_eq!(rooms[1].price, 12500);
        assert_eq!(rooms[2].price, 18750);
        assert_eq!(rooms[2].capacity, 4);
        assert_eq!(rooms[0].nightly_rate_label(), "₹10,000/night");
    }

    #[test]
    fn test_detail_description_uses_city_only() {
        let description = hotel().detail_description();
        assert!(description.contains("Taj Palace"));
        assert!(description.contains("heart of New Delhi"));
        assert!(!description.contains("heart of New Delhi, India"));
    }

    #[test]
    fn test_day_plan_cycles_destinations() {
        let itinerary = Itinerary {
            id: 1,
            title: "Golden Triangle Tour".to_string(),
            destinations: vec![
                "Delhi".to_string(),
                "Agra".to_string(),
                "Jaipur".to_string(),
            ],
            duration: 7,
            price: 25000,
            description: String::new(),
            highlights: vec![],
        };

        let plan = itinerary.day_plan();
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].title, "Day 1: Delhi");
        assert_eq!(plan[3].title, "Day 4: Delhi");
        assert_eq!(plan[6].title, "Day 7: Delhi");
    }

    #[test]
    fn test_day_plan_with_no_destinations_is_empty() {
        let itinerary = Itinerary {
            id: 2,
            title: String::new(),
            destinations: vec![],
            duration: 5,
            price: 0,
            description: String::new(),
            highlights: vec![],
        };
        assert!(itinerary.day_plan().is_empty());
    }

    #[test]
    fn test_distinct_categories_preserve_first_seen_order() {
        let make = |id, category| Attraction {
            id,
            name: String::new(),
            location: String::new(),
            price: 0,
            rating: 4.5,
            category,
            description: String::new(),
        };
        let attractions = vec![
            make(1, AttractionCategory::Historical),
            make(2, AttractionCategory::Historical),
            make(3, AttractionCategory::Natural),
            make(4, AttractionCategory::Cultural),
            make(5, AttractionCategory::Natural),
        ];

        let categories = Attraction::distinct_categories(&attractions);
        assert_eq!(
            categories,
            vec![
                AttractionCategory::Historical,
                AttractionCategory::Natural,
                AttractionCategory::Cultural,
            ]
        );
    }
}
