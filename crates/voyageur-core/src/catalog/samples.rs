//! Fixed sample datasets.
//!
//! Constructed once behind `Lazy` statics and never mutated. Every listing
//! operation in the application runs against these records.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::model::{Attraction, AttractionCategory, Flight, Hotel, Itinerary};

// Sample literals are known-good; from_ymd_opt only fails on malformed input.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

static FLIGHTS: Lazy<Vec<Flight>> = Lazy::new(|| {
    let flight = |id, airline: &str, from: &str, to: &str, dep: &str, arr: &str, dur: &str, price, d| Flight {
        id,
        airline: airline.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        departure_time: dep.to_string(),
        arrival_time: arr.to_string(),
        duration: dur.to_string(),
        price,
        date: d,
        direct: true,
    };

    vec![
        flight(1, "Air India", "Delhi (DEL)", "Mumbai (BOM)", "08:15 AM", "10:25 AM", "2h 10m", 4850, date(2023, 11, 25)),
        flight(2, "IndiGo", "Bengaluru (BLR)", "Hyderabad (HYD)", "09:30 AM", "10:45 AM", "1h 15m", 3200, date(2023, 11, 26)),
        flight(3, "Vistara", "Mumbai (BOM)", "Goa (GOI)", "11:45 AM", "01:05 PM", "1h 20m", 5100, date(2023, 11, 25)),
        flight(4, "SpiceJet", "Chennai (MAA)", "Kolkata (CCU)", "02:30 PM", "05:00 PM", "2h 30m", 6200, date(2023, 11, 27)),
        flight(5, "Air Asia", "Delhi (DEL)", "Jaipur (JAI)", "04:15 PM", "05:30 PM", "1h 15m", 2750, date(2023, 11, 28)),
        flight(6, "GoAir", "Ahmedabad (AMD)", "Pune (PNQ)", "07:00 AM", "08:45 AM", "1h 45m", 3900, date(2023, 11, 26)),
    ]
});

static HOTELS: Lazy<Vec<Hotel>> = Lazy::new(|| {
    let hotel = |id, name: &str, location: &str, price, rating| Hotel {
        id,
        name: name.to_string(),
        location: location.to_string(),
        price,
        rating,
    };

    vec![
        hotel(1, "Taj Palace", "New Delhi, India", 12500, 4.8),
        hotel(2, "Leela Palace", "Bengaluru, India", 15000, 4.9),
        hotel(3, "Oberoi Udaivilas", "Udaipur, India", 22000, 5.0),
        hotel(4, "ITC Grand Chola", "Chennai, India", 11500, 4.7),
        hotel(5, "The Ritz-Carlton", "Mumbai, India", 18000, 4.8),
        hotel(6, "JW Marriott", "Goa, India", 14500, 4.6),
    ]
});

static ATTRACTIONS: Lazy<Vec<Attraction>> = Lazy::new(|| {
    let attraction =
        |id, name: &str, location: &str, price, rating, category, description: &str| Attraction {
            id,
            name: name.to_string(),
            location: location.to_string(),
            price,
            rating,
            category,
            description: description.to_string(),
        };

    vec![
        attraction(
            1,
            "Taj Mahal",
            "Agra, India",
            1500,
            4.9,
            AttractionCategory::Historical,
            "One of the seven wonders of the world, this ivory-white marble mausoleum is a must-visit.",
        ),
        attraction(
            2,
            "Jaipur City Palace",
            "Jaipur, India",
            700,
            4.7,
            AttractionCategory::Historical,
            "A stunning blend of Rajasthani and Mughal architecture in the Pink City.",
        ),
        attraction(
            3,
            "Goa Beaches",
            "Goa, India",
            0,
            4.8,
            AttractionCategory::Natural,
            "Pristine beaches with golden sands and clear blue waters perfect for relaxation.",
        ),
        attraction(
            4,
            "Varanasi Ghats",
            "Varanasi, India",
            0,
            4.6,
            AttractionCategory::Cultural,
            "Experience the spiritual essence of India at these ancient riverside steps.",
        ),
        attraction(
            5,
            "Mysore Palace",
            "Mysore, India",
            400,
            4.7,
            AttractionCategory::Historical,
            "A magnificent royal residence known for its Indo-Saracenic style of architecture.",
        ),
        attraction(
            6,
            "Munnar Tea Gardens",
            "Kerala, India",
            350,
            4.9,
            AttractionCategory::Natural,
            "Rolling hills covered with lush green tea plantations offering breathtaking views.",
        ),
    ]
});

static ITINERARIES: Lazy<Vec<Itinerary>> = Lazy::new(|| {
    let itinerary = |id,
                     title: &str,
                     destinations: &[&str],
                     duration,
                     price,
                     description: &str,
                     highlights: &[&str]| Itinerary {
        id,
        title: title.to_string(),
        destinations: destinations.iter().map(|d| d.to_string()).collect(),
        duration,
        price,
        description: description.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    };

    vec![
        itinerary(
            1,
            "Golden Triangle Tour",
            &["Delhi", "Agra", "Jaipur"],
            7,
            25000,
            "Experience the rich history and culture of North India's most iconic cities.",
            &[
                "Visit the Taj Mahal at sunrise",
                "Explore Jaipur's majestic forts",
                "Discover Delhi's blend of old and new",
                "Authentic local cuisine experiences",
                "Cultural performances and heritage walks",
            ],
        ),
        itinerary(
            2,
            "Kerala Backwaters Retreat",
            &["Kochi", "Alleppey", "Kumarakom"],
            5,
            18500,
            "Relax and rejuvenate on a houseboat journey through Kerala's serene backwaters.",
            &[
                "Overnight stay on traditional houseboat",
                "Ayurvedic spa treatments",
                "Fresh seafood cuisine",
                "Visit to spice plantations",
                "Cultural Kathakali performances",
            ],
        ),
        itinerary(
            3,
            "Himalayan Adventure",
            &["Manali", "Leh", "Ladakh"],
            10,
            35000,
            "An epic journey through the breathtaking landscapes of the Himalayas.",
            &[
                "Cross the famous Rohtang Pass",
                "Monastery visits in Ladakh",
                "Camping under the stars",
                "River rafting adventures",
                "Local Himalayan cuisine",
            ],
        ),
        itinerary(
            4,
            "Goa Beach Holiday",
            &["North Goa", "South Goa"],
            4,
            12000,
            "Sun, sand, and relaxation on India's most famous beaches.",
            &["Beach hopping", "Water sports and activities", "Vibrant nightlife"],
        ),
        itinerary(
            5,
            "Rajasthan Heritage Tour",
            &["Udaipur", "Jodhpur", "Jaisalmer"],
            8,
            28500,
            "Discover the royal heritage and desert landscapes of Rajasthan.",
            &[
                "Lake Palace in Udaipur",
                "Blue City of Jodhpur",
                "Desert safari in Jaisalmer",
            ],
        ),
        itinerary(
            6,
            "Northeast Explorer",
            &["Gangtok", "Darjeeling", "Shillong"],
            9,
            32000,
            "Explore the less traveled paths of India's stunning northeastern states.",
            &[
                "Tea plantations in Darjeeling",
                "Living root bridges in Meghalaya",
                "Himalayan views from Gangtok",
            ],
        ),
    ]
});

/// The fixed flight dataset.
pub fn sample_flights() -> &'static [Flight] {
    &FLIGHTS
}

/// The fixed hotel dataset.
pub fn sample_hotels() -> &'static [Hotel] {
    &HOTELS
}

/// The fixed attraction dataset.
pub fn sample_attractions() -> &'static [Attraction] {
    &ATTRACTIONS
}

/// The fixed itinerary dataset.
pub fn sample_itineraries() -> &'static [Itinerary] {
    &ITINERARIES
}
