//! The listing catalog: sample datasets, derived bounds, and filtering.

pub mod bounds;
pub mod currency;
pub mod filter;
pub mod model;
pub mod samples;

pub use bounds::Bounds;
pub use filter::{
    AttractionFilter, CategorySelection, FlightFilter, HotelFilter, ItineraryFilter, ListingFilter,
};
pub use model::{
    Attraction, AttractionCategory, DayPlan, Flight, HOTEL_AMENITIES, Hotel, Itinerary,
    ListingKind, RoomOption, RoomTier,
};
pub use samples::{sample_attractions, sample_flights, sample_hotels, sample_itineraries};
