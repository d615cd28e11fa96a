use raahi_catalog::TripOffering;
use raahi_core::time;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result orderings offered to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    /// Cheapest first.
    Price,
    /// Earliest clock time first.
    Departure,
    /// Shortest first, by whole hours only.
    Duration,
    /// Best rated first.
    Rating,
}

/// Stable in-place reorder. Offerings with equal keys keep their relative
/// order, so repeated sorts are deterministic.
pub fn sort_trips(trips: &mut [TripOffering], key: SortKey) {
    match key {
        SortKey::Price => trips.sort_by_key(|trip| trip.price),
        SortKey::Departure => {
            trips.sort_by_key(|trip| time::minutes_of_day(&trip.departure_time).unwrap_or(0))
        }
        // Duration compares the leading hours token, so "7h 45m" and
        // "7h 05m" rank equal.
        SortKey::Duration => {
            trips.sort_by_key(|trip| time::duration_hours(&trip.duration).unwrap_or(0))
        }
        SortKey::Rating => trips.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
    }
}
