use raahi_catalog::TripOffering;
use raahi_core::DepartureWindow;
use serde::{Deserialize, Serialize};

/// Upper bound of the default price filter, in rupees.
pub const DEFAULT_PRICE_CEILING: u32 = 5_000;

/// Active filter state. Categories combine with AND; the tag lists inside
/// a category are any-match and vacuously true when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Coach type tags matched by substring, so "AC" also hits "Non-AC"
    /// and "Volvo AC" labels.
    pub types: Vec<String>,
    /// Inclusive fare bounds.
    pub price_range: (u32, u32),
    /// Offerings rated below this floor are dropped.
    pub min_rating: f64,
    pub windows: Vec<DepartureWindow>,
    /// Required amenities; an offering must carry every one.
    pub amenities: Vec<String>,
}

impl Default for FilterSet {
    fn default() -> Self {
        FilterSet {
            types: Vec::new(),
            price_range: (0, DEFAULT_PRICE_CEILING),
            min_rating: 0.0,
            windows: Vec::new(),
            amenities: Vec::new(),
        }
    }
}

impl FilterSet {
    pub fn matches(&self, trip: &TripOffering) -> bool {
        if !self.types.is_empty()
            && !self.types.iter().any(|tag| trip.bus_type.contains(tag.as_str()))
        {
            return false;
        }
        let (floor, ceiling) = self.price_range;
        if trip.price < floor || trip.price > ceiling {
            return false;
        }
        if trip.rating < self.min_rating {
            return false;
        }
        if !self.windows.is_empty() && !self.windows.contains(&trip.departure_window) {
            return false;
        }
        if !self
            .amenities
            .iter()
            .all(|wanted| trip.amenities.iter().any(|have| have == wanted))
        {
            return false;
        }
        true
    }

    /// Narrow a batch to the offerings matching every category, keeping
    /// their order.
    pub fn apply(&self, trips: &[TripOffering]) -> Vec<TripOffering> {
        trips.iter().filter(|trip| self.matches(trip)).cloned().collect()
    }

    /// Merge a partial update. Unset fields keep their current values.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(types) = update.types {
            self.types = types;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(min_rating) = update.min_rating {
            self.min_rating = min_rating;
        }
        if let Some(windows) = update.windows {
            self.windows = windows;
        }
        if let Some(amenities) = update.amenities {
            self.amenities = amenities;
        }
    }
}

/// Partial filter change, applied over the current set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub types: Option<Vec<String>>,
    pub price_range: Option<(u32, u32)>,
    pub min_rating: Option<f64>,
    pub windows: Option<Vec<DepartureWindow>>,
    pub amenities: Option<Vec<String>>,
}
