use raahi_core::DepartureWindow;
use serde::{Deserialize, Serialize};

/// Full coach type labels the catalog offers.
pub const BUS_TYPES: &[&str] = &[
    "AC Sleeper",
    "Non-AC Sleeper",
    "AC Seater",
    "Non-AC Seater",
    "Volvo AC Seater",
    "Volvo AC Sleeper",
];

/// On-board amenity vocabulary. Filter values must come from this list.
pub const AMENITIES: &[&str] = &[
    "WiFi",
    "Charging Point",
    "Blanket",
    "Water Bottle",
    "Reading Light",
    "Snacks",
    "TV",
];

/// One bookable bus departure produced by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripOffering {
    /// Position in the generated batch, starting at 1. Only stable within
    /// one search result.
    pub id: u32,
    pub operator: String,
    pub bus_type: String,
    /// Fare per seat in whole rupees.
    pub price: u32,
    pub rating: f64,
    /// "HH:MM" clock strings.
    pub departure_time: String,
    pub arrival_time: String,
    pub source: String,
    pub destination: String,
    /// Travel date as entered, "YYYY-MM-DD".
    pub date: String,
    pub total_seats: u32,
    pub available_seats: u32,
    pub departure_window: DepartureWindow,
    /// "7h 30m" style label; overnight legs still show elapsed time.
    pub duration: String,
    pub amenities: Vec<String>,
}

impl TripOffering {
    /// Sleeper coaches get the double-deck berth layout.
    pub fn is_sleeper(&self) -> bool {
        self.bus_type.contains("Sleeper")
    }
}

/// Coarse coach groups the type filter offers ("AC", "Non-AC", "Volvo").
/// Matching stays substring based, so "AC" also hits Non-AC and Volvo AC
/// labels.
pub fn type_groups() -> Vec<&'static str> {
    let mut groups = Vec::new();
    for label in BUS_TYPES {
        let head = label.split_whitespace().next().unwrap_or(label);
        if !groups.contains(&head) {
            groups.push(head);
        }
    }
    groups
}
