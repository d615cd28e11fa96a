use chrono::{DateTime, Utc};
use raahi_catalog::TripOffering;
use serde::{Deserialize, Serialize};

/// Route query driving catalog generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub source: String,
    pub destination: String,
    /// Travel date, "YYYY-MM-DD".
    pub date: String,
    /// Traveller count. Informational only; seat selection is not bounded
    /// by it.
    pub passengers: u32,
}

impl Default for SearchParams {
    /// Blank route for today's date, one traveller.
    fn default() -> Self {
        SearchParams {
            source: String::new(),
            destination: String::new(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            passengers: 1,
        }
    }
}

impl SearchParams {
    /// A search needs both endpoints and a date.
    pub fn is_complete(&self) -> bool {
        !self.source.trim().is_empty()
            && !self.destination.trim().is_empty()
            && !self.date.trim().is_empty()
    }

    /// Merge a partial update. Unset fields keep their current values.
    pub fn merge(&mut self, update: SearchParamsUpdate) {
        if let Some(source) = update.source {
            self.source = source;
        }
        if let Some(destination) = update.destination {
            self.destination = destination;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(passengers) = update.passengers {
            self.passengers = passengers;
        }
    }
}

/// Partial params change, applied over the current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParamsUpdate {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub passengers: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Raw checkout form entry. `checkout::validate_passengers` turns these
/// into `Passenger` records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerInput {
    pub name: String,
    pub age: u32,
    pub gender: Option<Gender>,
}

/// A validated traveller paired with one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub seat_number: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        };
        f.write_str(label)
    }
}

/// Record of one completed checkout. Trip details are copied in at
/// creation, so later searches never disturb past bookings. Only
/// `status` changes afterwards, via cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// "BK" plus the trailing eight digits of the millisecond clock.
    /// Locally distinct, not globally unique.
    pub id: String,
    pub trip_id: u32,
    pub operator: String,
    pub bus_type: String,
    pub source: String,
    pub destination: String,
    pub date: String,
    pub departure_time: String,
    pub arrival_time: String,
    /// Seat numbers in selection order, aligned with `passengers`.
    pub seats: Vec<String>,
    pub passengers: Vec<Passenger>,
    /// Base fare plus service fee, frozen at checkout.
    pub total_fare: u32,
    pub created_at: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// Snapshot a confirmed booking from the selected trip.
    pub fn new(
        trip: &TripOffering,
        seats: Vec<String>,
        passengers: Vec<Passenger>,
        total_fare: u32,
    ) -> Self {
        Booking {
            id: mint_booking_id(),
            trip_id: trip.id,
            operator: trip.operator.clone(),
            bus_type: trip.bus_type.clone(),
            source: trip.source.clone(),
            destination: trip.destination.clone(),
            date: trip.date.clone(),
            departure_time: trip.departure_time.clone(),
            arrival_time: trip.arrival_time.clone(),
            seats,
            passengers,
            total_fare,
            created_at: Utc::now(),
            status: BookingStatus::Confirmed,
        }
    }
}

fn mint_booking_id() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(8)..];
    format!("BK{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_cover_today_for_one_traveller() {
        // The default reads the clock itself, so accept either side of a
        // midnight tick.
        let before = Utc::now().format("%Y-%m-%d").to_string();
        let params = SearchParams::default();
        let after = Utc::now().format("%Y-%m-%d").to_string();
        assert!(params.source.is_empty());
        assert!(params.destination.is_empty());
        assert_eq!(params.passengers, 1);
        assert_eq!(params.date.len(), 10);
        assert!(params.date == before || params.date == after);
        assert!(!params.is_complete());
    }

    #[test]
    fn test_params_complete_once_route_is_set() {
        let mut params = SearchParams::default();
        params.merge(SearchParamsUpdate {
            source: Some("Mumbai".to_string()),
            destination: Some("Pune".to_string()),
            ..SearchParamsUpdate::default()
        });
        assert!(params.is_complete());
        assert_eq!(params.passengers, 1);
    }

    #[test]
    fn test_whitespace_route_is_incomplete() {
        let mut params = SearchParams::default();
        params.source = "  ".to_string();
        params.destination = "Pune".to_string();
        assert!(!params.is_complete());
    }

    #[test]
    fn test_booking_ids_use_clock_tail() {
        let id = mint_booking_id();
        assert!(id.starts_with("BK"));
        assert_eq!(id.len(), 10);
        assert!(id[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_status_serializes_screaming() {
        let value = serde_json::to_value(BookingStatus::Confirmed).unwrap();
        assert_eq!(value, serde_json::json!("CONFIRMED"));
        assert_eq!(BookingStatus::Cancelled.to_string(), "CANCELLED");
    }
}
