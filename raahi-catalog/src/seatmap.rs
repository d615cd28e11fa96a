use crate::trip::TripOffering;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Booked,
    Selected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatPosition {
    Window,
    Aisle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Deck {
    Lower,
    Upper,
}

impl Deck {
    /// Prefix letter used in seat numbers.
    pub fn letter(&self) -> char {
        match self {
            Deck::Lower => 'L',
            Deck::Upper => 'U',
        }
    }
}

/// One berth or seat in a generated layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Position in generation order, starting at 1. Stable within one map.
    pub id: u32,
    /// Display label such as "L1A" or "U10B".
    pub number: String,
    pub status: SeatStatus,
    /// Per-seat fare, uniform across the coach.
    pub price: u32,
    pub position: SeatPosition,
    /// None on single-deck seater layouts.
    pub deck: Option<Deck>,
}

/// Generated layout for one offering. Maps are fabricated per selection,
/// so re-selecting the same trip yields a fresh occupancy pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatMap {
    pub trip_id: u32,
    pub rows: u32,
    pub seats_per_row: u32,
    pub double_deck: bool,
    pub seats: Vec<Seat>,
}

/// At most this share of a coach comes pre-booked.
pub const MAX_BOOKED_RATIO: f64 = 0.7;

const SLEEPER_ROWS: u32 = 10;
const SLEEPER_COLUMNS: u32 = 2;
const SEATER_ROWS: u32 = 13;
const SEATER_COLUMNS: u32 = 3;

impl SeatMap {
    /// Lay out the coach for a trip and scatter pre-booked seats across it.
    /// Sleepers get two decks of 2-across berths, seaters one deck of
    /// 3-across seats. Every seat carries the trip's per-seat price.
    pub fn generate<R: Rng + ?Sized>(trip: &TripOffering, rng: &mut R) -> SeatMap {
        let double_deck = trip.is_sleeper();
        let (rows, seats_per_row) = if double_deck {
            (SLEEPER_ROWS, SLEEPER_COLUMNS)
        } else {
            (SEATER_ROWS, SEATER_COLUMNS)
        };
        let deck_count: u32 = if double_deck { 2 } else { 1 };
        let total = rows * seats_per_row * deck_count;

        // Duplicate draws collapse in the set, so the booked share lands
        // anywhere up to the cap.
        let booked_cap = (f64::from(total) * MAX_BOOKED_RATIO) as u32;
        let draws = rng.gen_range(0..=booked_cap);
        let mut booked: HashSet<u32> = HashSet::new();
        for _ in 0..draws {
            booked.insert(rng.gen_range(1..=total));
        }

        let decks: &[Option<Deck>] = if double_deck {
            &[Some(Deck::Lower), Some(Deck::Upper)]
        } else {
            &[None]
        };

        let mut seats = Vec::with_capacity(total as usize);
        let mut id = 0;
        for deck in decks {
            for row in 1..=rows {
                for column in 1..=seats_per_row {
                    id += 1;
                    let position = if column == 1 || column == seats_per_row {
                        SeatPosition::Window
                    } else {
                        SeatPosition::Aisle
                    };
                    let status = if booked.contains(&id) {
                        SeatStatus::Booked
                    } else {
                        SeatStatus::Available
                    };
                    seats.push(Seat {
                        id,
                        number: seat_number(*deck, row, column),
                        status,
                        price: trip.price,
                        position,
                        deck: *deck,
                    });
                }
            }
        }

        tracing::debug!(
            "seat map for offering {}: {} seats, {} pre-booked",
            trip.id,
            seats.len(),
            booked.len()
        );
        SeatMap {
            trip_id: trip.id,
            rows,
            seats_per_row,
            double_deck,
            seats,
        }
    }

    pub fn seat(&self, id: u32) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.id == id)
    }

    /// Seats on one deck of a double-deck layout.
    pub fn seats_on(&self, deck: Deck) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(move |seat| seat.deck == Some(deck))
    }

    pub fn available_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|seat| seat.status == SeatStatus::Available)
            .count()
    }
}

/// Deck letter, row number, column letter. Single-deck layouts keep the
/// lower-deck prefix, so a seater seat still reads "L1A".
fn seat_number(deck: Option<Deck>, row: u32, column: u32) -> String {
    let prefix = deck.unwrap_or(Deck::Lower).letter();
    let column_letter = (b'A' + (column - 1) as u8) as char;
    format!("{}{}{}", prefix, row, column_letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{SEATER_CAPACITY, SLEEPER_CAPACITY};
    use raahi_core::DepartureWindow;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn trip_of_type(bus_type: &str, price: u32) -> TripOffering {
        TripOffering {
            id: 7,
            operator: "Orange Tours".to_string(),
            bus_type: bus_type.to_string(),
            price,
            rating: 4.1,
            departure_time: "22:00".to_string(),
            arrival_time: "06:30".to_string(),
            source: "Hyderabad".to_string(),
            destination: "Vijayawada".to_string(),
            date: "2025-03-14".to_string(),
            total_seats: if bus_type.contains("Sleeper") { 40 } else { 39 },
            available_seats: 20,
            departure_window: DepartureWindow::Night,
            duration: "8h 30m".to_string(),
            amenities: vec!["WiFi".to_string()],
        }
    }

    #[test]
    fn test_sleeper_layout_has_two_decks_of_berths() {
        let mut rng = StdRng::seed_from_u64(21);
        let map = SeatMap::generate(&trip_of_type("Non-AC Sleeper", 1000), &mut rng);
        assert!(map.double_deck);
        assert_eq!(map.rows, 10);
        assert_eq!(map.seats_per_row, 2);
        assert_eq!(map.seats.len() as u32, SLEEPER_CAPACITY);
        assert_eq!(map.seats_on(Deck::Lower).count(), 20);
        assert_eq!(map.seats_on(Deck::Upper).count(), 20);
        // Two-across berths sit against a wall on both sides.
        assert!(map.seats.iter().all(|s| s.position == SeatPosition::Window));
    }

    #[test]
    fn test_seater_layout_is_single_deck() {
        let mut rng = StdRng::seed_from_u64(22);
        let map = SeatMap::generate(&trip_of_type("AC Seater", 550), &mut rng);
        assert!(!map.double_deck);
        assert_eq!(map.rows, 13);
        assert_eq!(map.seats_per_row, 3);
        assert_eq!(map.seats.len() as u32, SEATER_CAPACITY);
        assert!(map.seats.iter().all(|s| s.deck.is_none()));
        // Middle column rides the aisle.
        for seat in &map.seats {
            let expected = if seat.number.ends_with('B') {
                SeatPosition::Aisle
            } else {
                SeatPosition::Window
            };
            assert_eq!(seat.position, expected);
        }
    }

    #[test]
    fn test_numbering_walks_decks_rows_and_columns() {
        let mut rng = StdRng::seed_from_u64(23);
        let map = SeatMap::generate(&trip_of_type("Volvo AC Sleeper", 1800), &mut rng);
        assert_eq!(map.seat(1).unwrap().number, "L1A");
        assert_eq!(map.seat(2).unwrap().number, "L1B");
        assert_eq!(map.seat(3).unwrap().number, "L2A");
        assert_eq!(map.seat(21).unwrap().number, "U1A");
        assert_eq!(map.seat(40).unwrap().number, "U10B");
        assert!(map.seat(41).is_none());
    }

    #[test]
    fn test_seater_numbering_keeps_lower_prefix() {
        let mut rng = StdRng::seed_from_u64(24);
        let map = SeatMap::generate(&trip_of_type("Non-AC Seater", 400), &mut rng);
        assert_eq!(map.seat(1).unwrap().number, "L1A");
        assert_eq!(map.seat(2).unwrap().number, "L1B");
        assert_eq!(map.seat(3).unwrap().number, "L1C");
        assert_eq!(map.seat(39).unwrap().number, "L13C");
    }

    #[test]
    fn test_every_seat_carries_the_trip_price() {
        let mut rng = StdRng::seed_from_u64(25);
        let map = SeatMap::generate(&trip_of_type("AC Sleeper", 1340), &mut rng);
        assert!(map.seats.iter().all(|s| s.price == 1340));
    }

    #[test]
    fn test_pre_booked_share_stays_under_the_cap() {
        let mut rng = StdRng::seed_from_u64(26);
        for _ in 0..40 {
            let map = SeatMap::generate(&trip_of_type("AC Seater", 600), &mut rng);
            let booked = map
                .seats
                .iter()
                .filter(|s| s.status == SeatStatus::Booked)
                .count();
            assert!(booked as f64 <= f64::from(SEATER_CAPACITY) * MAX_BOOKED_RATIO);
            assert_eq!(map.available_count(), map.seats.len() - booked);
        }
    }

    #[test]
    fn test_generation_never_marks_seats_selected() {
        let mut rng = StdRng::seed_from_u64(27);
        let map = SeatMap::generate(&trip_of_type("Volvo AC Seater", 950), &mut rng);
        assert!(map.seats.iter().all(|s| s.status != SeatStatus::Selected));
    }
}
