use crate::trip::{TripOffering, AMENITIES, BUS_TYPES};
use chrono::Duration;
use rand::seq::SliceRandom;
use rand::Rng;
use raahi_core::{time, DepartureWindow};

/// Operator brands the mock catalog draws from.
const OPERATORS: &[&str] = &[
    "Sharma Travels",
    "VRL Travels",
    "Orange Tours",
    "SRS Travels",
    "Neeta Tours",
    "Parveen Travels",
    "KPN Travels",
    "Raj National Express",
    "Zingbus",
    "IntrCity SmartBus",
];

/// Batch size bounds for one search.
const MIN_BATCH: usize = 6;
const MAX_BATCH: usize = 14;

/// Trip length bounds in whole hours.
const MIN_TRAVEL_HOURS: i64 = 4;
const MAX_TRAVEL_HOURS: i64 = 14;

/// Berth counts per layout: 2 decks x 10 rows x 2 berths for sleepers,
/// 13 rows x 3 seats for seaters.
pub const SLEEPER_CAPACITY: u32 = 40;
pub const SEATER_CAPACITY: u32 = 39;

/// Fabricate a fresh batch of offerings for a route. Degenerate inputs
/// (blank city names) are tolerated and carried through verbatim.
pub fn generate_trips<R: Rng + ?Sized>(
    source: &str,
    destination: &str,
    date: &str,
    rng: &mut R,
) -> Vec<TripOffering> {
    let count = rng.gen_range(MIN_BATCH..=MAX_BATCH);
    let mut trips = Vec::with_capacity(count);
    for index in 0..count {
        trips.push(generate_trip(index as u32 + 1, source, destination, date, rng));
    }
    tracing::debug!(
        "generated {} offerings for {} -> {} on {}",
        trips.len(),
        source,
        destination,
        date
    );
    trips
}

fn generate_trip<R: Rng + ?Sized>(
    id: u32,
    source: &str,
    destination: &str,
    date: &str,
    rng: &mut R,
) -> TripOffering {
    let operator = OPERATORS[rng.gen_range(0..OPERATORS.len())];
    let bus_type = BUS_TYPES[rng.gen_range(0..BUS_TYPES.len())];

    let (floor, ceiling) = price_band(bus_type);
    // Whole tens read like a published fare.
    let price = (rng.gen_range(floor..=ceiling) / 10) * 10;

    // One-decimal ratings between 3.0 and 5.0.
    let rating = f64::from(rng.gen_range(30..=50)) / 10.0;

    let departure =
        chrono::NaiveTime::from_hms_opt(rng.gen_range(0..24), rng.gen_range(0..4) * 15, 0)
            .unwrap_or_default();
    let travel_hours = rng.gen_range(MIN_TRAVEL_HOURS..=MAX_TRAVEL_HOURS);
    let travel_minutes = i64::from(rng.gen_range(0..4)) * 15;
    // NaiveTime addition wraps past midnight, which is exactly what an
    // overnight leg needs.
    let arrival = departure + Duration::hours(travel_hours) + Duration::minutes(travel_minutes);

    let sleeper = bus_type.contains("Sleeper");
    let total_seats = if sleeper { SLEEPER_CAPACITY } else { SEATER_CAPACITY };
    let available_seats = rng.gen_range(2..=total_seats);

    TripOffering {
        id,
        operator: operator.to_string(),
        bus_type: bus_type.to_string(),
        price,
        rating,
        departure_time: time::format_hhmm(departure),
        arrival_time: time::format_hhmm(arrival),
        source: source.to_string(),
        destination: destination.to_string(),
        date: date.to_string(),
        total_seats,
        available_seats,
        departure_window: DepartureWindow::from_time(departure),
        duration: time::format_duration(travel_hours as u32, travel_minutes as u32),
        amenities: draw_amenities(bus_type, rng),
    }
}

/// Fare bounds in rupees per coach class.
fn price_band(bus_type: &str) -> (u32, u32) {
    let premium = bus_type.contains("Volvo");
    let air_conditioned = !bus_type.starts_with("Non-AC");
    let sleeper = bus_type.contains("Sleeper");
    match (premium, air_conditioned, sleeper) {
        (true, _, true) => (1100, 2600),
        (true, _, false) => (900, 2100),
        (false, true, true) => (800, 2200),
        (false, true, false) => (500, 1500),
        (false, false, true) => (450, 1300),
        (false, false, false) => (300, 900),
    }
}

/// Random amenity subset, richer on air-conditioned coaches. Order is
/// shuffled but entries never repeat.
fn draw_amenities<R: Rng + ?Sized>(bus_type: &str, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = AMENITIES.to_vec();
    pool.shuffle(rng);
    let count = if bus_type.starts_with("Non-AC") {
        rng.gen_range(2..=4)
    } else {
        rng.gen_range(4..=pool.len())
    };
    pool.truncate(count);
    pool.into_iter().map(String::from).collect()
}
