pub mod fare;
pub mod generator;
pub mod seatmap;
pub mod trip;

pub use fare::{quote, FareBreakdown, SERVICE_FEE_RATE};
pub use generator::generate_trips;
pub use raahi_core::DepartureWindow;
pub use seatmap::{Deck, Seat, SeatMap, SeatPosition, SeatStatus};
pub use trip::TripOffering;
