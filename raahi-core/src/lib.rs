pub mod cities;
pub mod time;

pub use time::{DepartureWindow, TimeError};
