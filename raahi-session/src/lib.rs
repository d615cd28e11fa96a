pub mod checkout;
pub mod ledger;
pub mod models;
pub mod session;

pub use checkout::ValidationError;
pub use ledger::BookingLedger;
pub use models::{
    Booking, BookingStatus, Gender, Passenger, PassengerInput, SearchParams, SearchParamsUpdate,
};
pub use session::{Session, SessionError, SessionPhase};
