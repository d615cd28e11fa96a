use crate::models::{Passenger, PassengerInput};
use raahi_catalog::Seat;
use thiserror::Error;

/// A checkout rejection. Every case maps to one corrective action on the
/// passenger form, so messages speak to the traveller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one seat to continue")]
    NoSeatsSelected,
    #[error("Please fill details for all passengers: {provided} provided for {seats} seats")]
    PassengerCountMismatch { provided: usize, seats: usize },
    #[error("Please enter a name for passenger {0}")]
    MissingName(usize),
    #[error("Please enter a valid age for passenger {index}")]
    InvalidAge { index: usize, age: u32 },
    #[error("Please select a gender for passenger {0}")]
    MissingGender(usize),
}

/// Check form entries against the selected seats and pair each traveller
/// with a seat in selection order. Passenger indexes in errors are
/// 1-based, matching what a form displays. The first failing rule wins;
/// entries are checked in order.
pub fn validate_passengers(
    inputs: &[PassengerInput],
    seats: &[Seat],
) -> Result<Vec<Passenger>, ValidationError> {
    if seats.is_empty() {
        return Err(ValidationError::NoSeatsSelected);
    }
    if inputs.len() != seats.len() {
        return Err(ValidationError::PassengerCountMismatch {
            provided: inputs.len(),
            seats: seats.len(),
        });
    }

    let mut passengers = Vec::with_capacity(inputs.len());
    for (position, (input, seat)) in inputs.iter().zip(seats).enumerate() {
        let index = position + 1;
        if input.name.trim().is_empty() {
            return Err(ValidationError::MissingName(index));
        }
        if input.age < 1 {
            return Err(ValidationError::InvalidAge {
                index,
                age: input.age,
            });
        }
        let gender = input.gender.ok_or(ValidationError::MissingGender(index))?;
        passengers.push(Passenger {
            name: input.name.clone(),
            age: input.age,
            gender,
            seat_number: seat.number.clone(),
        });
    }
    Ok(passengers)
}
