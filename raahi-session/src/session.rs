use crate::checkout::{self, ValidationError};
use crate::ledger::BookingLedger;
use crate::models::{
    Booking, BookingStatus, PassengerInput, SearchParams, SearchParamsUpdate,
};
use raahi_catalog::{fare, generator, FareBreakdown, Seat, SeatMap, SeatStatus, TripOffering};
use raahi_search::{FilterSet, FilterUpdate, SortKey};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a session sits in the search, select, seat, book flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionPhase {
    Idle,
    Searched,
    TripSelected,
    SeatsSelected,
    Booked,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Search needs a source, a destination and a travel date")]
    IncompleteSearch,
    #[error("{operation} is not allowed in the {phase:?} phase")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },
    #[error("Offering {0} is not in the current results")]
    UnknownTrip(u32),
    #[error("Seat {0} is not in the current seat map")]
    UnknownSeat(u32),
    #[error("Seat {0} is already selected")]
    SeatAlreadySelected(String),
    #[error("Booking {0} not found")]
    BookingNotFound(String),
    #[error("Booking {id} is {status} and cannot be cancelled")]
    CancelNotAllowed { id: String, status: BookingStatus },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Single source of truth for one user's search-and-booking session.
/// Owns its randomness, so tests can seed it through `with_rng` and
/// replay the exact same catalog.
pub struct Session {
    params: SearchParams,
    filters: FilterSet,
    trips: Vec<TripOffering>,
    selected_trip: Option<TripOffering>,
    seat_map: Option<SeatMap>,
    selected_seats: Vec<Seat>,
    ledger: BookingLedger,
    phase: SessionPhase,
    rng: Box<dyn RngCore>,
}

impl Session {
    /// Entropy-seeded session.
    pub fn new() -> Self {
        Session::with_rng(StdRng::from_entropy())
    }

    /// Session with injected randomness.
    pub fn with_rng<R: RngCore + 'static>(rng: R) -> Self {
        Session {
            params: SearchParams::default(),
            filters: FilterSet::default(),
            trips: Vec::new(),
            selected_trip: None,
            seat_map: None,
            selected_seats: Vec::new(),
            ledger: BookingLedger::new(),
            phase: SessionPhase::Idle,
            rng: Box::new(rng),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Current result list, post-filter.
    pub fn trips(&self) -> &[TripOffering] {
        &self.trips
    }

    pub fn selected_trip(&self) -> Option<&TripOffering> {
        self.selected_trip.as_ref()
    }

    pub fn seat_map(&self) -> Option<&SeatMap> {
        self.seat_map.as_ref()
    }

    /// Seats picked so far, in selection order.
    pub fn selected_seats(&self) -> &[Seat] {
        &self.selected_seats
    }

    pub fn bookings(&self) -> &[Booking] {
        self.ledger.all()
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.ledger.find(id)
    }

    /// Stage a route change. Takes effect on the next search; the current
    /// result list is left alone.
    pub fn set_search_params(&mut self, update: SearchParamsUpdate) {
        self.params.merge(update);
    }

    /// Stage a filter change. Applied on the next search, not to the
    /// results already on screen.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.filters.merge(update);
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterSet::default();
    }

    /// Fabricate a fresh batch for the current params and narrow it with
    /// the current filters. Any in-progress selection is dropped.
    pub fn search_trips(&mut self) -> Result<&[TripOffering], SessionError> {
        if !self.params.is_complete() {
            return Err(SessionError::IncompleteSearch);
        }
        let batch = generator::generate_trips(
            &self.params.source,
            &self.params.destination,
            &self.params.date,
            &mut *self.rng,
        );
        let generated = batch.len();
        self.trips = self.filters.apply(&batch);
        self.selected_trip = None;
        self.seat_map = None;
        self.selected_seats.clear();
        self.phase = SessionPhase::Searched;
        tracing::info!(
            "search {} -> {} on {}: {} of {} offerings match filters",
            self.params.source,
            self.params.destination,
            self.params.date,
            self.trips.len(),
            generated
        );
        Ok(&self.trips)
    }

    /// Stable reorder of the current results.
    pub fn sort_trips(&mut self, key: SortKey) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Idle {
            return Err(SessionError::InvalidPhase {
                operation: "sort_trips",
                phase: self.phase,
            });
        }
        raahi_search::sort_trips(&mut self.trips, key);
        Ok(())
    }

    /// Pick an offering from the current results. A fresh seat map is
    /// generated and any previously selected seats are dropped, so
    /// switching offerings can never mix seats across coaches.
    pub fn select_trip(&mut self, trip_id: u32) -> Result<&SeatMap, SessionError> {
        if self.phase == SessionPhase::Idle {
            return Err(SessionError::InvalidPhase {
                operation: "select_trip",
                phase: self.phase,
            });
        }
        let trip = self
            .trips
            .iter()
            .find(|trip| trip.id == trip_id)
            .cloned()
            .ok_or(SessionError::UnknownTrip(trip_id))?;
        let map = SeatMap::generate(&trip, &mut *self.rng);
        tracing::debug!(
            "selected offering {} ({}, {}), {} seats open",
            trip.id,
            trip.operator,
            trip.bus_type,
            map.available_count()
        );
        self.selected_trip = Some(trip);
        self.selected_seats.clear();
        self.phase = SessionPhase::TripSelected;
        Ok(self.seat_map.insert(map))
    }

    /// Add a seat from the current map to the selection. Picking the same
    /// seat twice is rejected. Booked seats are not rejected here; keeping
    /// them un-offerable is the presenting layer's concern.
    pub fn select_seat(&mut self, seat_id: u32) -> Result<(), SessionError> {
        if !matches!(
            self.phase,
            SessionPhase::TripSelected | SessionPhase::SeatsSelected
        ) {
            return Err(SessionError::InvalidPhase {
                operation: "select_seat",
                phase: self.phase,
            });
        }
        let Some(map) = self.seat_map.as_ref() else {
            return Err(SessionError::InvalidPhase {
                operation: "select_seat",
                phase: self.phase,
            });
        };
        let seat = map
            .seat(seat_id)
            .ok_or(SessionError::UnknownSeat(seat_id))?;
        if self.selected_seats.iter().any(|s| s.id == seat_id) {
            return Err(SessionError::SeatAlreadySelected(seat.number.clone()));
        }
        let mut chosen = seat.clone();
        chosen.status = SeatStatus::Selected;
        self.selected_seats.push(chosen);
        self.phase = SessionPhase::SeatsSelected;
        Ok(())
    }

    /// Drop a seat from the selection. Unknown ids are ignored; an
    /// emptied selection falls back to the trip-selected phase.
    pub fn deselect_seat(&mut self, seat_id: u32) {
        self.selected_seats.retain(|seat| seat.id != seat_id);
        if self.selected_seats.is_empty() && self.phase == SessionPhase::SeatsSelected {
            self.phase = SessionPhase::TripSelected;
        }
    }

    /// Base fare plus service fee for the current selection. Zero when
    /// nothing is selected.
    pub fn fare_breakdown(&self) -> FareBreakdown {
        let prices: Vec<u32> = self.selected_seats.iter().map(|seat| seat.price).collect();
        fare::quote(&prices)
    }

    pub fn total_fare(&self) -> u32 {
        self.fare_breakdown().total
    }

    /// Validate passenger details, freeze the fare and append a confirmed
    /// booking to the ledger. The returned booking is the caller's copy;
    /// selection state is cleared on success.
    pub fn create_booking(
        &mut self,
        inputs: &[PassengerInput],
    ) -> Result<Booking, SessionError> {
        if self.phase != SessionPhase::SeatsSelected {
            return Err(SessionError::InvalidPhase {
                operation: "create_booking",
                phase: self.phase,
            });
        }
        let Some(trip) = self.selected_trip.as_ref() else {
            return Err(SessionError::InvalidPhase {
                operation: "create_booking",
                phase: self.phase,
            });
        };
        let passengers = checkout::validate_passengers(inputs, &self.selected_seats)?;
        let seats: Vec<String> = self
            .selected_seats
            .iter()
            .map(|seat| seat.number.clone())
            .collect();
        let total = self.fare_breakdown().total;
        let booking = Booking::new(trip, seats, passengers, total);
        tracing::info!(
            "booking {} confirmed: {} {} -> {}, {} seats, fare {}",
            booking.id,
            booking.date,
            booking.source,
            booking.destination,
            booking.seats.len(),
            booking.total_fare
        );
        self.ledger.append(booking.clone());
        self.selected_trip = None;
        self.seat_map = None;
        self.selected_seats.clear();
        self.phase = SessionPhase::Booked;
        Ok(booking)
    }

    /// Flip a confirmed booking to cancelled. Nothing else about the
    /// record changes, so the history keeps its fare and passengers.
    pub fn cancel_booking(&mut self, id: &str) -> Result<(), SessionError> {
        let Some(booking) = self.ledger.find_mut(id) else {
            tracing::warn!("cancel requested for unknown booking {}", id);
            return Err(SessionError::BookingNotFound(id.to_string()));
        };
        if booking.status != BookingStatus::Confirmed {
            return Err(SessionError::CancelNotAllowed {
                id: id.to_string(),
                status: booking.status,
            });
        }
        booking.status = BookingStatus::Cancelled;
        tracing::info!("booking {} cancelled", id);
        Ok(())
    }

    /// Drop the selected trip, its seat map and the picked seats. Results
    /// and the booking ledger stay.
    pub fn reset_selection(&mut self) {
        self.selected_trip = None;
        self.seat_map = None;
        self.selected_seats.clear();
        self.phase = if self.trips.is_empty() {
            SessionPhase::Idle
        } else {
            SessionPhase::Searched
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
