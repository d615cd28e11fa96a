use crate::models::Booking;

/// Append-only record of the session's checkouts, oldest first.
#[derive(Debug, Default)]
pub struct BookingLedger {
    entries: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        BookingLedger {
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, booking: Booking) {
        self.entries.push(booking);
    }

    pub fn all(&self) -> &[Booking] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&Booking> {
        self.entries.iter().find(|booking| booking.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Booking> {
        self.entries.iter_mut().find(|booking| booking.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
