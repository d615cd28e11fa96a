use serde::{Deserialize, Serialize};

/// Share of the base fare charged as the booking service fee.
pub const SERVICE_FEE_RATE: f64 = 0.05;

/// Checkout line items. `total` is the amount frozen into a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub base: u32,
    pub service_fee: u32,
    pub total: u32,
}

/// Price a seat selection: base sum plus the service fee rounded to the
/// nearest rupee (halves round away from zero).
pub fn quote(seat_prices: &[u32]) -> FareBreakdown {
    let base: u32 = seat_prices.iter().sum();
    let service_fee = (f64::from(base) * SERVICE_FEE_RATE).round() as u32;
    FareBreakdown {
        base,
        service_fee,
        total: base + service_fee,
    }
}
