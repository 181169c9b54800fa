use crate::model::BookingRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Update or cancel named a reference with no live booking.
    NoSuchBooking(BookingRef),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NoSuchBooking(booking_ref) => {
                write!(f, "there is no booking with reference {booking_ref}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
