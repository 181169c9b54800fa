mod availability;
mod conflict;
mod error;
mod mutations;
mod queries;

pub use availability::{any_room_booked, room_booked};
pub use error::EngineError;

use tokio::sync::RwLock;

use crate::model::{HotelState, RoomId};

/// The booking engine.
///
/// One `RwLock` guards the occupancy index and the booking index together, so
/// no reader ever observes the two out of sync. Read operations hold the
/// shared lock for their whole scan; write operations do all checking and all
/// mutation inside a single exclusive-lock hold.
///
/// Conflict checks inside write operations reuse the pure predicates in
/// [`availability`] against the guard they already hold, so there is never a
/// second lock acquisition on the same call path.
pub struct Engine {
    state: RwLock<HotelState>,
}

impl Engine {
    /// Construct an engine for the given room inventory. Duplicate room ids
    /// collapse; no bookings exist initially. The inventory never changes
    /// for the engine's lifetime.
    pub fn new(rooms: impl IntoIterator<Item = RoomId>) -> Self {
        Self {
            state: RwLock::new(HotelState::new(rooms)),
        }
    }
}
