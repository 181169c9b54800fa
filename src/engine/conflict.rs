use std::collections::HashSet;

use crate::model::{Day, HotelState, RoomId};

use super::availability::room_booked;

/// Pre-commit check for the write operations: every requested room must be a
/// known room and must be free on every requested day. Called with the write
/// guard held; on `false` the caller makes no changes.
pub(crate) fn rooms_free(state: &HotelState, days: &HashSet<Day>, rooms: &[RoomId]) -> bool {
    rooms
        .iter()
        .all(|&room| state.is_known_room(room) && !room_booked(&state.occupancy, days, room))
}
