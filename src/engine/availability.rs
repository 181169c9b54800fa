use std::collections::{HashMap, HashSet};

use crate::model::{Day, RoomId};

// ── Availability predicates ──────────────────────────────────────
//
// Pure functions over a borrowed occupancy index, no locking here. The
// public read operations call them after taking the shared lock; the write
// operations call them against the exclusive guard they already hold, so the
// conflict check never re-enters the lock.

/// True iff `room` is a known room and its occupancy set contains any of
/// `days`. An unknown room is never booked.
pub fn room_booked(
    occupancy: &HashMap<RoomId, HashSet<Day>>,
    days: &HashSet<Day>,
    room: RoomId,
) -> bool {
    match occupancy.get(&room) {
        Some(booked) => days.iter().any(|day| booked.contains(day)),
        None => false,
    }
}

/// True iff at least one of `rooms` is booked on at least one of `days`.
/// Empty `rooms` is vacuously false.
pub fn any_room_booked(
    occupancy: &HashMap<RoomId, HashSet<Day>>,
    days: &HashSet<Day>,
    rooms: &[RoomId],
) -> bool {
    rooms.iter().any(|&room| room_booked(occupancy, days, room))
}
