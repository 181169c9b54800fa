use std::collections::HashSet;

use crate::model::{BookingInfo, Day, RoomId};
use crate::observability;

use super::availability::{any_room_booked, room_booked};
use super::Engine;

impl Engine {
    /// True iff `room` is booked on any of `days`. An unknown room is never
    /// booked; callers get `false`, not an error.
    pub async fn is_room_booked(&self, days: &HashSet<Day>, room: RoomId) -> bool {
        let state = self.state.read().await;
        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);
        room_booked(&state.occupancy, days, room)
    }

    /// True iff at least one of `rooms` is booked on at least one of `days`.
    /// The read lock is held for the whole scan, so the answer reflects one
    /// consistent view of occupancy across all rooms checked.
    pub async fn are_any_rooms_booked(&self, days: &HashSet<Day>, rooms: &[RoomId]) -> bool {
        let state = self.state.read().await;
        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);
        any_room_booked(&state.occupancy, days, rooms)
    }

    /// Copy of one room's occupancy set, or `None` for an unknown room.
    pub async fn booked_days(&self, room: RoomId) -> Option<HashSet<Day>> {
        let state = self.state.read().await;
        state.occupancy.get(&room).cloned()
    }

    /// Copy of a live booking, or `None` if the reference is unknown.
    pub async fn get_booking(&self, booking_ref: &str) -> Option<BookingInfo> {
        let state = self.state.read().await;
        state.bookings.get(booking_ref).map(|assignments| BookingInfo {
            booking_ref: booking_ref.to_string(),
            assignments: assignments.clone(),
        })
    }

    /// Copies of all live bookings, in no particular order.
    pub async fn list_bookings(&self) -> Vec<BookingInfo> {
        let state = self.state.read().await;
        state
            .bookings
            .iter()
            .map(|(booking_ref, assignments)| BookingInfo {
                booking_ref: booking_ref.clone(),
                assignments: assignments.clone(),
            })
            .collect()
    }

    /// The construction-time room inventory, in no particular order.
    pub async fn rooms(&self) -> Vec<RoomId> {
        let state = self.state.read().await;
        state.occupancy.keys().copied().collect()
    }
}
