use std::collections::HashSet;

use crate::model::{Assignment, Day, RoomId};
use crate::observability;

use super::conflict::rooms_free;
use super::{Engine, EngineError};

/// One assignment per distinct room: a room repeated in the request
/// collapses to a single claim, so the booking index never lists a room
/// twice under one reference.
fn build_assignments(days: &HashSet<Day>, rooms: &[RoomId]) -> Vec<Assignment> {
    let mut seen = HashSet::with_capacity(rooms.len());
    rooms
        .iter()
        .filter(|&&room| seen.insert(room))
        .map(|&room| Assignment {
            room,
            days: days.clone(),
        })
        .collect()
}

impl Engine {
    /// Book every room in `rooms` for every day in `days` under `booking_ref`.
    ///
    /// All-or-nothing: if any room is unknown, already booked on any of the
    /// days, or `booking_ref` already names a live booking, nothing changes
    /// and the call returns `false`. Check and commit happen inside one
    /// write-lock hold, so concurrent observers never see a partial booking.
    pub async fn book_rooms(
        &self,
        booking_ref: &str,
        days: &HashSet<Day>,
        rooms: &[RoomId],
    ) -> bool {
        let mut state = self.state.write().await;

        // A live reference cannot be rebooked; update or cancel it instead.
        if state.bookings.contains_key(booking_ref) {
            metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            return false;
        }
        if !rooms_free(&state, days, rooms) {
            metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            return false;
        }

        let assignments = build_assignments(days, rooms);
        state.occupy_assignments(&assignments);
        state.bookings.insert(booking_ref.to_string(), assignments);

        metrics::counter!(observability::BOOKINGS_TOTAL).increment(1);
        true
    }

    /// Replace the booking's entire assignment set with `rooms` × `days`:
    /// every listed room ends up holding exactly `days`, and rooms the
    /// booking previously held but no longer lists are fully released.
    ///
    /// The current assignments are provisionally released before the conflict
    /// check so the update may reuse days the booking already holds; a
    /// genuine conflict with some other booking rolls the release back
    /// exactly and returns `Ok(false)`. Fails with [`EngineError::NoSuchBooking`]
    /// if `booking_ref` is unknown. One write-lock hold end to end.
    pub async fn update_booking(
        &self,
        booking_ref: &str,
        days: &HashSet<Day>,
        rooms: &[RoomId],
    ) -> Result<bool, EngineError> {
        let mut state = self.state.write().await;

        let current = match state.bookings.get(booking_ref) {
            Some(assignments) => assignments.clone(),
            None => return Err(EngineError::NoSuchBooking(booking_ref.to_string())),
        };

        state.release_assignments(&current);

        if !rooms_free(&state, days, rooms) {
            // Conflict with another booking: restore the original claims.
            state.occupy_assignments(&current);
            metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            return Ok(false);
        }

        let assignments = build_assignments(days, rooms);
        state.occupy_assignments(&assignments);
        state.bookings.insert(booking_ref.to_string(), assignments);

        metrics::counter!(observability::UPDATES_TOTAL).increment(1);
        Ok(true)
    }

    /// Remove the booking and release every day it held. The reference is
    /// free for reuse afterwards. Fails with [`EngineError::NoSuchBooking`]
    /// if `booking_ref` is unknown.
    pub async fn cancel_booking(&self, booking_ref: &str) -> Result<(), EngineError> {
        let mut state = self.state.write().await;

        let assignments = state
            .bookings
            .remove(booking_ref)
            .ok_or_else(|| EngineError::NoSuchBooking(booking_ref.to_string()))?;
        state.release_assignments(&assignments);

        metrics::counter!(observability::CANCELLATIONS_TOTAL).increment(1);
        Ok(())
    }
}
