use std::collections::{HashMap, HashSet};

/// Room number. The inventory is fixed at construction.
pub type RoomId = u32;

/// Opaque day index. The engine only ever compares days for equality;
/// there is no calendar semantics attached.
pub type Day = i64;

/// Caller-chosen booking reference.
pub type BookingRef = String;

/// One room held by a booking, with the days it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub room: RoomId,
    pub days: HashSet<Day>,
}

/// Snapshot of a live booking handed out by the query API. Always a copy;
/// callers never receive references into the engine's guarded state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingInfo {
    pub booking_ref: BookingRef,
    pub assignments: Vec<Assignment>,
}

/// Everything behind the engine's lock: the occupancy index (room → days
/// booked by any reference) and the booking index (reference → assignments).
///
/// The two indexes must agree whenever the lock is not held for writing:
/// a day sits in a room's occupancy set iff some live booking assigns that
/// room that day.
#[derive(Debug)]
pub struct HotelState {
    /// Keys are the construction-time room set and never change.
    pub occupancy: HashMap<RoomId, HashSet<Day>>,
    pub bookings: HashMap<BookingRef, Vec<Assignment>>,
}

impl HotelState {
    /// Build the state for the given inventory. Duplicate room ids collapse
    /// to one entry; every room starts unbooked.
    pub fn new(rooms: impl IntoIterator<Item = RoomId>) -> Self {
        let occupancy = rooms.into_iter().map(|r| (r, HashSet::new())).collect();
        Self {
            occupancy,
            bookings: HashMap::new(),
        }
    }

    pub fn is_known_room(&self, room: RoomId) -> bool {
        self.occupancy.contains_key(&room)
    }

    /// Union `days` into a room's occupancy set. Unknown rooms are ignored;
    /// mutations only reach here after the conflict check has verified every
    /// room exists.
    pub fn occupy(&mut self, room: RoomId, days: &HashSet<Day>) {
        if let Some(booked) = self.occupancy.get_mut(&room) {
            booked.extend(days.iter().copied());
        }
    }

    /// Re-apply a set of assignments to the occupancy index. Used both to
    /// commit a booking and to roll back a provisional release.
    pub fn occupy_assignments(&mut self, assignments: &[Assignment]) {
        for a in assignments {
            self.occupy(a.room, &a.days);
        }
    }

    /// Remove every day the assignments hold from the occupancy index.
    pub fn release_assignments(&mut self, assignments: &[Assignment]) {
        for a in assignments {
            if let Some(booked) = self.occupancy.get_mut(&a.room) {
                for day in &a.days {
                    booked.remove(day);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(ds: &[Day]) -> HashSet<Day> {
        ds.iter().copied().collect()
    }

    #[test]
    fn new_state_collapses_duplicate_rooms() {
        let state = HotelState::new([101, 102, 101, 102, 103]);
        assert_eq!(state.occupancy.len(), 3);
        assert!(state.is_known_room(101));
        assert!(!state.is_known_room(104));
    }

    #[test]
    fn occupy_unions_days() {
        let mut state = HotelState::new([101]);
        state.occupy(101, &days(&[1, 2]));
        state.occupy(101, &days(&[2, 3]));
        assert_eq!(state.occupancy[&101], days(&[1, 2, 3]));
    }

    #[test]
    fn occupy_unknown_room_is_ignored() {
        let mut state = HotelState::new([101]);
        state.occupy(999, &days(&[1]));
        assert_eq!(state.occupancy.len(), 1);
        assert!(state.occupancy[&101].is_empty());
    }

    #[test]
    fn release_removes_only_assigned_days() {
        let mut state = HotelState::new([101]);
        state.occupy(101, &days(&[1, 2, 3]));
        state.release_assignments(&[Assignment {
            room: 101,
            days: days(&[2, 3]),
        }]);
        assert_eq!(state.occupancy[&101], days(&[1]));
    }

    #[test]
    fn release_then_reapply_restores_exactly() {
        let mut state = HotelState::new([101, 102]);
        let assignments = vec![
            Assignment {
                room: 101,
                days: days(&[1, 2]),
            },
            Assignment {
                room: 102,
                days: days(&[1, 2]),
            },
        ];
        state.occupy_assignments(&assignments);
        let before = state.occupancy.clone();

        state.release_assignments(&assignments);
        assert!(state.occupancy[&101].is_empty());
        state.occupy_assignments(&assignments);
        assert_eq!(state.occupancy, before);
    }
}
