use thiserror::Error;
use tracing::debug;

use super::layout::{FloorLayout, LayoutError, RoomNumber};
use super::occupancy::Occupancy;

/// Most rooms a single request may book
pub const MAX_ROOMS_PER_BOOKING: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("can book between 1 and {max} rooms at a time, got {0}", max = MAX_ROOMS_PER_BOOKING)]
    InvalidRoomCount(usize),
    #[error("not enough available rooms: requested {requested}, available {available}")]
    InsufficientRooms { requested: usize, available: usize },
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result of a successful booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Occupancy after the booking
    pub occupancy: Occupancy,
    /// Slot indices that were booked, ascending
    pub slots: Vec<usize>,
    /// Room numbers that were booked, ascending
    pub rooms: Vec<RoomNumber>,
    /// Whether all rooms landed on one floor
    pub single_floor: bool,
}

/// Books `count` rooms, preferring to keep them on one floor
///
/// Floors are tried lowest first; the first floor with at least `count` free
/// rooms supplies its lowest free rooms. If no floor has enough, the first
/// `count` free rooms of the hotel are taken regardless of floor.
/// The input occupancy is never modified; on error nothing is booked.
pub fn book_rooms(
    layout: &FloorLayout,
    occupancy: &Occupancy,
    count: usize,
) -> Result<Booking, BookingError> {
    if !(1..=MAX_ROOMS_PER_BOOKING).contains(&count) {
        return Err(BookingError::InvalidRoomCount(count));
    }

    let available = occupancy.available_slots();
    if available.len() < count {
        return Err(BookingError::InsufficientRooms {
            requested: count,
            available: available.len(),
        });
    }

    // First floor (ascending) that can hold the whole request
    let same_floor = layout.floors().find_map(|(floor, range)| {
        let floor_slots: Vec<usize> = available
            .iter()
            .copied()
            .filter(|i| range.contains(i))
            .collect();
        if floor_slots.len() >= count {
            debug!(floor, count, "booking on a single floor");
            Some(floor_slots[..count].to_vec())
        } else {
            None
        }
    });

    let single_floor = same_floor.is_some();
    let slots = same_floor.unwrap_or_else(|| {
        debug!(count, "no single floor has room, taking first free rooms");
        available[..count].to_vec()
    });

    let rooms = layout.room_numbers(&slots)?;
    let mut updated = occupancy.clone();
    updated.mark_booked(&slots);

    Ok(Booking {
        occupancy: updated,
        slots,
        rooms,
        single_floor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (FloorLayout, Occupancy) {
        let layout = FloorLayout::standard();
        let occ = Occupancy::new(layout.total_rooms());
        (layout, occ)
    }

    /// Books every slot except the given ones
    fn only_free(layout: &FloorLayout, free: &[usize]) -> Occupancy {
        let flags = (0..layout.total_rooms())
            .map(|i| !free.contains(&i))
            .collect();
        Occupancy::from_flags(flags)
    }

    #[test]
    fn books_on_first_floor_when_it_has_room() {
        let (layout, occ) = fresh();
        let booking = book_rooms(&layout, &occ, 3).unwrap();
        assert_eq!(booking.rooms, vec![101, 102, 103]);
        assert_eq!(booking.slots, vec![0, 1, 2]);
        assert!(booking.single_floor);
        assert_eq!(booking.occupancy.booked_count(), 3);
        // input untouched
        assert_eq!(occ.booked_count(), 0);
    }

    #[test]
    fn skips_booked_rooms_on_the_floor() {
        let (layout, mut occ) = fresh();
        occ.mark_booked(&[0, 2, 4]);
        let booking = book_rooms(&layout, &occ, 3).unwrap();
        assert_eq!(booking.rooms, vec![102, 104, 106]);
    }

    #[test]
    fn moves_up_to_the_first_floor_with_enough_rooms() {
        let (layout, mut occ) = fresh();
        // floor 1: only 2 free, floor 2: only 4 free
        occ.mark_booked(&(0..8).collect::<Vec<_>>());
        occ.mark_booked(&(10..16).collect::<Vec<_>>());
        let booking = book_rooms(&layout, &occ, 5).unwrap();
        assert_eq!(booking.rooms, vec![301, 302, 303, 304, 305]);
        assert!(booking.single_floor);
    }

    #[test]
    fn falls_back_to_first_free_rooms_across_floors() {
        let layout = FloorLayout::standard();
        // two free on floor 1, one on floor 4, two on floor 10
        let occ = only_free(&layout, &[3, 7, 35, 90, 96]);
        let booking = book_rooms(&layout, &occ, 5).unwrap();
        assert_eq!(booking.rooms, vec![104, 108, 406, 1001, 1007]);
        assert!(!booking.single_floor);
        assert_eq!(booking.occupancy.booked_count(), 97);
    }

    #[test]
    fn fallback_takes_lowest_slots_first() {
        let layout = FloorLayout::standard();
        let occ = only_free(&layout, &[1, 2, 11, 12, 21, 22, 95]);
        let booking = book_rooms(&layout, &occ, 5).unwrap();
        assert_eq!(booking.rooms, vec![102, 103, 202, 203, 302]);
        assert!(!booking.occupancy.is_booked(22));
        assert!(!booking.occupancy.is_booked(95));
    }

    #[test]
    fn insufficient_rooms_leaves_occupancy_unchanged() {
        let layout = FloorLayout::standard();
        let occ = only_free(&layout, &[0, 50, 96]);
        let before = occ.clone();
        let err = book_rooms(&layout, &occ, 4).unwrap_err();
        assert_eq!(
            err,
            BookingError::InsufficientRooms {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(occ, before);
    }

    #[test]
    fn rejects_counts_outside_one_to_five() {
        let (layout, occ) = fresh();
        assert_eq!(
            book_rooms(&layout, &occ, 0),
            Err(BookingError::InvalidRoomCount(0))
        );
        assert_eq!(
            book_rooms(&layout, &occ, 6),
            Err(BookingError::InvalidRoomCount(6))
        );
    }

    #[test]
    fn reset_then_book_five_succeeds() {
        let layout = FloorLayout::standard();
        let mut occ = only_free(&layout, &[]);
        assert!(book_rooms(&layout, &occ, 5).is_err());

        occ.reset();
        assert_eq!(occ.booked_count(), 0);
        let booking = book_rooms(&layout, &occ, 5).unwrap();
        assert_eq!(booking.rooms, vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn repeated_bookings_fill_floors_in_order() {
        let (layout, mut occ) = fresh();
        let mut all_rooms = Vec::new();
        for _ in 0..4 {
            let booking = book_rooms(&layout, &occ, 5).unwrap();
            all_rooms.extend(booking.rooms);
            occ = booking.occupancy;
        }
        assert_eq!(
            all_rooms,
            vec![
                101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 201, 202, 203, 204, 205, 206,
                207, 208, 209, 210
            ]
        );
    }
}
