use std::ops::Range;
use thiserror::Error;

/// Rooms on each floor, lowest floor first
/// Floors 1-9 have 10 rooms each, floor 10 has 7 rooms
pub const ROOMS_PER_FLOOR: [usize; 10] = [10, 10, 10, 10, 10, 10, 10, 10, 10, 7];

/// Human-facing room number: floor * 100 + position on the floor
pub type RoomNumber = u16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("room index {index} out of range (hotel has {total} rooms)")]
    IndexOutOfRange { index: usize, total: usize },
}

/// Fixed floor layout with a precomputed slot -> room number table
#[derive(Debug, Clone)]
pub struct FloorLayout {
    /// Slot index range of each floor (floor 1 at position 0)
    floor_ranges: Vec<Range<usize>>,
    /// Room number of every slot, in slot order
    room_numbers: Vec<RoomNumber>,
}

impl FloorLayout {
    /// Builds a layout from per-floor room counts
    pub fn new(rooms_per_floor: &[usize]) -> Self {
        let mut floor_ranges = Vec::with_capacity(rooms_per_floor.len());
        let mut room_numbers = Vec::new();
        let mut start = 0;

        for (floor_idx, &rooms) in rooms_per_floor.iter().enumerate() {
            let floor = (floor_idx + 1) as RoomNumber;
            floor_ranges.push(start..start + rooms);
            for position in 1..=rooms {
                room_numbers.push(floor * 100 + position as RoomNumber);
            }
            start += rooms;
        }

        Self {
            floor_ranges,
            room_numbers,
        }
    }

    /// The hotel's layout: ten floors, 97 rooms
    pub fn standard() -> Self {
        Self::new(&ROOMS_PER_FLOOR)
    }

    pub fn total_rooms(&self) -> usize {
        self.room_numbers.len()
    }

    pub fn floor_count(&self) -> usize {
        self.floor_ranges.len()
    }

    /// Converts a slot index to its room number (index 0 -> 101)
    pub fn room_number(&self, index: usize) -> Result<RoomNumber, LayoutError> {
        self.room_numbers
            .get(index)
            .copied()
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                total: self.total_rooms(),
            })
    }

    /// Converts a list of slot indices to room numbers, failing on the first bad index
    pub fn room_numbers(&self, indices: &[usize]) -> Result<Vec<RoomNumber>, LayoutError> {
        indices.iter().map(|&i| self.room_number(i)).collect()
    }

    /// Slot index range for a 1-based floor, or None if the floor doesn't exist
    pub fn floor_slots(&self, floor: usize) -> Option<Range<usize>> {
        floor
            .checked_sub(1)
            .and_then(|idx| self.floor_ranges.get(idx))
            .cloned()
    }

    /// Floors with their slot ranges, lowest floor first
    pub fn floors(&self) -> impl DoubleEndedIterator<Item = (usize, Range<usize>)> + '_ {
        self.floor_ranges
            .iter()
            .enumerate()
            .map(|(idx, range)| (idx + 1, range.clone()))
    }
}

impl Default for FloorLayout {
    fn default() -> Self {
        Self::standard()
    }
}
