pub mod layout;
pub mod occupancy;
pub mod booking;

pub use layout::{FloorLayout, LayoutError, RoomNumber};
pub use occupancy::Occupancy;
pub use booking::{book_rooms, BookingError, MAX_ROOMS_PER_BOOKING};
