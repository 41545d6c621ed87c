pub mod request;

pub use request::{validate_request, BookingRequest};
