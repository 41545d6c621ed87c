use serde::Deserialize;

use crate::hotel::MAX_ROOMS_PER_BOOKING;

/// Booking request from the frontend
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub rooms: i64,
}

/// Validates a booking request, returning the room count to book
pub fn validate_request(req: &BookingRequest) -> Result<usize, String> {
    if req.rooms < 1 {
        return Err("At least 1 room must be requested".to_string());
    }
    if req.rooms > MAX_ROOMS_PER_BOOKING as i64 {
        return Err(format!(
            "At most {} rooms can be booked at a time",
            MAX_ROOMS_PER_BOOKING
        ));
    }
    Ok(req.rooms as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rooms: i64) -> BookingRequest {
        BookingRequest { rooms }
    }

    #[test]
    fn accepts_one_to_five() {
        for n in 1..=5 {
            assert_eq!(validate_request(&request(n)), Ok(n as usize));
        }
    }

    #[test]
    fn rejects_zero_negative_and_too_many() {
        assert!(validate_request(&request(0)).is_err());
        assert!(validate_request(&request(-3)).is_err());
        assert_eq!(
            validate_request(&request(6)),
            Err("At most 5 rooms can be booked at a time".to_string())
        );
    }

    #[test]
    fn parses_from_json() {
        let req: BookingRequest = serde_json::from_str(r#"{"rooms": 4}"#).unwrap();
        assert_eq!(validate_request(&req), Ok(4));
    }
}
