use crate::hotel::{FloorLayout, LayoutError, Occupancy, RoomNumber};

/// English ordinal suffix for a floor number (1st, 2nd, 3rd, 4th...)
pub fn ordinal_suffix(n: usize) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats a list of booked rooms: "Rooms booked: [101, 102]"
pub fn format_booked_rooms(rooms: &[RoomNumber]) -> String {
    format!("Rooms booked: {:?}", rooms)
}

/// Booked rooms on one floor: "All" if the floor is full, otherwise the room numbers
/// Returns None when nothing on the floor is booked
pub fn floor_booked_rooms(
    layout: &FloorLayout,
    occupancy: &Occupancy,
    floor: usize,
) -> Result<Option<String>, LayoutError> {
    let Some(range) = layout.floor_slots(floor) else {
        return Ok(None);
    };
    let floor_size = range.len();
    let booked = occupancy.booked_in(range);

    if booked.is_empty() {
        return Ok(None);
    }
    if booked.len() == floor_size {
        return Ok(Some("All".to_string()));
    }

    let rooms = layout.room_numbers(&booked)?;
    Ok(Some(
        rooms
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    ))
}

/// Summary lines for every floor with bookings, lowest floor first:
/// "1st Floor - 101, 102" / "2nd Floor - All"
pub fn floor_summary_lines(
    layout: &FloorLayout,
    occupancy: &Occupancy,
) -> Result<Vec<String>, LayoutError> {
    let mut lines = Vec::new();
    for floor in 1..=layout.floor_count() {
        if let Some(rooms) = floor_booked_rooms(layout, occupancy, floor)? {
            lines.push(format!("{}{} Floor - {}", floor, ordinal_suffix(floor), rooms));
        }
    }
    Ok(lines)
}

/// Prints the room grid (top floor first) followed by the booked-rooms summary
pub fn print_hotel_status(layout: &FloorLayout, occupancy: &Occupancy) -> Result<(), LayoutError> {
    println!("\n=== Room Status ===");
    println!(
        "Booked: {} / {} (available: {})",
        occupancy.booked_count(),
        layout.total_rooms(),
        occupancy.available_count()
    );

    for (floor, range) in layout.floors().rev() {
        let mut cells = Vec::with_capacity(range.len());
        for i in range {
            let number = layout.room_number(i)?;
            if occupancy.is_booked(i) {
                cells.push(format!("[{:>4}]", number));
            } else {
                cells.push(format!(" {:>4} ", number));
            }
        }
        println!("Floor {:>2}: {}", floor, cells.join(""));
    }
    println!("(booked rooms shown in [brackets])");

    println!("\nBooked Rooms:");
    let lines = floor_summary_lines(layout, occupancy)?;
    if lines.is_empty() {
        println!("  (none)");
    }
    for line in lines {
        println!("  {}", line);
    }
    Ok(())
}
