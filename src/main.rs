mod config;
mod display;
mod form;
mod hotel;
mod web;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Cli, Command, DemoArgs};
use display::{format_booked_rooms, print_hotel_status};
use hotel::{book_rooms, BookingError, FloorLayout, Occupancy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_booking=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Web(args) => {
            println!("Access the site at http://localhost:{}", args.port);
            web::start_server(args).await?;
        }
        Command::Demo(args) => run_demo(&args)?,
    }

    Ok(())
}

/// Applies the requested operations to a fresh hotel and prints the result
fn run_demo(args: &DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let layout = FloorLayout::standard();
    let mut occupancy = Occupancy::new(layout.total_rooms());

    if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        occupancy.randomize(&mut rng);
        println!(
            "Random occupancy: {} of {} rooms booked",
            occupancy.booked_count(),
            layout.total_rooms()
        );
    }

    let occupancy = run_bookings(&layout, occupancy, &args.bookings)?;
    print_hotel_status(&layout, &occupancy)?;
    Ok(())
}

/// Books each requested count in order, skipping requests the hotel can't hold
fn run_bookings(
    layout: &FloorLayout,
    mut occupancy: Occupancy,
    bookings: &[u8],
) -> Result<Occupancy, BookingError> {
    for &count in bookings {
        println!("\n=== Booking {} room(s) ===", count);
        match book_rooms(layout, &occupancy, count as usize) {
            Ok(booking) => {
                println!("{}", format_booked_rooms(&booking.rooms));
                if !booking.single_floor {
                    println!("(no single floor had {} free rooms)", count);
                }
                occupancy = booking.occupancy;
            }
            Err(BookingError::InsufficientRooms { .. }) => {
                println!("Not enough available rooms.");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(occupancy)
}
