use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{
    middleware, web, App, HttpRequest, HttpResponse, HttpResponseBuilder, HttpServer, Result,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::{WebArgs, MIN_SESSION_KEY_LEN};
use crate::display::{floor_booked_rooms, floor_summary_lines, format_booked_rooms};
use crate::form::{validate_request, BookingRequest};
use crate::hotel::{book_rooms, BookingError, FloorLayout, LayoutError, Occupancy, RoomNumber};

/// Session cookie carrying the visitor's occupancy
pub const SESSION_COOKIE: &str = "hotel-session";
const OCCUPANCY_KEY: &str = "occupancy";

/// Shared, read-only server state; per-visitor occupancy lives in the session
pub struct AppState {
    pub layout: FloorLayout,
}

impl AppState {
    pub fn new(layout: FloorLayout) -> Self {
        Self { layout }
    }
}

#[derive(Serialize)]
pub struct StatusResponse {
    total_rooms: usize,
    available_rooms: usize,
    booked_rooms: usize,
    /// Top floor first, the way the page draws them
    floors: Vec<FloorView>,
    summary_lines: Vec<String>,
}

#[derive(Serialize)]
pub struct FloorView {
    floor: usize,
    label: String,
    rooms: Vec<RoomView>,
    /// "All", a room list, or null when nothing is booked
    booked: Option<String>,
}

#[derive(Serialize)]
pub struct RoomView {
    number: RoomNumber,
    booked: bool,
}

#[derive(Serialize)]
pub struct BookResponse {
    success: bool,
    rooms: Vec<RoomNumber>,
    message: String,
    status: StatusResponse,
}

#[derive(Serialize)]
pub struct UpdateResponse {
    success: bool,
    status: StatusResponse,
}

/// JSON failure body the page shows to the user
fn failure(mut builder: HttpResponseBuilder, message: &str) -> HttpResponse {
    builder.json(serde_json::json!({"success": false, "error": message}))
}

/// Malformed booking bodies get the same JSON failure shape as validation errors
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("rejected booking payload: {}", err);
    let response = failure(HttpResponse::BadRequest(), "Enter a number of rooms between 1 and 5");
    InternalError::from_response(err, response).into()
}

fn internal_error(e: LayoutError) -> actix_web::Error {
    error!("layout lookup failed: {}", e);
    actix_web::error::ErrorInternalServerError(e.to_string())
}

/// Picks the stored occupancy if it fits the layout, otherwise starts fresh
fn occupancy_for_layout(stored: Option<Occupancy>, layout: &FloorLayout) -> Occupancy {
    match stored {
        Some(occupancy) if occupancy.len() == layout.total_rooms() => occupancy,
        Some(occupancy) => {
            warn!(
                stored = occupancy.len(),
                expected = layout.total_rooms(),
                "discarding session occupancy with wrong room count"
            );
            Occupancy::new(layout.total_rooms())
        }
        None => Occupancy::new(layout.total_rooms()),
    }
}

fn load_occupancy(session: &Session, layout: &FloorLayout) -> Result<Occupancy> {
    let stored = session.get::<Occupancy>(OCCUPANCY_KEY)?;
    Ok(occupancy_for_layout(stored, layout))
}

fn store_occupancy(session: &Session, occupancy: &Occupancy) -> Result<()> {
    session.insert(OCCUPANCY_KEY, occupancy)?;
    Ok(())
}

fn build_status(layout: &FloorLayout, occupancy: &Occupancy) -> Result<StatusResponse> {
    let mut floors = Vec::with_capacity(layout.floor_count());
    for (floor, range) in layout.floors().rev() {
        let mut rooms = Vec::with_capacity(range.len());
        for i in range {
            rooms.push(RoomView {
                number: layout.room_number(i).map_err(internal_error)?,
                booked: occupancy.is_booked(i),
            });
        }
        floors.push(FloorView {
            floor,
            label: format!("Floor {}", floor),
            rooms,
            booked: floor_booked_rooms(layout, occupancy, floor).map_err(internal_error)?,
        });
    }

    Ok(StatusResponse {
        total_rooms: layout.total_rooms(),
        available_rooms: occupancy.available_count(),
        booked_rooms: occupancy.booked_count(),
        floors,
        summary_lines: floor_summary_lines(layout, occupancy).map_err(internal_error)?,
    })
}

// Status endpoint
async fn get_status(session: Session, state: web::Data<AppState>) -> Result<HttpResponse> {
    let occupancy = load_occupancy(&session, &state.layout)?;
    Ok(HttpResponse::Ok().json(build_status(&state.layout, &occupancy)?))
}

// Booking endpoint
async fn book(
    req: web::Json<BookingRequest>,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let count = match validate_request(&req) {
        Ok(count) => count,
        Err(e) => return Ok(failure(HttpResponse::BadRequest(), &e)),
    };

    let occupancy = load_occupancy(&session, &state.layout)?;
    match book_rooms(&state.layout, &occupancy, count) {
        Ok(booking) => {
            info!(rooms = ?booking.rooms, single_floor = booking.single_floor, "rooms booked");
            store_occupancy(&session, &booking.occupancy)?;
            let status = build_status(&state.layout, &booking.occupancy)?;
            Ok(HttpResponse::Ok().json(BookResponse {
                success: true,
                message: format_booked_rooms(&booking.rooms),
                rooms: booking.rooms,
                status,
            }))
        }
        Err(BookingError::InsufficientRooms { requested, available }) => {
            info!(requested, available, "booking refused, not enough rooms");
            Ok(failure(HttpResponse::Conflict(), "Not enough available rooms."))
        }
        Err(e @ BookingError::InvalidRoomCount(_)) => {
            Ok(failure(HttpResponse::BadRequest(), &e.to_string()))
        }
        Err(BookingError::Layout(e)) => Err(internal_error(e)),
    }
}

// Reset endpoint
async fn reset(session: Session, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut occupancy = load_occupancy(&session, &state.layout)?;
    occupancy.reset();
    store_occupancy(&session, &occupancy)?;
    info!("bookings reset");

    Ok(HttpResponse::Ok().json(UpdateResponse {
        success: true,
        status: build_status(&state.layout, &occupancy)?,
    }))
}

// Random occupancy endpoint
async fn randomize(session: Session, state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut occupancy = Occupancy::new(state.layout.total_rooms());
    occupancy.randomize(&mut rand::thread_rng());
    store_occupancy(&session, &occupancy)?;
    info!(booked = occupancy.booked_count(), "random occupancy generated");

    Ok(HttpResponse::Ok().json(UpdateResponse {
        success: true,
        status: build_status(&state.layout, &occupancy)?,
    }))
}

// HTML page handler
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Registers the page and API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(index))
        .route("/api/status", web::get().to(get_status))
        .route("/api/book", web::post().to(book))
        .route("/api/reset", web::post().to(reset))
        .route("/api/random", web::post().to(randomize));
}

pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(secure)
        .build()
}

/// Uses the configured signing key when it is long enough, otherwise a random one
fn session_key(configured: Option<&str>) -> Key {
    match configured {
        Some(raw) if raw.len() >= MIN_SESSION_KEY_LEN => Key::from(raw.as_bytes()),
        Some(raw) => {
            warn!(
                len = raw.len(),
                min = MIN_SESSION_KEY_LEN,
                "SESSION_KEY too short, using a random key"
            );
            Key::generate()
        }
        None => {
            warn!("no SESSION_KEY set, sessions will not survive a restart");
            Key::generate()
        }
    }
}

pub async fn start_server(args: WebArgs) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(FloorLayout::standard()));
    let key = session_key(args.session_key.as_deref());
    let secure = args.secure_cookies;

    info!("Starting web server on {}:{}", args.bind, args.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(session_middleware(key.clone(), secure))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .configure(configure)
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await
}
