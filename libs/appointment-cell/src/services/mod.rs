pub mod appointment;
pub mod booking;

pub use appointment::AppointmentService;
pub use booking::{build_create_request, derive_end_time, resolve_duration, validate_draft, BookingService};
