pub mod availability;
pub mod calendar;
pub mod loader;
pub mod slots;

pub use availability::{filter_available_slots, AvailabilityService};
pub use calendar::{build_calendar_grid, build_calendar_month};
pub use loader::{SlotLoad, SlotLoader};
pub use slots::{generate_slots, SlotService};
