pub mod fetch_guard;
pub mod test_utils;
pub mod time_format;

pub use fetch_guard::{FetchGeneration, FetchTicket};
pub use time_format::{to_12_hour, to_24_hour, TimeFormatError};
