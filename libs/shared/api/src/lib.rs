pub mod client;
pub mod error;
pub mod resource;
pub mod response;

pub use client::ClinicApiClient;
pub use error::ApiError;
pub use resource::{ListFilters, Resource};
pub use response::{ListEnvelope, Page};
