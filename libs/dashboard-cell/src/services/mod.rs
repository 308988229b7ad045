pub mod calls;
pub mod overview;

pub use calls::CallService;
pub use overview::OverviewService;
