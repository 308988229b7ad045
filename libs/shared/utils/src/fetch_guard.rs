use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number handed to one fetch. Only the most recently issued
/// ticket is current; anything older has been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter for fetches whose inputs can change while
/// a request is in flight.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    latest: AtomicU64,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
