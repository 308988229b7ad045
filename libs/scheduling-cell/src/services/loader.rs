use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use shared_config::AppConfig;
use shared_utils::FetchGeneration;

use crate::models::{AvailableSlot, SchedulingError, SlotSelection};
use crate::services::AvailabilityService;

#[derive(Debug, Clone, PartialEq)]
pub enum SlotLoad {
    Fresh(Vec<AvailableSlot>),
    /// A later load for the same view started before this one finished;
    /// its result was dropped.
    Superseded,
}

/// Loads available slots for a view's current selection. Loads are ordered
/// per view: only the most recently started load for a view may publish,
/// so a slow response for an old selection never overwrites a newer one.
/// Loads for different views never affect each other.
///
/// A view is tracked only while it has a load in flight.
pub struct SlotLoader {
    service: AvailabilityService,
    views: Mutex<HashMap<String, Arc<FetchGeneration>>>,
}

impl SlotLoader {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_service(AvailabilityService::new(config))
    }

    pub fn with_service(service: AvailabilityService) -> Self {
        Self {
            service,
            views: Mutex::new(HashMap::new()),
        }
    }

    /// Without a view id the load stands alone and is never superseded.
    pub async fn load(&self, view: Option<&str>, selection: &SlotSelection) -> Result<SlotLoad, SchedulingError> {
        let Some(view) = view else {
            return Ok(SlotLoad::Fresh(self.service.available_slots(selection).await?));
        };

        let (generation, ticket) = {
            let mut views = self.views.lock().await;
            let generation = views.entry(view.to_string()).or_default().clone();
            let ticket = generation.begin();
            (generation, ticket)
        };

        let result = self.service.available_slots(selection).await;

        {
            let mut views = self.views.lock().await;
            if !generation.is_current(ticket) {
                debug!("Dropping slot load #{} for view {}, superseded", ticket.sequence(), view);
                return Ok(SlotLoad::Superseded);
            }
            if views.get(view).is_some_and(|g| Arc::ptr_eq(g, &generation)) {
                views.remove(view);
            }
        }

        Ok(SlotLoad::Fresh(result?))
    }

    /// Invalidates any load still in flight for the view.
    pub async fn reset(&self, view: &str) {
        if let Some(generation) = self.views.lock().await.remove(view) {
            generation.begin();
            debug!("Slot loads for view {} reset", view);
        }
    }
}
