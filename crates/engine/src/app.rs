//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::app_settings::EngineSettings;
use crate::infrastructure::ports::{AuthPort, ClockPort, WarbandRepository};
use crate::stores::{UndoStore, WarbandStore};
use crate::use_cases::{AuthApplicationService, WarbandApplicationService};

/// Main application state.
///
/// Wires the ports into the use cases and stores. The stores share one
/// `WarbandApplicationService`, so undo and regular saves hit the same
/// repository.
pub struct App {
    pub use_cases: UseCases,
    pub stores: Stores,
}

/// Container for the use-case services.
pub struct UseCases {
    pub warbands: Arc<WarbandApplicationService>,
    pub auth: Arc<AuthApplicationService>,
}

/// Container for the in-memory stores.
pub struct Stores {
    pub warband: Arc<WarbandStore>,
    pub undo: Arc<UndoStore>,
}

impl App {
    pub fn new(
        repo: Arc<dyn WarbandRepository>,
        auth: Arc<dyn AuthPort>,
        clock: Arc<dyn ClockPort>,
        settings: &EngineSettings,
    ) -> Self {
        let warbands = Arc::new(WarbandApplicationService::new(repo));
        let auth = Arc::new(AuthApplicationService::new(auth));

        let undo = Arc::new(
            UndoStore::new(Arc::clone(&warbands), clock).with_timeout(settings.undo_timeout()),
        );
        let warband = Arc::new(WarbandStore::new(Arc::clone(&warbands), Arc::clone(&undo)));

        Self {
            use_cases: UseCases { warbands, auth },
            stores: Stores { warband, undo },
        }
    }
}
