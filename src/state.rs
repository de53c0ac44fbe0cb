use crate::controller::CounterController;
use crate::feedback::{Capabilities, CueQueue};
use crate::preferences::Preferences;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

pub type WidgetController = CounterController<Preferences, CueQueue>;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub controller: Arc<Mutex<WidgetController>>,
}

impl AppState {
    /// Starts with a controller built from the stored preferences alone; the
    /// page replaces it once it reports its color scheme and capabilities.
    pub fn new(data_path: PathBuf, preferences: Preferences) -> Self {
        let controller =
            CounterController::initialize(preferences, CueQueue::new(Capabilities::default()), false);
        Self {
            data_path,
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}
