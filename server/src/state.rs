use std::sync::Arc;
use std::time::Duration;

use crate::store::TodoStore;

/// Handler-visible knobs that are not part of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub require_title_on_create: bool,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            require_title_on_create: false,
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(store: impl TodoStore + 'static, settings: Settings) -> Self {
        Self::from_shared(Arc::new(store), settings)
    }

    pub fn from_shared(store: Arc<dyn TodoStore>, settings: Settings) -> Self {
        Self { store, settings }
    }
}
