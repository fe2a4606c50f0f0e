use std::sync::Arc;

use crate::config::Config;
use crate::notify::Notifier;
use crate::store::ApplicationStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: ApplicationStore,
    pub notifier: Arc<dyn Notifier>,
}
