use std::sync::Arc;

use crate::clock::{Clock, IdGenerator};
use crate::config::Config;
use crate::notify::NotifierRegistry;
use crate::store::ContentStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
    pub notifiers: NotifierRegistry,
}
