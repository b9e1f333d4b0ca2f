use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{PreviewSlot, RenderCache};
use crate::compiler::CompileBackend;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The cache and preview slot are the only mutable state in the
/// process; both live here, never in module statics.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub compiler: Arc<dyn CompileBackend>,
    pub cache: Arc<Mutex<RenderCache>>,
    pub preview: Arc<Mutex<PreviewSlot>>,
}

impl AppState {
    pub fn new(config: Config, compiler: Arc<dyn CompileBackend>) -> Self {
        let cache = RenderCache::new(config.render_cache_capacity);
        Self {
            config,
            compiler,
            cache: Arc::new(Mutex::new(cache)),
            preview: Arc::new(Mutex::new(PreviewSlot::new())),
        }
    }
}
