use std::sync::Arc;

use crate::assistant::drafter::AnswerDrafter;
use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable answer drafter. `None` when no AI provider key is configured.
    pub drafter: Option<Arc<dyn AnswerDrafter>>,
}
