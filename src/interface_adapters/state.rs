use crate::use_cases::Game;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // The running world shared with the ticker task.
    pub game: Arc<Game>,
}
