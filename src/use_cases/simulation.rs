use super::types::TickReport;
use crate::domain::GameState;
use crate::domain::systems::movement;
use std::sync::Arc;
use tracing::debug;

/// Per-tick driver over a shared store. Holds no state of its own.
#[derive(Clone)]
pub struct GameSimulation {
    state: Arc<GameState>,
}

impl GameSimulation {
    pub fn new(state: Arc<GameState>) -> Self {
        Self { state }
    }

    /// Advances the world by exactly one step while holding the store lock.
    pub fn tick(&self) -> TickReport {
        let mut contents = self.state.lock();
        let report = movement::tick_units(&mut contents, self.state.grid());
        contents.tick += 1;
        let tick = contents.tick;
        drop(contents);

        debug!(tick, moved = report.moved, stopped = report.stopped, "tick");
        TickReport {
            tick,
            moved: report.moved,
            stopped: report.stopped,
        }
    }
}
