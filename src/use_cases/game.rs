use super::commands::UnitCommands;
use super::generation::{GenerationSettings, generate_state};
use super::simulation::GameSimulation;
use super::types::DamageOutcome;
use crate::domain::tuning::combat::CombatTuning;
use crate::domain::{CommandError, EntityId, GameState, StateError, WorldSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::info;

/// One running world: its store, the per-tick simulation, and the unit command surface.
pub struct Game {
    state: Arc<GameState>,
    simulation: GameSimulation,
    commands: UnitCommands,
}

impl Game {
    pub fn new(state: GameState, combat: CombatTuning) -> Self {
        let state = Arc::new(state);
        Self {
            simulation: GameSimulation::new(state.clone()),
            commands: UnitCommands {
                state: state.clone(),
                combat,
            },
            state,
        }
    }

    pub fn generate(settings: &GenerationSettings) -> Result<Self, StateError> {
        Ok(Self::new(generate_state(settings)?, CombatTuning::default()))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn simulation(&self) -> &GameSimulation {
        &self.simulation
    }

    pub fn snapshot(&self, owner: Option<u32>) -> WorldSnapshot {
        self.state.snapshot(owner)
    }

    pub fn set_facing(&self, unit_id: EntityId, facing: f64) -> Result<(), CommandError> {
        self.commands.set_facing(unit_id, facing)
    }

    pub fn move_to_point(&self, unit_id: EntityId, x: f64, y: f64) -> Result<(), CommandError> {
        self.commands.move_to_point(unit_id, x, y)
    }

    pub fn damage(
        &self,
        source_id: EntityId,
        target_id: EntityId,
    ) -> Result<DamageOutcome, CommandError> {
        self.commands.damage(source_id, target_id)
    }

    /// Spawns the fixed-step tick loop. Runs until `shutdown` is notified.
    pub fn spawn_ticker(
        self: Arc<Self>,
        tick_interval: Duration,
        shutdown: Arc<Notify>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            info!(tick_interval_ms = tick_interval.as_millis(), "ticker started");

            loop {
                tokio::select! {
                    _ = shutdown.notified() => {
                        info!("ticker stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        self.simulation.tick();
                    }
                }
            }
        })
    }
}
