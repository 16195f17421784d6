// Use cases layer: the simulation engine, unit commands, and world setup.

pub mod commands;
pub mod game;
pub mod generation;
pub mod simulation;
pub mod types;

pub use commands::UnitCommands;
pub use game::Game;
pub use generation::GenerationSettings;
pub use simulation::GameSimulation;
pub use types::{DamageOutcome, TickReport};
