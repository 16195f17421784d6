// Domain layer: world data model, store, and simulation rules.

pub mod entities;
pub mod errors;
pub mod grid;
pub mod properties;
pub mod state;
pub mod systems;
pub mod tuning;

pub use entities::{Aabb, EntityId, Object, Unit};
pub use errors::{CommandError, StateError};
pub use grid::WorldGrid;
pub use properties::{ObjectKind, TileKind, UnitKind};
pub use state::{GameState, ObjectSnapshot, UnitSnapshot, WorldContents, WorldSnapshot};
