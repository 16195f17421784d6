// Entity store: the single locked source of truth for world contents.

use crate::domain::entities::{EntityId, Object, Unit};
use crate::domain::errors::StateError;
use crate::domain::grid::WorldGrid;
use crate::domain::properties::{ObjectKind, UnitKind};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything guarded by the store lock.
///
/// Maps are ordered by id so every pass over units visits them in the same sequence.
#[derive(Debug, Default)]
pub struct WorldContents {
    pub objects: BTreeMap<EntityId, Object>,
    pub units: BTreeMap<EntityId, Unit>,
    /// Number of completed ticks.
    pub tick: u64,
}

pub struct GameState {
    grid: WorldGrid,
    contents: Mutex<WorldContents>,
}

impl GameState {
    /// Takes ownership of generator output. Identities must be unique across both maps.
    pub fn new(
        grid: WorldGrid,
        objects: Vec<Object>,
        units: Vec<Unit>,
    ) -> Result<Self, StateError> {
        let mut contents = WorldContents::default();

        for object in objects {
            let id = object.id;
            if contents.objects.insert(id, object).is_some() {
                return Err(StateError::DuplicateId(id));
            }
        }
        for unit in units {
            let id = unit.id;
            if contents.objects.contains_key(&id) || contents.units.insert(id, unit).is_some() {
                return Err(StateError::DuplicateId(id));
            }
        }

        Ok(Self {
            grid,
            contents: Mutex::new(contents),
        })
    }

    /// Immutable terrain; safe to read without the lock.
    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    /// Exclusive access for a whole read-modify-write sequence. Released when the guard drops.
    ///
    /// A panic while holding the guard poisons the mutex; the contents are still plain data,
    /// so the guard is recovered rather than propagating the poison.
    pub fn lock(&self) -> MutexGuard<'_, WorldContents> {
        self.contents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consistent copy of objects and units. `owner` keeps only that owner's units.
    pub fn snapshot(&self, owner: Option<u32>) -> WorldSnapshot {
        let contents = self.lock();
        WorldSnapshot {
            tick: contents.tick,
            objects: contents.objects.values().map(ObjectSnapshot::from).collect(),
            units: contents
                .units
                .values()
                .filter(|u| owner.is_none_or(|owner| u.owner == owner))
                .map(UnitSnapshot::from)
                .collect(),
        }
    }

    pub fn unit(&self, id: EntityId) -> Option<UnitSnapshot> {
        self.lock().units.get(&id).map(UnitSnapshot::from)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSnapshot {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub kind: ObjectKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitSnapshot {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub kind: UnitKind,
    pub facing: f64,
    pub velocity: f64,
    pub owner: u32,
    pub hp: i32,
    pub is_building: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub objects: Vec<ObjectSnapshot>,
    pub units: Vec<UnitSnapshot>,
}

impl From<&Object> for ObjectSnapshot {
    fn from(o: &Object) -> Self {
        Self {
            id: o.id,
            x: o.x,
            y: o.y,
            size: o.size,
            kind: o.kind,
            name: o.name.clone(),
        }
    }
}

impl From<&Unit> for UnitSnapshot {
    fn from(u: &Unit) -> Self {
        Self {
            id: u.id,
            x: u.x,
            y: u.y,
            size: u.size,
            kind: u.kind,
            facing: u.facing,
            velocity: u.velocity,
            owner: u.owner,
            hp: u.hp,
            is_building: u.is_building,
        }
    }
}
