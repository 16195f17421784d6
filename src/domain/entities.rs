// World entities: static objects and the units built on top of them.

use crate::domain::properties::{ObjectKind, UnitKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Builds an id from caller-supplied random bytes (seeded generation).
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Axis-aligned box given by its lower-left corner and side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Aabb {
    pub fn square(x: f64, y: f64, size: f64) -> Self {
        Self {
            left: x,
            bottom: y,
            right: x + size,
            top: y + size,
        }
    }

    /// Strict overlap: boxes sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.top > other.bottom
            && self.bottom < other.top
    }
}

/// Static world entity. Never moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub kind: ObjectKind,
    pub name: String,
}

impl Object {
    pub fn new(id: EntityId, x: f64, y: f64, size: f64, kind: ObjectKind) -> Self {
        Self {
            id,
            x,
            y,
            size,
            kind,
            name: kind.display_name().to_string(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.x, self.y, self.size)
    }
}

/// Dynamic, ownable, health-bearing entity.
///
/// Holds its positional record as an `Object`; field access like `unit.x` goes through `Deref`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub object: Object,
    pub kind: UnitKind,
    /// Heading in radians, measured from +x.
    pub facing: f64,
    /// Scalar speed in world units per tick; zero means stationary.
    pub velocity: f64,
    pub owner: u32,
    pub hp: i32,
    pub is_building: bool,
}

impl Unit {
    /// Creates a stationary unit with the kind's full health.
    pub fn new(object: Object, kind: UnitKind, owner: u32) -> Self {
        let props = kind.properties();
        Self {
            object,
            kind,
            facing: 0.0,
            velocity: 0.0,
            owner,
            hp: props.max_hp,
            is_building: props.is_building,
        }
    }

    pub fn with_motion(mut self, facing: f64, velocity: f64) -> Self {
        self.facing = facing;
        self.velocity = velocity;
        self
    }

    /// Position after one tick at the current facing and velocity.
    pub fn next_position(&self) -> (f64, f64) {
        (
            self.x + self.velocity * self.facing.cos(),
            self.y + self.velocity * self.facing.sin(),
        )
    }

    pub fn is_moving(&self) -> bool {
        !self.is_building && self.velocity > 0.0
    }

    pub fn stop(&mut self) {
        self.velocity = 0.0;
    }
}

impl Deref for Unit {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.object
    }
}

impl DerefMut for Unit {
    fn deref_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}
