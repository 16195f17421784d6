// Wire protocol DTOs and conversions for the public HTTP API.

use crate::domain::{
    EntityId, ObjectKind, ObjectSnapshot, UnitKind, UnitSnapshot, WorldGrid, WorldSnapshot,
};
use crate::use_cases::DamageOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query for `GET /state`. Owner 0 or absent means every owner.
#[derive(Debug, Clone, Deserialize)]
pub struct StateQuery {
    #[serde(default)]
    pub owner: Option<u32>,
}

impl StateQuery {
    pub fn owner_filter(&self) -> Option<u32> {
        self.owner.filter(|owner| *owner != 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetFacingRequest {
    pub unit_id: EntityId,
    pub facing: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveToPointRequest {
    pub unit_id: EntityId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamageRequest {
    pub source_id: EntityId,
    pub target_id: EntityId,
}

#[derive(Debug, Clone, Serialize)]
pub struct DamageResponse {
    pub source_hp: i32,
    pub target_hp: i32,
    pub target_destroyed: bool,
}

impl From<DamageOutcome> for DamageResponse {
    fn from(outcome: DamageOutcome) -> Self {
        Self {
            source_hp: outcome.source_hp,
            target_hp: outcome.target_hp,
            target_destroyed: outcome.target_destroyed,
        }
    }
}

/// Objects and units keyed by id for the current tick.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateDto {
    pub tick: u64,
    pub objects: BTreeMap<EntityId, ObjectDto>,
    pub units: BTreeMap<EntityId, UnitDto>,
}

impl From<WorldSnapshot> for GameStateDto {
    fn from(snapshot: WorldSnapshot) -> Self {
        Self {
            tick: snapshot.tick,
            objects: snapshot
                .objects
                .iter()
                .map(|o| (o.id, ObjectDto::from(o)))
                .collect(),
            units: snapshot
                .units
                .iter()
                .map(|u| (u.id, UnitDto::from(u)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectDto {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub key: ObjectKind,
    pub name: String,
}

impl From<&ObjectSnapshot> for ObjectDto {
    fn from(object: &ObjectSnapshot) -> Self {
        Self {
            id: object.id,
            x: object.x,
            y: object.y,
            size: object.size,
            key: object.kind,
            name: object.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitDto {
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

impl From<&UnitSnapshot> for UnitDto {
    fn from(unit: &UnitSnapshot) -> Self {
        Self {
            id: unit.id,
            x: unit.x,
            y: unit.y,
            size: unit.size,
            kind: unit.kind,
            facing: unit.facing,
            velocity: unit.velocity,
            owner: unit.owner,
            hp: unit.hp,
            is_building: unit.is_building,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapResponse {
    pub map: TileMapDto,
}

/// Terrain as integer codes in row-major order.
#[derive(Debug, Clone, Serialize)]
pub struct TileMapDto {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<i32>,
}

impl From<&WorldGrid> for TileMapDto {
    fn from(grid: &WorldGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            tiles: grid.tiles().iter().map(|tile| tile.code()).collect(),
        }
    }
}
