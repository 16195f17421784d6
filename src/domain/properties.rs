// Static lookup tables from terrain/object/unit kind to behavioral flags.

use serde::{Deserialize, Serialize};

/// Terrain category stored in each grid cell.
///
/// `None` is the sentinel returned for coordinates outside the grid; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    None,
    Water,
    Land,
    Dirt,
    Rock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProperty {
    pub is_land: bool,
    pub is_water: bool,
    pub is_passable: bool,
}

impl TileKind {
    pub fn properties(self) -> TileProperty {
        match self {
            TileKind::None => TileProperty {
                is_land: false,
                is_water: false,
                is_passable: false,
            },
            // Units are ground units; open water blocks them.
            TileKind::Water => TileProperty {
                is_land: false,
                is_water: true,
                is_passable: false,
            },
            TileKind::Land | TileKind::Dirt => TileProperty {
                is_land: true,
                is_water: false,
                is_passable: true,
            },
            TileKind::Rock => TileProperty {
                is_land: true,
                is_water: false,
                is_passable: false,
            },
        }
    }

    pub fn is_passable(self) -> bool {
        self.properties().is_passable
    }

    /// Integer code used on the wire.
    pub fn code(self) -> i32 {
        match self {
            TileKind::None => -1,
            TileKind::Water => 0,
            TileKind::Land => 1,
            TileKind::Dirt => 2,
            TileKind::Rock => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Tree,
    Decoration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectProperty {
    pub is_selectable: bool,
    pub is_targetable: bool,
}

impl ObjectKind {
    pub fn properties(self) -> ObjectProperty {
        match self {
            ObjectKind::Tree => ObjectProperty {
                is_selectable: true,
                is_targetable: true,
            },
            ObjectKind::Decoration => ObjectProperty {
                is_selectable: false,
                is_targetable: false,
            },
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ObjectKind::Tree => "Tree",
            ObjectKind::Decoration => "Decoration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Worker,
    Warrior,
    Ranger,
    Spawner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitProperty {
    pub is_building: bool,
    /// Ticks needed to produce one unit of this kind.
    pub production_time: u32,
    pub max_hp: i32,
    /// World units advanced per tick when moving.
    pub speed: f64,
}

/// Default movement speed for mobile kinds, in world units per tick.
pub const BASE_UNIT_SPEED: f64 = 0.01;

impl UnitKind {
    pub const MOBILE: [UnitKind; 3] = [UnitKind::Worker, UnitKind::Warrior, UnitKind::Ranger];

    pub fn properties(self) -> UnitProperty {
        match self {
            UnitKind::Worker | UnitKind::Warrior | UnitKind::Ranger => UnitProperty {
                is_building: false,
                production_time: 0,
                max_hp: 100,
                speed: BASE_UNIT_SPEED,
            },
            UnitKind::Spawner => UnitProperty {
                is_building: true,
                production_time: 0,
                max_hp: 500,
                speed: 0.0,
            },
        }
    }
}
