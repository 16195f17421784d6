// Seeded world generation: terrain from noise, then scattered objects and units.

use crate::domain::{
    EntityId, GameState, Object, ObjectKind, StateError, TileKind, Unit, UnitKind, WorldGrid,
};
use noise::{NoiseFn, OpenSimplex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;
use tracing::info;

const NOISE_SCALE: f64 = 0.03;
// Noise thresholds, checked from the top down.
const ROCK_THRESHOLD: f64 = 0.4;
const LAND_THRESHOLD: f64 = 0.0;
const DIRT_THRESHOLD: f64 = -0.2;

const TREE_CHANCE: f64 = 0.08;
const DECORATION_CHANCE: f64 = 0.04;
const UNIT_PROMOTION_CHANCE: f64 = 0.25;
const TREE_SIZE: f64 = 0.5;
const DECORATION_SIZE: f64 = TREE_SIZE * 0.6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
}

pub fn generate_map(settings: &GenerationSettings) -> Result<WorldGrid, StateError> {
    let invalid = StateError::InvalidGrid {
        width: settings.width,
        height: settings.height,
    };
    let mut grid = WorldGrid::filled(settings.width, settings.height, TileKind::Water)
        .ok_or(invalid)?;
    // OpenSimplex takes a 32-bit seed; fold the high half in.
    let noise = OpenSimplex::new((settings.seed ^ (settings.seed >> 32)) as u32);

    for y in 0..settings.height {
        for x in 0..settings.width {
            let value = noise.get([x as f64 * NOISE_SCALE, y as f64 * NOISE_SCALE]);
            grid.set(x, y, classify(value));
        }
    }
    Ok(grid)
}

fn classify(value: f64) -> TileKind {
    if value > ROCK_THRESHOLD {
        TileKind::Rock
    } else if value > LAND_THRESHOLD {
        TileKind::Land
    } else if value > DIRT_THRESHOLD {
        TileKind::Dirt
    } else {
        TileKind::Water
    }
}

/// Places objects on land and dirt tile centres; a share of them become units instead.
pub fn generate_entities(grid: &WorldGrid, seed: u64) -> (Vec<Object>, Vec<Unit>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut objects = Vec::new();
    let mut units = Vec::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let tile = grid.tiles()[y * grid.width() + x];
            if !matches!(tile, TileKind::Land | TileKind::Dirt) {
                continue;
            }

            let roll: f64 = rng.r#gen();
            let (kind, size) = if roll < TREE_CHANCE {
                (ObjectKind::Tree, TREE_SIZE)
            } else if roll < TREE_CHANCE + DECORATION_CHANCE {
                (ObjectKind::Decoration, DECORATION_SIZE)
            } else {
                continue;
            };

            let id = EntityId::from_random_bytes(rng.r#gen());
            let object = Object::new(id, x as f64 + 0.5, y as f64 + 0.5, size, kind);

            if rng.r#gen::<f64>() < UNIT_PROMOTION_CHANCE {
                let unit_kind = UnitKind::MOBILE[rng.gen_range(0..UnitKind::MOBILE.len())];
                let owner = rng.gen_range(1..=2);
                let facing = rng.r#gen::<f64>() * TAU;
                let speed = unit_kind.properties().speed;
                units.push(Unit::new(object, unit_kind, owner).with_motion(facing, speed));
            } else {
                objects.push(object);
            }
        }
    }

    (objects, units)
}

pub fn generate_state(settings: &GenerationSettings) -> Result<GameState, StateError> {
    let grid = generate_map(settings)?;
    let (objects, units) = generate_entities(&grid, settings.seed);
    info!(
        width = settings.width,
        height = settings.height,
        seed = settings.seed,
        objects = objects.len(),
        units = units.len(),
        "world generated"
    );
    GameState::new(grid, objects, units)
}
