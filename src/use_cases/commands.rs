// Unit commands issued from outside the tick loop.
//
// Each command holds the store lock for its whole lookup-then-write sequence and checks
// every referenced unit before writing anything.

use super::types::DamageOutcome;
use crate::domain::tuning::combat::CombatTuning;
use crate::domain::{CommandError, EntityId, GameState};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct UnitCommands {
    pub state: Arc<GameState>,
    pub combat: CombatTuning,
}

impl UnitCommands {
    /// Overwrites facing only; speed is left alone.
    pub fn set_facing(&self, unit_id: EntityId, facing: f64) -> Result<(), CommandError> {
        let mut contents = self.state.lock();
        let unit = contents
            .units
            .get_mut(&unit_id)
            .ok_or(CommandError::UnitNotFound(unit_id))?;

        unit.facing = facing;
        debug!(%unit_id, facing, "facing set");
        Ok(())
    }

    /// Points the unit at `(x, y)` and starts it at its kind's speed.
    ///
    /// The unit keeps going past the point until something blocks it.
    pub fn move_to_point(&self, unit_id: EntityId, x: f64, y: f64) -> Result<(), CommandError> {
        let mut contents = self.state.lock();
        let unit = contents
            .units
            .get_mut(&unit_id)
            .ok_or(CommandError::UnitNotFound(unit_id))?;

        unit.facing = (y - unit.y).atan2(x - unit.x);
        unit.velocity = unit.kind.properties().speed;
        debug!(%unit_id, x, y, facing = unit.facing, velocity = unit.velocity, "move ordered");
        Ok(())
    }

    /// Lifesteal hit: the source gains health, the target loses it and is removed at zero.
    pub fn damage(
        &self,
        source_id: EntityId,
        target_id: EntityId,
    ) -> Result<DamageOutcome, CommandError> {
        let mut contents = self.state.lock();
        if !contents.units.contains_key(&source_id) {
            return Err(CommandError::UnitNotFound(source_id));
        }
        if !contents.units.contains_key(&target_id) {
            return Err(CommandError::UnitNotFound(target_id));
        }

        let source = contents
            .units
            .get_mut(&source_id)
            .ok_or(CommandError::UnitNotFound(source_id))?;
        source.hp += self.combat.lifesteal;
        let mut source_hp = source.hp;

        let target = contents
            .units
            .get_mut(&target_id)
            .ok_or(CommandError::UnitNotFound(target_id))?;
        target.hp -= self.combat.damage;
        let target_hp = target.hp;
        if source_id == target_id {
            source_hp = target_hp;
        }

        let target_destroyed = target_hp <= 0;
        if target_destroyed {
            contents.units.remove(&target_id);
            info!(%source_id, %target_id, "unit destroyed");
        } else {
            debug!(%source_id, %target_id, source_hp, target_hp, "unit damaged");
        }

        Ok(DamageOutcome {
            source_hp,
            target_hp,
            target_destroyed,
        })
    }
}
