/// Gameplay tuning for the damage primitive.
///
/// Keep this separate from runtime/server configuration (tick rates, ports, etc.).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatTuning {
    /// Health the attacker gains per hit.
    pub lifesteal: i32,

    /// Health the target loses per hit.
    pub damage: i32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            lifesteal: 1,
            damage: 2,
        }
    }
}
