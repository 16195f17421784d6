// Use-case level outputs for the tick loop and unit commands.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number just completed (starts at 1).
    pub tick: u64,
    pub moved: usize,
    pub stopped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    pub source_hp: i32,
    pub target_hp: i32,
    /// Target reached zero health and was removed from the store.
    pub target_destroyed: bool,
}
