use std::{
    env,
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

// Runtime/server constants (not gameplay tuning).

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub fn http_port() -> u16 {
    env_or("GAME_SERVER_PORT", 3001)
}

pub fn tick_interval() -> Duration {
    let millis = env_or("TICK_INTERVAL_MS", DEFAULT_TICK_INTERVAL_MS);
    // A zero period would make tokio's interval panic.
    Duration::from_millis(millis.max(1))
}

pub fn world_width() -> usize {
    env_or("WORLD_WIDTH", DEFAULT_WORLD_SIZE)
}

pub fn world_height() -> usize {
    env_or("WORLD_HEIGHT", DEFAULT_WORLD_SIZE)
}

/// Fixed seed from `WORLD_SEED`, otherwise derived from the clock.
pub fn world_seed() -> u64 {
    env::var("WORLD_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64
        })
}

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
pub const DEFAULT_WORLD_SIZE: usize = 256;
