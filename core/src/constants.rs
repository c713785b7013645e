// Match configuration constants
// Hardcoded in both the live engine and the replay validator - must match exactly!

/// Needle swing lower bound (degrees)
pub const SWING_MIN_DEG: i32 = -90;

/// Needle swing upper bound (degrees)
pub const SWING_MAX_DEG: i32 = 90;

/// Degrees the needle advances per animation tick
pub const SWING_STEP_DEG: i32 = 2;

/// The bullseye: stopping here scores the maximum (degrees)
pub const BULLSEYE_DEG: i32 = 90;

/// Score for stopping exactly on the bullseye
pub const MAX_SCORE: u32 = 100;

/// Players per match, in fixed play order
pub const PLAYER_COUNT: usize = 2;

/// Ticks for one full sweep from bound to bound
pub const TICKS_PER_SWEEP: u32 = ((SWING_MAX_DEG - SWING_MIN_DEG) / SWING_STEP_DEG) as u32;

/// Supported match log version
pub const LOG_VERSION: u32 = 1;
