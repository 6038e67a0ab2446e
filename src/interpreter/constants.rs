// Constants for the tape machine

/// Default tape length, the classic 30,000-cell array
pub const TAPE_LENGTH: usize = 30_000;

/// Cells shown on each side of the pointer by `!! print`
pub const PRINT_RADIUS: usize = 5;

/// Default memory budget for recorded execution history (256 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Delay between automatic steps while the debugger is playing
pub const PLAY_INTERVAL_MS: u64 = 250;
