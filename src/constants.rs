//! Application-wide constants and default values

/// First key handed out by the cross-tree bridge. Host-local keys start at 0,
/// so bridge keys live far above them and the two ranges never collide.
pub const BRIDGE_KEY_OFFSET: u64 = 10_000;

/// Default event-loop tick interval in milliseconds
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Minimum accepted tick interval
pub const TICK_RATE_MIN_MS: u64 = 10;

/// Maximum accepted tick interval
pub const TICK_RATE_MAX_MS: u64 = 1_000;

/// Default lifetime of a toast overlay before auto-dismiss, in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

/// Maximum accepted toast lifetime
pub const TOAST_DURATION_MAX_MS: u64 = 60_000;
