//! Timing and retry constants of the setup client
//!
//! All delays are in milliseconds because the shell timers are.

/// Delay between two polls of the scan-status endpoint
pub const SCAN_POLL_INTERVAL_MS: u64 = 3_000;

/// Consecutive empty scan results tolerated before giving up
pub const MAX_SCAN_ATTEMPTS: u32 = 5;

/// Delay between accepted credentials and the first connection-status poll
pub const CONNECT_STATUS_DELAY_MS: u64 = 3_000;

/// Delay between two polls of the connection-status endpoint
pub const CONNECT_POLL_INTERVAL_MS: u64 = 3_000;

/// Default lifetime of a status banner
pub const BANNER_DEFAULT_MS: u64 = 3_000;

/// Lifetime of a "connection in progress" banner
pub const BANNER_PROGRESS_MS: u64 = 6_000;

/// Lifetime of a "connected" banner
pub const BANNER_SUCCESS_MS: u64 = 10_000;
