//! Exit code constants for the infragen CLI.
//!
//! - 0: Success
//! - 1: User error (invalid task choice, bad config values, closed input)
//! - 2: Config file could not be read or parsed
//! - 3: Model service failure
//! - 4: Output file could not be written

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid task choice, invalid config values, or input closed early.
pub const USER_ERROR: i32 = 1;

/// Config file failure: missing, unreadable, or invalid YAML.
pub const CONFIG_FAILURE: i32 = 2;

/// Model service failure: transport error, HTTP error status, or malformed reply.
pub const MODEL_FAILURE: i32 = 3;

/// Output write failure.
pub const WRITE_FAILURE: i32 = 4;
