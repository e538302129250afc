//! Server configuration constants

use std::time::Duration;

/// Concurrent connection limit
pub const MAX_CONCURRENCY: usize = 256;

/// Request body size limit
pub const MAX_BODY_SIZE: usize = 64 * 1024; // 64KB

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CORS preflight cache duration
pub const CORS_MAX_AGE: Duration = Duration::from_secs(3600);
