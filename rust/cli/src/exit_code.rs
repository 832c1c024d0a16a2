//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad input, failed verification, I/O failure.
pub const ERROR: i32 = 2;
