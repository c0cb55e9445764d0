//! Process exit codes

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;

/// Command applied but something needs attention (e.g. the board could not be saved)
pub const EXIT_WARNING: i32 = 1;

/// Command rejected or failed
pub const EXIT_ERROR: i32 = 2;
