//! CLI Exit Code Registry
//!
//! This is the single source of truth for all `compare-winners` exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Description                                                   |
//! |------|---------------------------------------------------------------|
//! | 0    | Every compared row matched (an under-limit warning still passes) |
//! | 1    | Invalid invocation, or the run could not complete             |
//! | 2    | At least one rank/address/amount mismatch                     |
//!
//! Unlike most CLIs, usage errors share code 1 with runtime failures so
//! that 2 means "lists disagree" and nothing else.

/// Success - all compared rows matched.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - missing positional arguments, bad flags, bad limit.
pub const EXIT_USAGE: u8 = 1;

/// Run failed - winners parse error, missing reconciled columns, bad config,
/// unreadable input or unwritable output. No comparison was reported.
pub const EXIT_ERROR: u8 = 1;

/// Comparison found one or more mismatches.
pub const EXIT_MISMATCH: u8 = 2;
