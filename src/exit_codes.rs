//! Exit code constants for the sproutee CLI.
//!
//! - 0: Success (including cancelled or empty selections)
//! - 1: User error (not in a repository, bad arguments)
//! - 2: Configuration failure (missing or invalid `sproutee.json`)
//! - 3: Git operation failure (inventory, status, worktree creation)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: not inside a repository, bad arguments, or invalid state.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: `sproutee.json` missing, unreadable, or invalid.
pub const CONFIG_FAILURE: i32 = 2;

/// Git operation failure: worktree listing, status query, add or remove.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn only_success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert!(USER_ERROR > 0);
        assert!(CONFIG_FAILURE > 0);
        assert!(GIT_FAILURE > 0);
    }
}
