//! Exit code constants for the strut CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, unreadable template repository)
//! - 2: Template failure (missing or malformed template files)
//! - 3: Generation failure (filesystem errors in the target tree)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Template failure: a descriptor or fragment is missing or malformed.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Generation failure: the target project tree could not be created or written.
pub const GENERATE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, TEMPLATE_FAILURE, GENERATE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
