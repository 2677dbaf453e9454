//! Exit code constants shared by `setup-agents` and `run-agent`.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown agent)
//! - 2: Malformed agent record, template, or settings file
//! - 3: Filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing arguments or an agent name with no configuration file.
pub const USER_ERROR: i32 = 1;

/// A file was present but could not be parsed or rendered.
pub const MALFORMED_INPUT: i32 = 2;

/// Directory creation, read, write, or copy failed.
pub const FILESYSTEM_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, MALFORMED_INPUT, FILESYSTEM_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn failures_are_nonzero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert!(MALFORMED_INPUT > 0);
        assert!(FILESYSTEM_FAILURE > 0);
    }
}
