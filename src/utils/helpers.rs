//! Helpers for nerd-ls.
//!
//! Small utilities shared by the core and ui modules:
//! - Lowercasing short strings without a heap allocation
//! - Resolving the user's home directory

use std::path::PathBuf;

/// Longest input lowercased on the stack by [with_lowered_stack].
const LOWER_STACK_LEN: usize = 32;

/// Calls `f` with an ASCII-lowercased copy of `s`.
///
/// Short ASCII inputs are lowered into a stack buffer; anything longer or non-ASCII goes through
/// a regular `to_lowercase` allocation.
pub fn with_lowered_stack<R>(s: &str, f: impl FnOnce(&str) -> R) -> R {
    if s.len() <= LOWER_STACK_LEN && s.is_ascii() {
        let mut buf = [0u8; LOWER_STACK_LEN];
        let dst = &mut buf[..s.len()];
        dst.copy_from_slice(s.as_bytes());
        dst.make_ascii_lowercase();
        match std::str::from_utf8(dst) {
            Ok(lowered) => f(lowered),
            Err(_) => f(&s.to_lowercase()),
        }
    } else {
        f(&s.to_lowercase())
    }
}

/// Returns the current user's home directory, if it can be determined.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_short_ascii() {
        assert_eq!(with_lowered_stack("PnG", |s| s.to_string()), "png");
    }

    #[test]
    fn lowers_long_and_unicode_input() {
        let long = "A".repeat(LOWER_STACK_LEN + 5);
        assert_eq!(
            with_lowered_stack(&long, |s| s.to_string()),
            "a".repeat(LOWER_STACK_LEN + 5)
        );
        assert_eq!(with_lowered_stack("ÄRGER", |s| s.to_string()), "ärger");
    }

    #[test]
    fn empty_input() {
        assert_eq!(with_lowered_stack("", |s| s.len()), 0);
    }
}
