//! Terminal decoration.
//!
//! Responses are shown in the terminal with ANSI colors (via `colored`), but stored
//! and returned over HTTP without them. Both forms carry the same characters once the
//! escape sequences are removed.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is fine here, the pattern is a compile-time constant
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[mK]").expect("Invalid regex: ANSI escape pattern"));

/// Removes every ANSI SGR (`m`) and erase-line (`K`) sequence. Idempotent.
pub fn strip_decoration(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}
