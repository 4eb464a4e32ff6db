//! Process-wide defaults.
//!
//! honq has exactly one global setting: whether pattern matching ignores
//! case. It is read once, when a pattern filter or a folder-skipping
//! predicate is built, and baked into the compiled matcher. Changing it
//! later does not affect stages that already exist.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Case is ignored unless the caller says otherwise.
pub const DEFAULT_IGNORE_CASE: bool = true;

static IGNORE_CASE: AtomicBool = AtomicBool::new(DEFAULT_IGNORE_CASE);

/// Whether newly built matchers ignore case.
#[must_use]
pub fn ignore_case() -> bool {
    IGNORE_CASE.load(Ordering::Relaxed)
}

/// Set whether newly built matchers ignore case.
///
/// Returns the previous value.
pub fn set_ignore_case(ignore: bool) -> bool {
    let previous = IGNORE_CASE.swap(ignore, Ordering::Relaxed);
    if previous != ignore {
        debug!("Case-insensitive matching set to {}", ignore);
    }
    previous
}

/// Whether newly built matchers are case sensitive.
#[must_use]
pub fn case_sensitive() -> bool {
    !ignore_case()
}
