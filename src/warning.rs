//! Warnings raised by verification harnesses.

use std::collections::HashSet;
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Target of every record emitted here. The host application installs the logger.
pub const LOG_TARGET: &str = "verifier";

/// Messages already reported through `verifier_warning_once`.
static REPORTED: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Report a warning from a verification harness.
pub fn verifier_warning(message: &str) {
    log::warn!(target: LOG_TARGET, "{message}");
}

/// Report a warning the first time `message` is seen in this process.
///
/// Returns whether the warning was emitted.
pub fn verifier_warning_once(message: &'static str) -> bool {
    let first = REPORTED
        .lock()
        .unwrap_or_else(|err| err.into_inner())
        .insert(message);
    if first {
        verifier_warning(message);
    }
    first
}
