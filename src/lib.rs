//! Opaque use-sites that keep computed values alive for verification and fuzzing harnesses.

mod sink;
mod warning;

pub use crate::sink::{case_split, verification_use_u32, verifier_use_u32};
pub use crate::warning::{LOG_TARGET, verifier_warning, verifier_warning_once};
