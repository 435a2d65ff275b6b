//! Muster Validator
//!
//! Validate message instances against their declared schema constraints.
//!
//! Responsibilities:
//! - Walk a message's fields in declaration order
//! - Dispatch the rule matching each field's kind
//! - Recurse into required nested messages
//! - Accumulate violations under a soft, caller-enforced cap
//!
//! Violations are plain field/description pairs, ready to be embedded in
//! a bad-request error payload by the calling API layer.

mod rules;
mod violation;
mod walker;

pub use rules::{evaluate_int64, evaluate_string};
pub use violation::{Violation, Violations, MAX_VIOLATIONS};
pub use walker::{get_violations, Validator};
