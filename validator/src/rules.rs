//! Per-kind constraint rules.
//!
//! Each rule is a pure function from a field definition plus its current
//! value to at most one violation. Message-kind fields need recursion and
//! are handled by the walker.

use crate::Violation;
use muster_schema::FieldDescriptor;

/// Evaluate a string field against its declared constraints.
///
/// Rule order: required-ness first, then either the allow-list or the
/// length/pattern checks (an allow-list is exclusive with both). The
/// value checks apply only to non-empty strings; an empty optional
/// string is indistinguishable from an unset one and passes.
pub fn evaluate_string(field: &FieldDescriptor, value: &str) -> Option<Violation> {
    let mut violation = None;

    if field.required && value.is_empty() {
        violation = Some(Violation::mandatory(&field.full_name));
    }

    if !field.allowed_values.is_empty() && !value.is_empty() {
        if !field.allowed_values.iter().any(|allowed| allowed == value) {
            violation = Some(Violation::not_allowed(&field.name, value));
        }
    } else if !value.is_empty() {
        let min = field.min_length.unwrap_or(0);
        let max = field.max_length.unwrap_or(0);
        let len = value.len();

        if (min != 0 && len < min as usize) || (max != 0 && len > max as usize) {
            violation = Some(Violation::invalid_length(&field.name, len, min, max));
        } else if let Some(pattern) = &field.match_pattern {
            // The builder compile-checked the pattern; a pattern that
            // still fails to compile is skipped rather than reported.
            if let Ok(re) = regex_lite::Regex::new(pattern) {
                if !re.is_match(value) {
                    violation = Some(Violation::pattern_mismatch(&field.name, value, pattern));
                }
            }
        }
    }

    violation
}

/// Evaluate a 64-bit integer field against its declared constraints.
///
/// Zero doubles as unset: a required field at zero is reported missing,
/// and range bounds apply only to non-zero values.
pub fn evaluate_int64(field: &FieldDescriptor, value: i64) -> Option<Violation> {
    if field.required && value == 0 {
        return Some(Violation::mandatory(&field.full_name));
    }

    if value != 0 {
        let min = field.min.unwrap_or(0);
        let max = field.max.unwrap_or(0);
        if (min != 0 && value < min) || (max != 0 && value > max) {
            return Some(Violation::invalid_value(&field.name, value, min, max));
        }
    }

    None
}
