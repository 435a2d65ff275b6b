//! Violation types and the soft-capped accumulator.

/// Soft cap on accumulated violations. Once a message's collection grows
/// past this, its remaining fields are not inspected.
pub const MAX_VIOLATIONS: usize = 3;

/// A single constraint violation on one message field.
///
/// `field` is the fully-qualified name for mandatory violations and the
/// short name for allow-list/length/pattern/range violations. Downstream
/// consumers match on these exact strings, so the constructors below are
/// the only place they are assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The field the violation is attributed to.
    pub field: String,
    /// Human-readable description of the failure.
    pub description: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }

    /// A required field left absent or zero-valued.
    pub fn mandatory(full_name: impl Into<String>) -> Self {
        Self::new(full_name, "mandatory field not provided")
    }

    /// A value outside the field's allow-list.
    pub fn not_allowed(name: impl Into<String>, value: &str) -> Self {
        Self::new(name, format!("Value ({}) not allowed", value))
    }

    /// A string whose length falls outside the configured bounds.
    /// Unset bounds are reported as 0.
    pub fn invalid_length(name: impl Into<String>, len: usize, min: u32, max: u32) -> Self {
        Self::new(
            name,
            format!("Invalid Length, have ({}), want min({}), max ({})", len, min, max),
        )
    }

    /// An integer outside the configured range. Unset bounds are
    /// reported as 0.
    pub fn invalid_value(name: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::new(
            name,
            format!("Invalid Value, have ({}), want min({}), max ({})", value, min, max),
        )
    }

    /// A string that does not match the field's pattern.
    pub fn pattern_mismatch(name: impl Into<String>, value: &str, pattern: &str) -> Self {
        Self::new(name, format!("Value ({}) does not match ({})", value, pattern))
    }
}

/// Ordered collection of violations with a soft capacity cap.
///
/// Append operations report overflow; they never drop entries. The cap
/// bounds subsequent work, not output already produced: one merge may
/// carry the collection well past the cap, and the caller stops feeding
/// it once the flag comes back true.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation, if any. Returns true when an insertion
    /// occurred and the collection now exceeds the cap; appending
    /// nothing never reports overflow.
    pub fn push(&mut self, violation: Option<Violation>) -> bool {
        match violation {
            Some(v) => {
                self.violations.push(v);
                self.violations.len() > MAX_VIOLATIONS
            }
            None => false,
        }
    }

    /// Append every violation of a batch, unconditionally; a batch is one
    /// logical unit and is never truncated mid-way. The flag reflects the
    /// state after the last insertion; an empty batch never reports
    /// overflow.
    pub fn merge(&mut self, other: Violations) -> bool {
        let mut overflowed = false;
        for v in other.violations {
            self.violations.push(v);
            overflowed = self.violations.len() > MAX_VIOLATIONS;
        }
        overflowed
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Get all violations in insertion order.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the collection, yielding the violations in insertion order.
    pub fn into_vec(self) -> Vec<Violation> {
        self.violations
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
