//! Schema definition types.

use muster_core::FieldKind;

/// Field definition within a message type.
///
/// Constraint parameters are stored as typed fields, populated once when
/// the schema is built. A zero length or range bound means no bound on
/// that side, mirroring the wire format's unset sentinel.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Short field name, unique within the message.
    pub name: String,
    /// Fully-qualified name, assigned when the message is registered.
    pub full_name: String,
    /// Field kind.
    pub kind: FieldKind,
    /// Whether this field holds zero-or-more values of `kind`.
    pub repeated: bool,
    /// Whether this field must carry a non-absent, non-zero value.
    pub required: bool,
    /// Full name of the nested message type (message kind only).
    pub message_type: Option<String>,
    /// Minimum string length constraint.
    pub min_length: Option<u32>,
    /// Maximum string length constraint.
    pub max_length: Option<u32>,
    /// Allowed string values. Empty means any value.
    pub allowed_values: Vec<String>,
    /// Match pattern constraint (regex).
    pub match_pattern: Option<String>,
    /// Minimum integer value constraint.
    pub min: Option<i64>,
    /// Maximum integer value constraint.
    pub max: Option<i64>,
}

impl FieldDescriptor {
    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            full_name: String::new(),
            kind,
            repeated: false,
            required: false,
            message_type: None,
            min_length: None,
            max_length: None,
            allowed_values: Vec::new(),
            match_pattern: None,
            min: None,
            max: None,
        }
    }

    /// A string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::String)
    }

    /// A 64-bit integer field.
    pub fn int64(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Int64)
    }

    /// A 32-bit integer field.
    pub fn int32(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Int32)
    }

    /// A nested message field of the given message type.
    pub fn message(name: impl Into<String>, message_type: impl Into<String>) -> Self {
        let mut field = Self::with_kind(name, FieldKind::Message);
        field.message_type = Some(message_type.into());
        field
    }

    /// A field of a kind the validator does not evaluate.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Unsupported)
    }

    /// Mark this field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark this field as repeated.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Set string length bounds. Zero means no bound on that side.
    pub fn with_length(mut self, min: u32, max: u32) -> Self {
        self.min_length = (min != 0).then_some(min);
        self.max_length = (max != 0).then_some(max);
        self
    }

    /// Restrict the field to an enumerated set of values.
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set a match pattern (regex) constraint.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }

    /// Set integer value bounds. Zero means no bound on that side.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = (min != 0).then_some(min);
        self.max = (max != 0).then_some(max);
        self
    }

    /// Whether any string constraint is configured on this field.
    pub fn has_string_constraints(&self) -> bool {
        self.min_length.is_some()
            || self.max_length.is_some()
            || !self.allowed_values.is_empty()
            || self.match_pattern.is_some()
    }

    /// Whether any integer constraint is configured on this field.
    pub fn has_int_constraints(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Message type definition.
#[derive(Debug, Clone)]
pub struct MessageDescriptor {
    /// Fully-qualified message type name.
    pub full_name: String,
    /// Field definitions in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            fields: Vec::new(),
        }
    }

    /// Get a field definition by short name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this message has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
