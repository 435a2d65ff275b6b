//! Field kinds.
//!
//! Every schema field has exactly one kind. The kind set is closed, and
//! dispatch over `FieldKind` is always an exhaustive match; adding a
//! kind is a compile-time decision at every dispatch site.

use std::fmt;

/// The scalar or structural category of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Nested message.
    Message,
    /// UTF-8 string.
    String,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit signed integer.
    Int32,
    /// Any other wire kind (bool, float, bytes, enum, map).
    Unsupported,
}

impl FieldKind {
    /// Returns true if this is the message kind.
    pub fn is_message(&self) -> bool {
        matches!(self, FieldKind::Message)
    }

    /// Returns true if this is a scalar kind (string or integer).
    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldKind::String | FieldKind::Int64 | FieldKind::Int32)
    }

    /// Returns the kind name.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Message => "Message",
            FieldKind::String => "String",
            FieldKind::Int64 => "Int64",
            FieldKind::Int32 => "Int32",
            FieldKind::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
