//! SchemaBuilder for constructing an immutable Schema.

use crate::{FieldDescriptor, MessageDescriptor, Schema};
use muster_core::FieldKind;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during schema construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate message name: {0}")]
    DuplicateMessageName(String),

    #[error("Duplicate field name {field} on message {message}")]
    DuplicateFieldName { message: String, field: String },

    #[error("Unknown message type {type_name} referenced by field {field}")]
    UnknownMessageType { field: String, type_name: String },

    #[error("Message field {0} has no message type")]
    MissingMessageType(String),

    #[error("Constraint {constraint} does not apply to {kind} field {field}")]
    ConstraintKindMismatch {
        field: String,
        constraint: &'static str,
        kind: FieldKind,
    },

    #[error("Repeated field {0} must be of message kind")]
    RepeatedFieldNotMessage(String),

    #[error("Invalid match pattern on field {field}: {message}")]
    InvalidPattern { field: String, message: String },
}

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Builder for constructing an immutable Schema.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Messages registered so far, in registration order.
    messages: Vec<MessageDescriptor>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message type definition.
    pub fn add_message(&mut self, full_name: impl Into<String>) -> MessageBuilder<'_> {
        MessageBuilder {
            builder: self,
            full_name: full_name.into(),
            fields: Vec::new(),
        }
    }

    /// Build the immutable Schema.
    ///
    /// Nested type references are resolved here rather than at
    /// registration time, so messages may reference types registered
    /// later (or themselves).
    pub fn build(self) -> SchemaResult<Schema> {
        let mut messages = HashMap::new();
        for desc in &self.messages {
            messages.insert(desc.full_name.clone(), desc.clone());
        }

        for desc in &self.messages {
            for field in &desc.fields {
                if field.kind == FieldKind::Message {
                    match &field.message_type {
                        Some(type_name) => {
                            if !messages.contains_key(type_name) {
                                return Err(SchemaError::UnknownMessageType {
                                    field: field.full_name.clone(),
                                    type_name: type_name.clone(),
                                });
                            }
                        }
                        None => {
                            return Err(SchemaError::MissingMessageType(field.full_name.clone()))
                        }
                    }
                }
            }
        }

        Ok(Schema::new(messages))
    }
}

/// Scoped builder for one message type.
pub struct MessageBuilder<'b> {
    builder: &'b mut SchemaBuilder,
    full_name: String,
    fields: Vec<FieldDescriptor>,
}

impl MessageBuilder<'_> {
    /// Add a field definition.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Register the message on the schema builder.
    pub fn done(self) -> SchemaResult<()> {
        if self
            .builder
            .messages
            .iter()
            .any(|m| m.full_name == self.full_name)
        {
            return Err(SchemaError::DuplicateMessageName(self.full_name));
        }

        let mut desc = MessageDescriptor::new(self.full_name.clone());
        for mut field in self.fields {
            if desc.has_field(&field.name) {
                return Err(SchemaError::DuplicateFieldName {
                    message: self.full_name,
                    field: field.name,
                });
            }
            validate_field(&self.full_name, &field)?;
            field.full_name = format!("{}.{}", self.full_name, field.name);
            desc.fields.push(field);
        }

        self.builder.messages.push(desc);
        Ok(())
    }
}

/// Check that a field's constraints match its kind and that any match
/// pattern compiles, so the evaluator never sees a malformed descriptor.
fn validate_field(message: &str, field: &FieldDescriptor) -> SchemaResult<()> {
    let full_name = || format!("{}.{}", message, field.name);

    if field.repeated && field.kind != FieldKind::Message {
        return Err(SchemaError::RepeatedFieldNotMessage(full_name()));
    }

    if field.kind != FieldKind::String {
        if field.min_length.is_some() || field.max_length.is_some() {
            return Err(SchemaError::ConstraintKindMismatch {
                field: full_name(),
                constraint: "length",
                kind: field.kind,
            });
        }
        if !field.allowed_values.is_empty() {
            return Err(SchemaError::ConstraintKindMismatch {
                field: full_name(),
                constraint: "allowed",
                kind: field.kind,
            });
        }
        if field.match_pattern.is_some() {
            return Err(SchemaError::ConstraintKindMismatch {
                field: full_name(),
                constraint: "pattern",
                kind: field.kind,
            });
        }
    }

    if !matches!(field.kind, FieldKind::Int64 | FieldKind::Int32) && field.has_int_constraints() {
        return Err(SchemaError::ConstraintKindMismatch {
            field: full_name(),
            constraint: "range",
            kind: field.kind,
        });
    }

    if let Some(pattern) = &field.match_pattern {
        if let Err(e) = regex_lite::Regex::new(pattern) {
            return Err(SchemaError::InvalidPattern {
                field: full_name(),
                message: e.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple_schema() {
        // GIVEN
        let mut builder = SchemaBuilder::new();
        builder
            .add_message("demo.Address")
            .field(FieldDescriptor::string("street").required())
            .field(FieldDescriptor::string("city"))
            .done()
            .unwrap();
        builder
            .add_message("demo.Person")
            .field(FieldDescriptor::string("name").required().with_length(2, 40))
            .field(FieldDescriptor::message("address", "demo.Address").required())
            .done()
            .unwrap();

        // WHEN
        let schema = builder.build().unwrap();

        // THEN
        assert_eq!(schema.message_count(), 2);
        let name = schema.get_field("demo.Person", "name").unwrap();
        assert_eq!(name.full_name, "demo.Person.name");
        assert_eq!(name.min_length, Some(2));
    }

    #[test]
    fn test_forward_reference_resolves() {
        // demo.Person references demo.Address before it is registered.
        let mut builder = SchemaBuilder::new();
        builder
            .add_message("demo.Person")
            .field(FieldDescriptor::message("address", "demo.Address"))
            .done()
            .unwrap();
        builder
            .add_message("demo.Address")
            .field(FieldDescriptor::string("street"))
            .done()
            .unwrap();

        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_duplicate_message_name() {
        let mut builder = SchemaBuilder::new();
        builder.add_message("demo.Request").done().unwrap();
        let result = builder.add_message("demo.Request").done();
        assert!(matches!(result, Err(SchemaError::DuplicateMessageName(_))));
    }

    #[test]
    fn test_duplicate_field_name() {
        let mut builder = SchemaBuilder::new();
        let result = builder
            .add_message("demo.Request")
            .field(FieldDescriptor::string("name"))
            .field(FieldDescriptor::int64("name"))
            .done();
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateFieldName { .. })
        ));
    }

    #[test]
    fn test_unknown_message_type() {
        let mut builder = SchemaBuilder::new();
        builder
            .add_message("demo.Request")
            .field(FieldDescriptor::message("inner", "demo.Missing"))
            .done()
            .unwrap();
        let result = builder.build();
        assert!(matches!(
            result,
            Err(SchemaError::UnknownMessageType { .. })
        ));
    }

    #[test]
    fn test_length_constraint_rejected_on_int() {
        let mut builder = SchemaBuilder::new();
        let result = builder
            .add_message("demo.Request")
            .field(FieldDescriptor::int64("count").with_length(1, 5))
            .done();
        assert!(matches!(
            result,
            Err(SchemaError::ConstraintKindMismatch {
                constraint: "length",
                ..
            })
        ));
    }

    #[test]
    fn test_range_constraint_rejected_on_string() {
        let mut builder = SchemaBuilder::new();
        let result = builder
            .add_message("demo.Request")
            .field(FieldDescriptor::string("name").with_range(1, 5))
            .done();
        assert!(matches!(
            result,
            Err(SchemaError::ConstraintKindMismatch {
                constraint: "range",
                ..
            })
        ));
    }

    #[test]
    fn test_repeated_scalar_rejected() {
        let mut builder = SchemaBuilder::new();
        let result = builder
            .add_message("demo.Request")
            .field(FieldDescriptor::string("tags").repeated())
            .done();
        assert!(matches!(
            result,
            Err(SchemaError::RepeatedFieldNotMessage(_))
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut builder = SchemaBuilder::new();
        let result = builder
            .add_message("demo.Request")
            .field(FieldDescriptor::string("code").with_pattern("["))
            .done();
        assert!(matches!(result, Err(SchemaError::InvalidPattern { .. })));
    }

    #[test]
    fn test_range_allowed_on_int32() {
        // int32 fields may declare a range even though the validator
        // never evaluates them.
        let mut builder = SchemaBuilder::new();
        let result = builder
            .add_message("demo.Request")
            .field(FieldDescriptor::int32("retries").with_range(1, 5))
            .done();
        assert!(result.is_ok());
    }
}
