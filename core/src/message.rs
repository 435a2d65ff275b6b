//! Dynamic message instances.
//!
//! A message carries the full name of its schema type plus the fields
//! that were explicitly set on it. Fields never set simply have no entry.

use crate::{FieldValue, Fields};

/// One message instance, addressed through its schema type name.
///
/// Scalar accessors return the zero value when a field is unset: the wire
/// format carries no presence bit for scalars, so a zero-valued and an
/// absent scalar are indistinguishable here. Nested messages do have
/// explicit presence: `get_message` returns `None` for an unset field.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Full name of the message type in the schema.
    type_name: String,
    /// Field values, keyed by short field name.
    fields: Fields,
}

impl Message {
    /// Create a new message with the given fields.
    pub fn new(type_name: impl Into<String>, fields: Fields) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Create a message with no fields set.
    pub fn empty(type_name: impl Into<String>) -> Self {
        Self::new(type_name, Fields::new())
    }

    /// Full name of this message's schema type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get a raw field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a field value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// String value of a field. Empty when unset or not a string.
    pub fn get_str(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Str(s)) => s,
            _ => "",
        }
    }

    /// Integer value of a field. Zero when unset or not an integer.
    pub fn get_int(&self, name: &str) -> i64 {
        match self.fields.get(name) {
            Some(FieldValue::Int(i)) => *i,
            _ => 0,
        }
    }

    /// Nested message of a field, if present.
    pub fn get_message(&self, name: &str) -> Option<&Message> {
        match self.fields.get(name) {
            Some(FieldValue::Message(m)) => Some(m),
            _ => None,
        }
    }

    /// Nested messages of a repeated field. Empty when unset.
    pub fn get_message_list(&self, name: &str) -> &[Message] {
        match self.fields.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    #[test]
    fn test_scalar_defaults() {
        let msg = Message::empty("demo.Request");
        assert_eq!(msg.get_str("name"), "");
        assert_eq!(msg.get_int("count"), 0);
        assert!(msg.get_message("inner").is_none());
        assert!(msg.get_message_list("items").is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut msg = Message::empty("demo.Request");
        msg.set("name", "Alice");
        msg.set("count", 5i64);

        assert_eq!(msg.get_str("name"), "Alice");
        assert_eq!(msg.get_int("count"), 5);
    }

    #[test]
    fn test_nested_presence() {
        // GIVEN a message with one nested field set
        let inner = Message::new("demo.Inner", fields! { "id" => 1i64 });
        let msg = Message::new("demo.Outer", fields! { "inner" => inner });

        // THEN presence is explicit for nested messages
        assert!(msg.get_message("inner").is_some());
        assert!(msg.get_message("other").is_none());
    }

    #[test]
    fn test_message_list() {
        let items = vec![Message::empty("demo.Item"), Message::empty("demo.Item")];
        let msg = Message::new("demo.Order", fields! { "items" => items });
        assert_eq!(msg.get_message_list("items").len(), 2);
    }
}
