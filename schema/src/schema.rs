//! The Schema - immutable message type lookup.

use crate::{FieldDescriptor, MessageDescriptor};
use std::collections::HashMap;

/// Runtime lookup of message type definitions.
/// It is immutable after construction; use SchemaBuilder to create one.
#[derive(Debug)]
pub struct Schema {
    /// Message definitions by full name.
    messages: HashMap<String, MessageDescriptor>,
}

impl Schema {
    pub(crate) fn new(messages: HashMap<String, MessageDescriptor>) -> Self {
        Self { messages }
    }

    /// Get a message definition by full name.
    pub fn get_message(&self, full_name: &str) -> Option<&MessageDescriptor> {
        self.messages.get(full_name)
    }

    /// Check if a message type is registered.
    pub fn has_message(&self, full_name: &str) -> bool {
        self.messages.contains_key(full_name)
    }

    /// Get a field definition on a message type.
    pub fn get_field(&self, message: &str, field: &str) -> Option<&FieldDescriptor> {
        self.messages.get(message).and_then(|m| m.get_field(field))
    }

    /// Get all message definitions.
    pub fn all_messages(&self) -> impl Iterator<Item = &MessageDescriptor> {
        self.messages.values()
    }

    /// Get the number of registered message types.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
