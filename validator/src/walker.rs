//! Recursive message validation.

use crate::rules::{evaluate_int64, evaluate_string};
use crate::violation::{Violation, Violations};
use muster_core::{FieldKind, Message};
use muster_schema::{FieldDescriptor, Schema};

/// Message validator.
///
/// Walks a message's fields in declaration order, dispatches the rule
/// matching each field's kind, and recurses into required nested
/// messages. Traversal of a message stops once its accumulated
/// violations overflow the soft cap; sub-results already merged are
/// kept.
pub struct Validator<'s> {
    schema: &'s Schema,
}

impl<'s> Validator<'s> {
    /// Create a new validator over a schema.
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Validate one message. An empty result means no violations.
    pub fn validate(&self, message: &Message) -> Vec<Violation> {
        self.walk(message).into_vec()
    }

    /// Depth-first, pre-order walk of one message.
    fn walk(&self, message: &Message) -> Violations {
        let mut violations = Violations::new();

        // A type the schema does not know contributes nothing; the
        // builder makes this unreachable for schemas it produced.
        let descriptor = match self.schema.get_message(message.type_name()) {
            Some(d) => d,
            None => return violations,
        };

        for field in &descriptor.fields {
            let overflowed = match field.kind {
                FieldKind::Message => self.check_message_field(&mut violations, field, message),
                FieldKind::String => {
                    violations.push(evaluate_string(field, message.get_str(&field.name)))
                }
                FieldKind::Int64 => {
                    violations.push(evaluate_int64(field, message.get_int(&field.name)))
                }
                // Int32 matches no evaluation rule; such fields are never
                // checked for required-ness or range.
                FieldKind::Int32 => false,
                FieldKind::Unsupported => false,
            };

            if overflowed {
                break;
            }
        }

        violations
    }

    /// Check a message-kind field. Only required fields are inspected; a
    /// non-required nested message is never recursed into, even when
    /// present.
    fn check_message_field(
        &self,
        violations: &mut Violations,
        field: &FieldDescriptor,
        message: &Message,
    ) -> bool {
        if !field.required {
            return false;
        }

        if field.repeated {
            // List elements cannot be absent; each one is validated.
            for element in message.get_message_list(&field.name) {
                if violations.merge(self.walk(element)) {
                    return true;
                }
            }
            return false;
        }

        match message.get_message(&field.name) {
            Some(nested) => violations.merge(self.walk(nested)),
            None => {
                // An absent field is not addressable itself; the
                // violation carries the nested type's full name.
                let type_name = field.message_type.as_deref().unwrap_or(&field.full_name);
                violations.push(Some(Violation::mandatory(type_name)))
            }
        }
    }
}

/// Collect the violations for one message against a schema.
///
/// Never fails: an empty list means the message satisfies every declared
/// constraint.
pub fn get_violations(schema: &Schema, message: &Message) -> Vec<Violation> {
    Validator::new(schema).validate(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use muster_core::fields;
    use muster_schema::{FieldDescriptor, SchemaBuilder};

    fn schema() -> Schema {
        let mut builder = SchemaBuilder::new();
        builder
            .add_message("demo.Request")
            .field(FieldDescriptor::string("name").required())
            .field(FieldDescriptor::int64("count").with_range(1, 10))
            .done()
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_valid_message_yields_nothing() {
        let schema = schema();
        let msg = Message::new("demo.Request", fields! { "name" => "ok", "count" => 5i64 });
        assert!(get_violations(&schema, &msg).is_empty());
    }

    #[test]
    fn test_violations_follow_declaration_order() {
        let schema = schema();
        let msg = Message::new("demo.Request", fields! { "count" => 20i64 });

        let violations = get_violations(&schema, &msg);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "demo.Request.name");
        assert_eq!(violations[1].field, "count");
    }

    #[test]
    fn test_unknown_type_yields_nothing() {
        let schema = schema();
        let msg = Message::empty("demo.Unknown");
        assert!(get_violations(&schema, &msg).is_empty());
    }
}
