//! Field values for message instances.
//!
//! Values are the atomic data stored in message fields. Muster supports
//! string and 64-bit integer scalars, explicitly-present nested messages,
//! and ordered lists of nested messages.

use crate::Message;
use std::fmt;

/// A value held by one field of a message instance.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 string.
    Str(String),
    /// 64-bit signed integer. Narrower integer fields are widened on
    /// construction; the wire format has no presence bit for scalars, so
    /// zero doubles as unset.
    Int(i64),
    /// A nested message. Storing one at all is the presence flag.
    Message(Message),
    /// An ordered list of nested messages.
    List(Vec<Message>),
}

impl FieldValue {
    /// Returns true if this is a string value.
    pub fn is_str(&self) -> bool {
        matches!(self, FieldValue::Str(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, FieldValue::Int(_))
    }

    /// Returns true if this is a nested message.
    pub fn is_message(&self) -> bool {
        matches!(self, FieldValue::Message(_))
    }

    /// Returns true if this is a list of nested messages.
    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }

    /// Get as string reference if this is a Str value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as message reference if this is a Message value.
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            FieldValue::Message(m) => Some(m),
            _ => None,
        }
    }

    /// Get as message slice if this is a List value.
    pub fn as_list(&self) -> Option<&[Message]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Str(_) => "Str",
            FieldValue::Int(_) => "Int",
            FieldValue::Message(_) => "Message",
            FieldValue::List(_) => "List",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "\"{}\"", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Message(m) => write!(f, "<{}>", m.type_name()),
            FieldValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "<{}>", item.type_name())?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenient From implementations
impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<Message> for FieldValue {
    fn from(m: Message) -> Self {
        FieldValue::Message(m)
    }
}

impl From<Vec<Message>> for FieldValue {
    fn from(items: Vec<Message>) -> Self {
        FieldValue::List(items)
    }
}

/// Type alias for field storage on a message instance.
pub type Fields = std::collections::HashMap<String, FieldValue>;

/// Helper macro to create field maps.
#[macro_export]
macro_rules! fields {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::FieldValue::from($value));
            )+
            map
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_checks() {
        assert!(FieldValue::Str("hello".into()).is_str());
        assert!(FieldValue::Int(42).is_int());
        assert!(FieldValue::Message(Message::empty("demo.Inner")).is_message());
        assert!(FieldValue::List(vec![]).is_list());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(FieldValue::Str("hello".into()).as_str(), Some("hello"));
        assert_eq!(FieldValue::Int(42).as_int(), Some(42));
        assert_eq!(FieldValue::Str("hello".into()).as_int(), None);

        let nested = FieldValue::Message(Message::empty("demo.Inner"));
        assert_eq!(nested.as_message().map(|m| m.type_name()), Some("demo.Inner"));
    }

    #[test]
    fn test_int32_widens() {
        assert_eq!(FieldValue::from(7i32), FieldValue::Int(7));
    }

    #[test]
    fn test_fields_macro() {
        let empty: Fields = fields!();
        assert!(empty.is_empty());

        let fields = fields! {
            "name" => "Alice",
            "age" => 30i64,
        };
        assert_eq!(fields.get("name"), Some(&FieldValue::Str("Alice".into())));
        assert_eq!(fields.get("age"), Some(&FieldValue::Int(30)));
    }
}
