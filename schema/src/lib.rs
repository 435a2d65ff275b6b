//! Muster Schema
//!
//! Declare message types and their per-field constraints.
//!
//! Responsibilities:
//! - Describe fields: kind, required-ness, and typed constraint storage
//! - Assemble message descriptors with fields in declaration order
//! - Validate definitions at build time (names, type references,
//!   constraint/kind consistency, pattern syntax)
//! - Provide immutable by-name lookup for the validator
//!
//! Constraint parameters are turned into typed descriptor fields exactly
//! once, here; nothing downstream re-reads raw annotation storage.

mod builder;
mod schema;
mod types;

pub use builder::{MessageBuilder, SchemaBuilder, SchemaError, SchemaResult};
pub use schema::Schema;
pub use types::{FieldDescriptor, MessageDescriptor};
