//! Muster Core Types
//!
//! This crate provides the foundational types used throughout Muster:
//! - Field kinds (the closed `FieldKind` set)
//! - Field values (the `FieldValue` enum with scalar, message, and list variants)
//! - Message instances (the dynamic `Message` structure)

mod kind;
mod message;
mod value;

pub use kind::*;
pub use message::*;
pub use value::*;
