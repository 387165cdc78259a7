//! Dynamic values: `serde_json::Value` plays the role of an untyped slot.
//!
//! Only a top-level string is rewritten by content filters; nested arrays
//! and objects are copied unchanged.

use serde_json::Value;

use crate::traversal::{Maskable, Shape, Walker};

impl Maskable for Value {
    const SHAPE: Shape = Shape::Dynamic;

    fn zeroed() -> Self {
        Value::Null
    }

    fn walk(&self, walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
        match self {
            Value::String(text) => Value::String(walker.replace_text(text)),
            other => other.clone(),
        }
    }
}
