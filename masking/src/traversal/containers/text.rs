//! Textual leaves: the only values content filters rewrite.

use std::borrow::Cow;

use crate::traversal::{Maskable, Shape, Walker};

impl Maskable for String {
    const SHAPE: Shape = Shape::Text;

    fn zeroed() -> Self {
        String::new()
    }

    fn map_text<F: FnOnce(&str) -> String>(&self, f: F) -> Option<Self> {
        Some(f(self))
    }

    fn walk(&self, walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
        walker.replace_text(self)
    }
}

impl Maskable for Cow<'static, str> {
    const SHAPE: Shape = Shape::Text;

    fn zeroed() -> Self {
        Cow::Borrowed("")
    }

    fn map_text<F: FnOnce(&str) -> String>(&self, f: F) -> Option<Self> {
        Some(Cow::Owned(f(self)))
    }

    fn walk(&self, walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
        Cow::Owned(walker.replace_text(self))
    }
}

impl Maskable for Box<str> {
    const SHAPE: Shape = Shape::Text;

    fn zeroed() -> Self {
        Box::default()
    }

    fn map_text<F: FnOnce(&str) -> String>(&self, f: F) -> Option<Self> {
        Some(f(self).into_boxed_str())
    }

    fn walk(&self, walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
        walker.replace_text(self).into_boxed_str()
    }
}
