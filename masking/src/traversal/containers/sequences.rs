//! Ordered sequences.
//!
//! Elements are visited under the sequence's own field name with an empty
//! tag, so a field filter that names a sequence masks it as a whole while
//! content filters still reach every element.

use std::collections::VecDeque;

use crate::traversal::{Maskable, Shape, Walker};

impl<T: Maskable> Maskable for Vec<T> {
    const SHAPE: Shape = Shape::Sequence;

    fn zeroed() -> Self {
        Vec::new()
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, _tag: &str) -> Self {
        let mut copy = Vec::with_capacity(self.capacity());
        copy.extend(self.iter().map(|item| walker.visit(field, item, "")));
        copy
    }
}

impl<T: Maskable> Maskable for VecDeque<T> {
    const SHAPE: Shape = Shape::Sequence;

    fn zeroed() -> Self {
        VecDeque::new()
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, _tag: &str) -> Self {
        self.iter().map(|item| walker.visit(field, item, "")).collect()
    }
}

impl<T: Maskable, const N: usize> Maskable for [T; N] {
    const SHAPE: Shape = Shape::Sequence;

    fn zeroed() -> Self {
        std::array::from_fn(|_| T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, _tag: &str) -> Self {
        std::array::from_fn(|index| walker.visit(field, &self[index], ""))
    }
}
