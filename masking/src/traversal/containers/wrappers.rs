//! Transparent wrappers: filters see the wrapped value, not the wrapper.

use std::{rc::Rc, sync::Arc};

use crate::traversal::{Maskable, Shape, Walker};

// =============================================================================
// Wrapper container implementations
// =============================================================================

impl<T: Maskable> Maskable for Option<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        None
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        self.as_ref().map(|value| walker.visit(field, value, tag))
    }
}

impl<T: Maskable> Maskable for Box<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        Box::new(T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        Box::new(walker.visit(field, &**self, tag))
    }
}

impl<T: Maskable> Maskable for Rc<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        Rc::new(T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        Rc::new(walker.visit(field, &**self, tag))
    }
}

impl<T: Maskable> Maskable for Arc<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        Arc::new(T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        Arc::new(walker.visit(field, &**self, tag))
    }
}
