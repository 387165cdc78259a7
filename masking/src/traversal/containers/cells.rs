//! Cell-like and lock containers.
//!
//! A value that is mutably borrowed or locked elsewhere cannot be read; the
//! copy then holds the zeroed value instead of blocking or panicking.

use std::{
    cell::{Cell, RefCell},
    sync::{Mutex, RwLock},
};

use crate::traversal::{Maskable, Shape, Walker};

impl<T: Maskable> Maskable for RefCell<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        RefCell::new(T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        let copy = self
            .try_borrow()
            .map_or_else(|_| T::zeroed(), |value| walker.visit(field, &*value, tag));
        RefCell::new(copy)
    }
}

impl<T: Maskable + Copy> Maskable for Cell<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        Cell::new(T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        Cell::new(walker.visit(field, &self.get(), tag))
    }
}

impl<T: Maskable> Maskable for Mutex<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        Mutex::new(T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        let copy = self
            .try_lock()
            .map_or_else(|_| T::zeroed(), |value| walker.visit(field, &*value, tag));
        Mutex::new(copy)
    }
}

impl<T: Maskable> Maskable for RwLock<T> {
    const SHAPE: Shape = Shape::Reference;

    fn zeroed() -> Self {
        RwLock::new(T::zeroed())
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, tag: &str) -> Self {
        let copy = self
            .try_read()
            .map_or_else(|_| T::zeroed(), |value| walker.visit(field, &*value, tag));
        RwLock::new(copy)
    }
}
