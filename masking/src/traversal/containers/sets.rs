//! Masking traversal for set containers.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::traversal::{Maskable, Shape, Walker};

impl<T, S> Maskable for HashSet<T, S>
where
    T: Maskable + Hash + Eq,
    S: BuildHasher + Clone + Default + 'static,
{
    const SHAPE: Shape = Shape::Sequence;

    fn zeroed() -> Self {
        HashSet::default()
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, _tag: &str) -> Self {
        let mut copy = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        copy.extend(self.iter().map(|item| walker.visit(field, item, "")));
        copy
    }
}

impl<T> Maskable for BTreeSet<T>
where
    T: Maskable + Ord,
{
    const SHAPE: Shape = Shape::Sequence;

    fn zeroed() -> Self {
        BTreeSet::new()
    }

    fn walk(&self, walker: &Walker<'_>, field: &str, _tag: &str) -> Self {
        self.iter().map(|item| walker.visit(field, item, "")).collect()
    }
}
