//! Masking traversal for map containers (values only).

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Display,
    hash::{BuildHasher, Hash},
};

use crate::traversal::{Maskable, Shape, Walker};

impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Hash + Eq + Clone + Display + 'static,
    V: Maskable,
    S: BuildHasher + Clone + Default + 'static,
{
    const SHAPE: Shape = Shape::Map;

    fn zeroed() -> Self {
        HashMap::default()
    }

    fn walk(&self, walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
        let mut copy = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        copy.extend(
            self.iter()
                .map(|(key, value)| (key.clone(), walker.visit(&key.to_string(), value, ""))),
        );
        copy
    }
}

impl<K, V> Maskable for BTreeMap<K, V>
where
    K: Ord + Clone + Display + 'static,
    V: Maskable,
{
    const SHAPE: Shape = Shape::Map;

    fn zeroed() -> Self {
        BTreeMap::new()
    }

    fn walk(&self, walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), walker.visit(&key.to_string(), value, "")))
            .collect()
    }
}
