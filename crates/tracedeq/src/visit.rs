//! Visited-set tracker that breaks cycles in self-referential graphs.

use std::collections::HashSet;

use crate::reflect::Reflect;

/// Identity of a pair of references already being compared.
///
/// The pair is canonicalized (smaller address first) so that `(x, y)` and
/// `(y, x)` share one entry. Addresses are stable because every walked value
/// stays borrowed for the whole comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Visit {
    first: usize,
    second: usize,
    type_name: &'static str,
}

impl Visit {
    pub(crate) fn new(x: usize, y: usize, type_name: &'static str) -> Self {
        let (first, second) = if x > y { (y, x) } else { (x, y) };
        Self {
            first,
            second,
            type_name,
        }
    }
}

/// Visit records of one top-level comparison.
#[derive(Debug, Default)]
pub(crate) struct Visited(HashSet<Visit>);

impl Visited {
    /// Records `visit`; returns `false` if it was already present.
    pub(crate) fn insert(&mut self, visit: Visit) -> bool {
        self.0.insert(visit)
    }
}

/// Address of a borrowed value.
pub(crate) fn address(value: &dyn Reflect) -> usize {
    value as *const dyn Reflect as *const () as usize
}
