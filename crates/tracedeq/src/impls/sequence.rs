use std::collections::{BTreeSet, VecDeque};

use crate::reflect::{Elements, Reflect, Shape};

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(Elements::from_slice(self))
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(Elements::from_slice(self))
    }
}

impl<T: Reflect> Reflect for &[T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(Elements::from_slice(self))
    }
}

impl<T: Reflect> Reflect for Box<[T]> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(Elements::from_slice(self))
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

/// Sets are walked in their (sorted) iteration order.
impl<T: Reflect> Reflect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}
