use std::cell::OnceCell;
use std::sync::OnceLock;

use crate::reflect::{Reflect, Shape};

impl<T: Reflect> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|v| v as &dyn Reflect))
    }
}

/// A set cell holds a value; an unset one holds none. Cells set after
/// construction are how cyclic `Rc` graphs are usually built.
impl<T: Reflect> Reflect for OnceCell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.get().map(|v| v as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for OnceLock<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.get().map(|v| v as &dyn Reflect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_cell_is_zero() {
        let cell: OnceCell<u8> = OnceCell::new();
        assert!(cell.is_zero());
        let _ = cell.set(0);
        assert!(!cell.is_zero());
    }

    #[test]
    fn none_is_zero() {
        assert!(None::<u8>.is_zero());
        assert!(!Some(0u8).is_zero());
    }
}
