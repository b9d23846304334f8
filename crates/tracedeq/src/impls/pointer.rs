use std::rc::Rc;
use std::sync::Arc;

use crate::reflect::{Reflect, Shape};

macro_rules! impl_reflect_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: Reflect> Reflect for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Pointer(&**self)
                }
            }
        )+
    };
}

impl_reflect_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(*self)
    }
}

impl Reflect for &dyn Reflect {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(*self)
    }
}

impl Reflect for Box<dyn Reflect> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(&**self)
    }
}
