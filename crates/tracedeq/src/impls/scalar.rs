use std::borrow::Cow;

use crate::outcome::Scalar;
use crate::reflect::{Reflect, Shape};

macro_rules! impl_reflect_scalar {
    ($variant:ident as $wide:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::$variant(<$wide>::from(*self)))
                }
            }
        )+
    };
}

impl_reflect_scalar!(Int as i128: i8, i16, i32, i64, i128);
impl_reflect_scalar!(Uint as u128: u8, u16, u32, u64, u128);
impl_reflect_scalar!(Float as f64: f32, f64);
impl_reflect_scalar!(Bool as bool: bool);
impl_reflect_scalar!(Char as char: char);

impl Reflect for isize {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Int(*self as i128))
    }
}

impl Reflect for usize {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Uint(*self as u128))
    }
}

impl Reflect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

impl Reflect for &str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

impl Reflect for Box<str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

impl Reflect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

impl Reflect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Nil
    }
}
