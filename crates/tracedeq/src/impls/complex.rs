use num_complex::Complex;

use crate::outcome::Scalar;
use crate::reflect::{Reflect, Shape};

macro_rules! impl_reflect_complex {
    ($($ty:ty),+) => {
        $(
            impl Reflect for Complex<$ty> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::Complex(f64::from(self.re), f64::from(self.im)))
                }
            }
        )+
    };
}

impl_reflect_complex!(f32, f64);
