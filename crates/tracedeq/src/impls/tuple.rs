use crate::reflect::{Field, Reflect, Shape};

/// Tuples are records whose fields are named by position.
macro_rules! impl_reflect_tuple {
    ($(($($name:ident $index:tt),+))+) => {
        $(
            impl<$($name: Reflect),+> Reflect for ($($name,)+) {
                fn shape(&self) -> Shape<'_> {
                    Shape::Record(vec![$(Field::new(stringify!($index), &self.$index)),+])
                }
            }
        )+
    };
}

impl_reflect_tuple! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
}
