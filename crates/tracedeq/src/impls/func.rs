use crate::reflect::{Reflect, Shape};

// Function pointers are never null; an unassigned callable is written as
// `Option<fn(..)>` and handled by the optional policy.
macro_rules! impl_reflect_fn {
    ($(($($arg:ident),*))+) => {
        $(
            impl<R, $($arg),*> Reflect for fn($($arg),*) -> R {
                fn shape(&self) -> Shape<'_> {
                    Shape::Func { assigned: true }
                }
            }
        )+
    };
}

impl_reflect_fn! {
    ()
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
}
