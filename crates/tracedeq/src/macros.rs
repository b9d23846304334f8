/// Implements [`Reflect`](crate::Reflect) for a struct as a record.
///
/// Fields are listed in declaration order, by name or, for tuple structs, by
/// index. Metadata is attached to named fields with attribute syntax;
/// `#[tracedeq(ignore)]` removes the field from comparison. Generic structs use
/// the `impl<..>` form, which bounds every parameter by `Reflect`.
///
/// ```
/// use tracedeq::{deep_equal, reflect_record};
///
/// struct Row {
///     id: u64,
///     name: String,
/// }
/// reflect_record!(Row {
///     #[tracedeq(ignore)]
///     id,
///     name,
/// });
///
/// struct Tagged<T>(T, u8);
/// reflect_record!(impl<T> Tagged<T> { 0, 1 });
///
/// let a = Row { id: 1, name: "a".into() };
/// let b = Row { id: 2, name: "a".into() };
/// assert!(deep_equal(&a, &b).is_equal());
/// assert!(deep_equal(&Tagged(1u8, 0), &Tagged(1u8, 0)).is_equal());
/// ```
#[macro_export]
macro_rules! reflect_record {
    (impl<$($g:ident),+> $ty:ty {
        $( $(#[$key:ident($first:ident $(, $rest:ident)*)])* $field:ident ),* $(,)?
    }) => {
        impl<$($g: $crate::Reflect),+> $crate::Reflect for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(vec![$(
                    $crate::Field::new(stringify!($field), &self.$field).with_tags(&[$((
                        stringify!($key),
                        concat!(stringify!($first) $(, ",", stringify!($rest))*),
                    )),*])
                ),*])
            }
        }
    };
    (impl<$($g:ident),+> $ty:ty { $($index:tt),* $(,)? }) => {
        impl<$($g: $crate::Reflect),+> $crate::Reflect for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(vec![$(
                    $crate::Field::new(stringify!($index), &self.$index)
                ),*])
            }
        }
    };
    ($ty:ty {
        $( $(#[$key:ident($first:ident $(, $rest:ident)*)])* $field:ident ),* $(,)?
    }) => {
        impl $crate::Reflect for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(vec![$(
                    $crate::Field::new(stringify!($field), &self.$field).with_tags(&[$((
                        stringify!($key),
                        concat!(stringify!($first) $(, ",", stringify!($rest))*),
                    )),*])
                ),*])
            }
        }
    };
    ($ty:ty { $($index:tt),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(vec![$(
                    $crate::Field::new(stringify!($index), &self.$index)
                ),*])
            }
        }
    };
}

/// Asserts that two values are deeply equal, reporting the trace to the first
/// divergence and both differing values on failure.
#[macro_export]
macro_rules! assert_deep_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                let outcome = $crate::deep_equal(left, right);
                if !outcome.is_equal() {
                    panic!("deep equality assertion failed {}", outcome);
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                let outcome = $crate::deep_equal(left, right);
                if !outcome.is_equal() {
                    panic!(
                        "deep equality assertion failed {}: {}",
                        outcome,
                        format_args!($($arg)+)
                    );
                }
            }
        }
    };
}
