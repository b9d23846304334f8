//! Entry point of a comparison.

use crate::error::Error;
use crate::outcome::{Operand, Outcome};
use crate::reflect::{Reflect, Shape};
use crate::trace::{Path, Trace};
use crate::walk::Walker;

/// Deeply compares `x` and `y`, reporting the first divergence.
///
/// The unit value `()` acts as the "no value" sentinel: if either side is
/// `()`, the two are equal only when both are.
///
/// # Panics
///
/// Panics if the walk reaches a value whose shape is not supported (see
/// [`try_deep_equal`] for the non-panicking form). That is a usage error, not
/// a property of the compared data.
///
/// # Examples
///
/// ```
/// use tracedeq::{deep_equal, Operand};
///
/// let got = vec![1, 2, 3];
/// let want = vec![1, 2, 3, 4];
/// let outcome = deep_equal(&got, &want);
/// assert!(!outcome.is_equal());
/// assert_eq!(outcome.trace(), &["LENGTH"]);
/// assert_eq!(outcome.x(), Some(&Operand::Len(3)));
/// assert_eq!(outcome.y(), Some(&Operand::Len(4)));
/// ```
pub fn deep_equal<'a>(x: &'a dyn Reflect, y: &'a dyn Reflect) -> Outcome<'a> {
    match try_deep_equal(x, y) {
        Ok(outcome) => outcome,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`deep_equal`], but returns usage errors instead of panicking.
pub fn try_deep_equal<'a>(x: &'a dyn Reflect, y: &'a dyn Reflect) -> Result<Outcome<'a>, Error> {
    let (x_nil, y_nil) = (is_nil(x), is_nil(y));
    if x_nil || y_nil {
        if x_nil && y_nil {
            return Ok(Outcome::equal());
        }
        return Ok(Outcome::diverged(
            Trace::default(),
            Operand::of(x),
            Operand::of(y),
        ));
    }

    let outcome = Walker::new().walk(x, y, &Path::root())?;
    if !outcome.is_equal() {
        tracing::debug!(trace = %outcome.trace(), "values diverge");
    }
    Ok(outcome)
}

fn is_nil(value: &dyn Reflect) -> bool {
    matches!(value.shape(), Shape::Nil)
}
