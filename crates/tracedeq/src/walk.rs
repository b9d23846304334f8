//! Traversal engine: the recursive, shape-dispatching equality walk.

use crate::error::Error;
use crate::filter::is_excluded;
use crate::outcome::{Operand, Outcome};
use crate::reflect::{Associative, Elements, Field, Reflect, Shape};
use crate::trace::{key_segment, Path, Segment, FUNC, LENGTH, TYPE};
use crate::visit::{address, Visit, Visited};

/// State of one top-level comparison.
#[derive(Debug, Default)]
pub(crate) struct Walker {
    visited: Visited,
}

impl Walker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn walk<'a>(
        &mut self,
        x: &'a dyn Reflect,
        y: &'a dyn Reflect,
        path: &Path<'_>,
    ) -> Result<Outcome<'a>, Error> {
        let type_name = x.type_name();
        if type_name != y.type_name() {
            return Ok(Outcome::diverged(
                path.trace_with(TYPE),
                Operand::Type(type_name),
                Operand::Type(y.type_name()),
            ));
        }

        let (sx, sy) = (x.shape(), y.shape());
        if is_reference(&sx, &sy) {
            let visit = Visit::new(address(x), address(y), type_name);
            if !self.visited.insert(visit) {
                tracing::trace!(type_name, "cycle short-circuit");
                return Ok(Outcome::equal());
            }
        }

        match (sx, sy) {
            (Shape::Unsupported, other) | (other, Shape::Unsupported) => {
                tracing::error!(
                    type_name,
                    other = other.kind(),
                    trace = %path.to_trace(),
                    "unsupported shape"
                );
                Err(Error::Unsupported { type_name })
            }
            (Shape::Nil, Shape::Nil) => Ok(Outcome::equal()),
            (Shape::Scalar(a), Shape::Scalar(b)) => {
                if a == b {
                    Ok(Outcome::equal())
                } else {
                    Ok(Outcome::diverged(
                        path.to_trace(),
                        Operand::Scalar(a),
                        Operand::Scalar(b),
                    ))
                }
            }
            (Shape::Array(a), Shape::Array(b)) => {
                if a.len() != b.len() {
                    return Err(Error::InconsistentShape {
                        type_name,
                        reason: "array lengths differ",
                    });
                }
                self.walk_elements(&a, &b, path)
            }
            (Shape::Slice(a), Shape::Slice(b)) => {
                if a.is_absent() != b.is_absent() {
                    return Ok(Outcome::diverged(
                        path.to_trace(),
                        Operand::Value(x),
                        Operand::Value(y),
                    ));
                }
                if a.len() != b.len() {
                    return Ok(Outcome::diverged(
                        path.trace_with(LENGTH),
                        Operand::Len(a.len()),
                        Operand::Len(b.len()),
                    ));
                }
                if a.storage().is_some() && a.storage() == b.storage() {
                    return Ok(Outcome::equal());
                }
                self.walk_elements(&a, &b, path)
            }
            (Shape::Optional(a), Shape::Optional(b)) => match (a, b) {
                (Some(a), Some(b)) => self.walk(a, b, path),
                (None, None) => Ok(Outcome::equal()),
                (a, b) => Ok(Outcome::diverged(
                    path.to_trace(),
                    a.map_or(Operand::Nil, Operand::of),
                    b.map_or(Operand::Nil, Operand::of),
                )),
            },
            (Shape::Pointer(a), Shape::Pointer(b)) => {
                if address(a) == address(b) {
                    return Ok(Outcome::equal());
                }
                self.walk(a, b, path)
            }
            (Shape::Record(a), Shape::Record(b)) => self.walk_record(type_name, &a, &b, path),
            (Shape::Map(a), Shape::Map(b)) => self.walk_map(x, y, a, b, path),
            (Shape::Func { assigned: false }, Shape::Func { assigned: false }) => {
                Ok(Outcome::equal())
            }
            (Shape::Func { .. }, Shape::Func { .. }) => Ok(Outcome::diverged(
                path.trace_with(FUNC),
                Operand::Value(x),
                Operand::Value(y),
            )),
            (a, b) => {
                tracing::error!(type_name, left = a.kind(), right = b.kind(), "shape kinds differ");
                Err(Error::InconsistentShape {
                    type_name,
                    reason: "shape kinds differ",
                })
            }
        }
    }

    fn walk_elements<'a>(
        &mut self,
        a: &Elements<'a>,
        b: &Elements<'a>,
        path: &Path<'_>,
    ) -> Result<Outcome<'a>, Error> {
        for (index, (ex, ey)) in a.iter().zip(b.iter()).enumerate() {
            let outcome = self.walk(ex, ey, &path.child(Segment::Index(index)))?;
            if !outcome.is_equal() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::equal())
    }

    fn walk_record<'a>(
        &mut self,
        type_name: &'static str,
        a: &[Field<'a>],
        b: &[Field<'a>],
        path: &Path<'_>,
    ) -> Result<Outcome<'a>, Error> {
        if a.len() != b.len() {
            return Err(Error::InconsistentShape {
                type_name,
                reason: "record field layouts differ",
            });
        }
        for (fx, fy) in a.iter().zip(b) {
            if fx.name() != fy.name() {
                return Err(Error::InconsistentShape {
                    type_name,
                    reason: "record field layouts differ",
                });
            }
            if is_excluded(fx, fy) {
                continue;
            }
            let (vx, vy) = (fx.value(), fy.value());
            let zero = vx.is_zero();
            if zero != vy.is_zero() {
                return Ok(Outcome::diverged(
                    path.child(Segment::Field(fx.name())).to_trace(),
                    Operand::of(vx),
                    Operand::of(vy),
                ));
            }
            if zero {
                continue;
            }
            let outcome = self.walk(vx, vy, &path.child(Segment::Field(fx.name())))?;
            if !outcome.is_equal() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::equal())
    }

    fn walk_map<'a>(
        &mut self,
        x: &'a dyn Reflect,
        y: &'a dyn Reflect,
        a: &'a dyn Associative,
        b: &'a dyn Associative,
        path: &Path<'_>,
    ) -> Result<Outcome<'a>, Error> {
        if a.is_absent() != b.is_absent() {
            return Ok(Outcome::diverged(
                path.to_trace(),
                Operand::Value(x),
                Operand::Value(y),
            ));
        }
        if a.len() != b.len() {
            return Ok(Outcome::diverged(
                path.trace_with(LENGTH),
                Operand::Len(a.len()),
                Operand::Len(b.len()),
            ));
        }
        if address(x) == address(y) {
            return Ok(Outcome::equal());
        }
        for (key, vx) in a.entries() {
            let child = path.child(Segment::Key(key_segment(key.as_reflect())));
            let Some(vy) = b.lookup(key) else {
                return Ok(Outcome::diverged(
                    child.to_trace(),
                    Operand::of(vx),
                    Operand::Missing,
                ));
            };
            let outcome = self.walk(vx, vy, &child)?;
            if !outcome.is_equal() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::equal())
    }
}

/// Shapes subject to the cycle guard, when present on both sides.
fn is_reference(x: &Shape<'_>, y: &Shape<'_>) -> bool {
    match (x, y) {
        (Shape::Slice(a), Shape::Slice(b)) => !a.is_absent() && !b.is_absent(),
        (Shape::Map(a), Shape::Map(b)) => !a.is_absent() && !b.is_absent(),
        (Shape::Pointer(_), Shape::Pointer(_)) => true,
        (Shape::Optional(a), Shape::Optional(b)) => a.is_some() && b.is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<'a>(x: &'a dyn Reflect, y: &'a dyn Reflect) -> Outcome<'a> {
        Walker::new().walk(x, y, &Path::root()).unwrap()
    }

    #[test]
    fn type_guard_reports_type_names() {
        let outcome = walk(&1u8, &1i8);
        assert_eq!(outcome.trace(), &[TYPE]);
        assert_eq!(outcome.x(), Some(&Operand::Type("u8")));
        assert_eq!(outcome.y(), Some(&Operand::Type("i8")));
    }

    #[test]
    fn length_is_checked_before_content() {
        let (x, y) = (vec![9, 2, 3], vec![1, 2, 3, 4]);
        let outcome = walk(&x, &y);
        assert_eq!(outcome.trace(), &[LENGTH]);
        assert_eq!(outcome.x(), Some(&Operand::Len(3)));
        assert_eq!(outcome.y(), Some(&Operand::Len(4)));
    }

    #[test]
    fn optional_reports_present_side() {
        let (x, y) = (Some(3u8), None::<u8>);
        let outcome = walk(&x, &y);
        assert!(outcome.trace().is_empty());
        assert_eq!(outcome.x(), Some(&Operand::Scalar(crate::Scalar::Uint(3))));
        assert_eq!(outcome.y(), Some(&Operand::Nil));
    }

    #[test]
    fn unsupported_shape_is_an_error() {
        let (a, b) = (std::cell::Cell::new(1), std::cell::Cell::new(1));
        let err = Walker::new().walk(&a, &b, &Path::root()).unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
    }
}
