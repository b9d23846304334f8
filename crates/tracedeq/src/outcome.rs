//! The result of one comparison.

use std::fmt;

use crate::reflect::{Reflect, Shape};
use crate::trace::Trace;

/// Scalar leaf value, widened to the largest width of its kind.
///
/// Equality is the native one for each kind, so `Float(NAN) != Float(NAN)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(f64),
    Complex(f64, f64),
    Char(char),
    Str(&'a str),
}

impl Scalar<'_> {
    pub fn is_zero(&self) -> bool {
        match *self {
            Scalar::Bool(v) => !v,
            Scalar::Int(v) => v == 0,
            Scalar::Uint(v) => v == 0,
            // Bit-pattern check: -0.0 is not the zero value.
            Scalar::Float(v) => v.to_bits() == 0,
            Scalar::Complex(re, im) => re.to_bits() == 0 && im.to_bits() == 0,
            Scalar::Char(v) => v == '\0',
            Scalar::Str(v) => v.is_empty(),
        }
    }
}

/// Renders the scalar as a trace segment: strings are written verbatim.
impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Uint(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Complex(re, im) => write!(f, "({re}{im:+}i)"),
            Scalar::Char(v) => write!(f, "{v}"),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}

/// One side of a divergence.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    /// The unit value, or the empty side of an optional.
    Nil,
    Scalar(Scalar<'a>),
    /// Composite sub-value, kept opaque.
    Value(&'a dyn Reflect),
    /// Type descriptor, reported on a type mismatch.
    Type(&'static str),
    /// Length, reported on a length mismatch.
    Len(usize),
    /// The side of a map that has no entry for the key.
    Missing,
}

impl<'a> Operand<'a> {
    /// Operand for a walked value: scalars are unpacked, composites stay opaque.
    pub fn of(value: &'a dyn Reflect) -> Self {
        match value.shape() {
            Shape::Nil => Operand::Nil,
            Shape::Scalar(scalar) => Operand::Scalar(scalar),
            _ => Operand::Value(value),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar<'a>> {
        match self {
            Operand::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}

/// Composite values compare by identity.
impl PartialEq for Operand<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operand::Nil, Operand::Nil) | (Operand::Missing, Operand::Missing) => true,
            (Operand::Scalar(a), Operand::Scalar(b)) => a == b,
            (Operand::Value(a), Operand::Value(b)) => std::ptr::addr_eq(*a, *b),
            (Operand::Type(a), Operand::Type(b)) => a == b,
            (Operand::Len(a), Operand::Len(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Nil => f.write_str("Nil"),
            Operand::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Operand::Value(value) => write!(f, "Value(<{}>)", value.type_name()),
            Operand::Type(name) => f.debug_tuple("Type").field(name).finish(),
            Operand::Len(len) => f.debug_tuple("Len").field(len).finish(),
            Operand::Missing => f.write_str("Missing"),
        }
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Nil => f.write_str("nil"),
            Operand::Scalar(Scalar::Str(v)) => write!(f, "{v:?}"),
            Operand::Scalar(Scalar::Char(v)) => write!(f, "{v:?}"),
            Operand::Scalar(scalar) => write!(f, "{scalar}"),
            Operand::Value(value) => write!(f, "<{}>", value.type_name()),
            Operand::Type(name) => f.write_str(name),
            Operand::Len(len) => write!(f, "{len}"),
            Operand::Missing => f.write_str("<missing>"),
        }
    }
}

/// Outcome of one [`deep_equal`](crate::deep_equal) call.
///
/// When the values are equal the trace is empty and both operands are unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<'a> {
    is_equal: bool,
    trace: Trace,
    x: Option<Operand<'a>>,
    y: Option<Operand<'a>>,
}

impl<'a> Outcome<'a> {
    pub(crate) fn equal() -> Self {
        Self {
            is_equal: true,
            trace: Trace::default(),
            x: None,
            y: None,
        }
    }

    pub(crate) fn diverged(trace: Trace, x: Operand<'a>, y: Operand<'a>) -> Self {
        Self {
            is_equal: false,
            trace,
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn is_equal(&self) -> bool {
        self.is_equal
    }

    /// Path from the root to the first divergence.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Left-hand value at the point of divergence.
    pub fn x(&self) -> Option<&Operand<'a>> {
        self.x.as_ref()
    }

    /// Right-hand value at the point of divergence.
    pub fn y(&self) -> Option<&Operand<'a>> {
        self.y.as_ref()
    }
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_equal {
            return f.write_str("equal");
        }
        if self.trace.is_empty() {
            f.write_str("at <root>")?;
        } else {
            write!(f, "at `{}`", self.trace)?;
        }
        if let (Some(x), Some(y)) = (&self.x, &self.y) {
            write!(f, "\n  left: {x}\n right: {y}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_zero_values() {
        assert!(Scalar::Bool(false).is_zero());
        assert!(Scalar::Int(0).is_zero());
        assert!(Scalar::Str("").is_zero());
        assert!(Scalar::Char('\0').is_zero());
        assert!(!Scalar::Float(-0.0).is_zero());
        assert!(!Scalar::Complex(0.0, 1.0).is_zero());
    }

    #[test]
    fn scalar_nan_is_not_equal_to_itself() {
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(f64::NAN));
    }

    #[test]
    fn scalar_segments() {
        assert_eq!(Scalar::Str("Alice").to_string(), "Alice");
        assert_eq!(Scalar::Int(-3).to_string(), "-3");
        assert_eq!(Scalar::Complex(1.0, -2.0).to_string(), "(1-2i)");
    }

    #[test]
    fn operand_of_unpacks_scalars() {
        let s = String::from("foo");
        assert_eq!(Operand::of(&s), Operand::Scalar(Scalar::Str("foo")));
        assert_eq!(Operand::of(&()), Operand::Nil);
        let v = vec![1u8];
        assert_eq!(Operand::of(&v), Operand::Value(&v));
    }

    #[test]
    fn display_diverged() {
        let outcome = Outcome::diverged(
            Trace::from(vec!["a".to_string(), "b".to_string()]),
            Operand::Scalar(Scalar::Str("x")),
            Operand::Missing,
        );
        assert_eq!(outcome.to_string(), "at `a.b`\n  left: \"x\"\n right: <missing>");
        assert_eq!(Outcome::equal().to_string(), "equal");
    }
}
