//! The value model the comparator walks.
//!
//! Rust has no universal runtime reflection, so every comparable type
//! describes itself through [`Reflect::shape`]: a borrowed, closed set of
//! variants, one per shape the comparator knows how to traverse.

use std::any::Any;

use crate::outcome::Scalar;

/// A value the comparator can walk.
pub trait Reflect {
    /// Borrowed view of this value's shape.
    fn shape(&self) -> Shape<'_>;

    /// Runtime type descriptor used by the type guard and visit records.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Whether this value is the zero/default value of its type.
    fn is_zero(&self) -> bool {
        self.shape().is_zero()
    }
}

/// Borrowed view of a value, one variant per supported shape.
pub enum Shape<'a> {
    /// The unit value; also the "no value" sentinel at the entry point.
    Nil,
    Scalar(Scalar<'a>),
    /// Sequence whose length is fixed by the type.
    Array(Elements<'a>),
    /// Variable-length sequence.
    Slice(Elements<'a>),
    Map(&'a dyn Associative),
    /// Named fields in declaration order.
    Record(Vec<Field<'a>>),
    Pointer(&'a dyn Reflect),
    /// Sum-typed wrapper or dynamically typed slot.
    Optional(Option<&'a dyn Reflect>),
    Func { assigned: bool },
    Unsupported,
}

impl<'a> Shape<'a> {
    /// Short name of the shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Nil => "nil",
            Shape::Scalar(_) => "scalar",
            Shape::Array(_) => "array",
            Shape::Slice(_) => "slice",
            Shape::Map(_) => "map",
            Shape::Record(_) => "record",
            Shape::Pointer(_) => "pointer",
            Shape::Optional(_) => "optional",
            Shape::Func { .. } => "func",
            Shape::Unsupported => "unsupported",
        }
    }

    /// Zero/default rule per shape.
    ///
    /// Pointers are never zero since Rust pointers cannot be null, and an
    /// unsupported value is never zero so that it always reaches the fatal
    /// path instead of being skipped.
    pub fn is_zero(&self) -> bool {
        match self {
            Shape::Nil => true,
            Shape::Scalar(scalar) => scalar.is_zero(),
            Shape::Array(elements) => elements.iter().all(|v| v.is_zero()),
            Shape::Slice(elements) => elements.is_absent() || elements.is_empty(),
            Shape::Map(map) => map.is_absent() || map.len() == 0,
            Shape::Record(fields) => fields.iter().all(|f| f.value().is_zero()),
            Shape::Pointer(_) => false,
            Shape::Optional(inner) => inner.is_none(),
            Shape::Func { assigned } => !assigned,
            Shape::Unsupported => false,
        }
    }
}

// ── sequences ────────────────────────────────────────────────────────────

/// Borrowed elements of a sequence.
pub struct Elements<'a> {
    items: Vec<&'a dyn Reflect>,
    storage: Option<usize>,
    absent: bool,
}

impl<'a> Elements<'a> {
    /// Elements of contiguous storage. Two views over the same storage with
    /// the same length are considered identical.
    pub fn from_slice<T: Reflect>(slice: &'a [T]) -> Self {
        Self {
            items: slice.iter().map(|v| v as &dyn Reflect).collect(),
            storage: Some(slice.as_ptr() as usize),
            absent: false,
        }
    }

    /// A sequence that is not there at all, as opposed to an empty one.
    pub fn absent() -> Self {
        Self {
            items: Vec::new(),
            storage: None,
            absent: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_absent(&self) -> bool {
        self.absent
    }

    pub fn storage(&self) -> Option<usize> {
        self.storage
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Reflect> + '_ {
        self.items.iter().copied()
    }
}

/// Elements without a storage identity, in iteration order.
impl<'a> FromIterator<&'a dyn Reflect> for Elements<'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn Reflect>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            storage: None,
            absent: false,
        }
    }
}

// ── maps ─────────────────────────────────────────────────────────────────

/// A map key that can be looked up in another map of the same type.
pub trait Key: Reflect {
    fn as_any(&self) -> &dyn Any;
    fn as_reflect(&self) -> &dyn Reflect;
}

impl<K: Reflect + Any> Key for K {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_reflect(&self) -> &dyn Reflect {
        self
    }
}

/// Associative container view.
pub trait Associative {
    fn len(&self) -> usize;

    /// Whether the map is not there at all, as opposed to empty.
    fn is_absent(&self) -> bool {
        false
    }

    /// Entries in this map's iteration order.
    fn entries(&self) -> Vec<(&dyn Key, &dyn Reflect)>;

    /// Value stored under `key`, where `key` comes from a map of the same type.
    fn lookup(&self, key: &dyn Key) -> Option<&dyn Reflect>;
}

// ── records ──────────────────────────────────────────────────────────────

/// One field of a record.
pub struct Field<'a> {
    name: &'static str,
    value: &'a dyn Reflect,
    tags: &'static [(&'static str, &'static str)],
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            name,
            value,
            tags: &[],
        }
    }

    /// Attaches field metadata as `(key, value)` pairs, e.g.
    /// `[("tracedeq", "ignore")]`.
    pub fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &'a dyn Reflect {
        self.value
    }

    /// Metadata value stored under `key`, if any.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(tag_key, _)| *tag_key == key)
            .map(|(_, value)| *value)
    }
}
