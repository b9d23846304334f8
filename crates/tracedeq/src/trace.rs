//! Trace of the path from the root to a divergence.
//!
//! While walking, the path is a stack-linked persistent list ([`Path`]): every
//! frame borrows its parent and adds at most one segment, so sibling branches
//! never observe each other's segments. It is turned into an owned [`Trace`]
//! only once a divergence has been found.

use std::fmt;
use std::ops::Deref;

use crate::reflect::{Reflect, Shape};

/// Marker segment for a type mismatch.
pub const TYPE: &str = "TYPE";
/// Marker segment for a length mismatch.
pub const LENGTH: &str = "LENGTH";
/// Marker segment for a callable mismatch.
pub const FUNC: &str = "FUNC";

/// Ordered path segments from the root to the first divergence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace(Vec<String>);

impl Trace {
    /// Joins the segments with `sep`, e.g. `Departments.0.Teams`.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }

    /// Renders the trace as an RFC 6901 JSON Pointer.
    ///
    /// - `[] -> ""`
    /// - `["a/b", "~k", "0"] -> "/a~1b/~0k/0"`
    pub fn to_json_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.0 {
            out.push('/');
            out.push_str(&escape_component(segment));
        }
        out
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

impl Deref for Trace {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Trace {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("."))
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Trace {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl PartialEq<[&str]> for Trace {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

// ── path ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) enum Segment {
    Field(&'static str),
    Index(usize),
    Key(String),
}

impl Segment {
    fn render(&self) -> String {
        match self {
            Segment::Field(name) => (*name).to_string(),
            Segment::Index(index) => index.to_string(),
            Segment::Key(key) => key.clone(),
        }
    }
}

/// Map key rendered as a trace segment: scalars via `Display`, anything else
/// as `<type>`.
pub(crate) fn key_segment(key: &dyn Reflect) -> String {
    match key.shape() {
        Shape::Scalar(scalar) => scalar.to_string(),
        _ => format!("<{}>", key.type_name()),
    }
}

/// Path threaded through the recursion.
#[derive(Debug)]
pub(crate) struct Path<'p> {
    parent: Option<&'p Path<'p>>,
    segment: Option<Segment>,
}

impl<'p> Path<'p> {
    pub(crate) fn root() -> Self {
        Self {
            parent: None,
            segment: None,
        }
    }

    pub(crate) fn child(&'p self, segment: Segment) -> Path<'p> {
        Path {
            parent: Some(self),
            segment: Some(segment),
        }
    }

    pub(crate) fn to_trace(&self) -> Trace {
        let mut segments = Vec::new();
        let mut frame = Some(self);
        while let Some(path) = frame {
            if let Some(segment) = &path.segment {
                segments.push(segment.render());
            }
            frame = path.parent;
        }
        segments.reverse();
        Trace(segments)
    }

    /// Trace of this path plus a marker segment.
    pub(crate) fn trace_with(&self, marker: &'static str) -> Trace {
        let mut trace = self.to_trace();
        trace.0.push(marker.to_string());
        trace
    }
}
