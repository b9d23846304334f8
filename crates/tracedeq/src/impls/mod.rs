//! `Reflect` implementations for standard library and ecosystem types.

#[cfg(feature = "num-complex")]
mod complex;
mod func;
#[cfg(feature = "serde_json")]
mod json;
mod map;
mod optional;
mod pointer;
mod scalar;
mod sequence;
mod tuple;
mod unsupported;
