//! tracedeq - deep equality comparison with a trace to the first divergence.
//!
//! [`deep_equal`] walks two values of the same shape and, when they differ,
//! reports the path to the first point of divergence together with the two
//! differing sub-values:
//!
//! ```
//! use std::collections::BTreeMap;
//! use tracedeq::{deep_equal, reflect_record, Operand, Scalar};
//!
//! struct Employee {
//!     age: u32,
//! }
//! reflect_record!(Employee { age });
//!
//! let got = BTreeMap::from([("Alice", Employee { age: 25 })]);
//! let want = BTreeMap::from([("Alice", Employee { age: 20 })]);
//!
//! let outcome = deep_equal(&got, &want);
//! assert!(!outcome.is_equal());
//! assert_eq!(outcome.trace().join("."), "Alice.age");
//! assert_eq!(outcome.x(), Some(&Operand::Scalar(Scalar::Uint(25))));
//! ```
//!
//! Values take part in the comparison through the [`Reflect`] trait, which
//! exposes a borrowed [`Shape`] view. Standard library types are covered out
//! of the box; structs opt in with [`reflect_record!`].

mod compare;
mod error;
mod filter;
mod impls;
mod macros;
mod outcome;
mod reflect;
mod trace;
mod visit;
mod walk;

pub use compare::{deep_equal, try_deep_equal};
pub use error::Error;
pub use filter::{IGNORE, TAG_KEY};
pub use outcome::{Operand, Outcome, Scalar};
pub use reflect::{Associative, Elements, Field, Key, Reflect, Shape};
pub use trace::{Trace, FUNC, LENGTH, TYPE};
