use thiserror::Error;

/// Usage-level failures of a comparison.
///
/// A divergence between the compared values is never an error; it is reported
/// through [`Outcome`](crate::Outcome). These variants signal a value the
/// comparator cannot walk at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("kind of `{type_name}` is not supported")]
    Unsupported { type_name: &'static str },
    #[error("inconsistent shape reported by `{type_name}`: {reason}")]
    InconsistentShape {
        type_name: &'static str,
        reason: &'static str,
    },
}
