use thiserror::Error;

/// Errors produced by the sentinel registry and the [`Nada`](crate::Nada) singleton.
///
/// Almost every operation in this crate is total. These are the only conditions
/// that surface to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sequence of the wrong length was assigned to an extended slice.
    #[error("attempt to assign sequence of size {actual} to extended slice of size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A slice was built with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// A read-only lookup found no sentinel for the requested flavor.
    #[error("Flavor not found in sentinel registry: {type_name}")]
    FlavorNotFound { type_name: &'static str },
}
