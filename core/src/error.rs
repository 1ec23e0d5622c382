use thiserror::Error;

use crate::variant::Variant;

/// An accessor was used on a variant that does not carry the requested payload.
///
/// Signals a caller defect: the variant should have been checked (or a total operation such as
/// `unwrap_or` or `dispatch` used) before accessing the payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("attempted to access the payload of {expected:?}, but found {found:?}")]
pub struct EmptyAccess {
  pub expected: Variant,
  pub found: Variant,
}

impl EmptyAccess {
  #[inline]
  pub const fn new(expected: Variant, found: Variant) -> Self {
    Self { expected, found }
  }
}

/// Panics with `cause`, optionally prefixed by a caller-supplied `context` message.
#[cold]
#[track_caller]
pub(crate) fn empty_access(cause: EmptyAccess, context: Option<&str>) -> ! {
  #[cfg(feature = "tracing")]
  tracing::error!(%cause, context, "unwrapped a variant without the requested payload");
  match context {
    Some(context) => panic!("{}: {}", context, cause),
    None => panic!("{}", cause),
  }
}


/// General application errors, for use as the error payload of a [`Fallible`](crate::fallible::Fallible).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
pub enum ErrorType {
  #[default]
  #[error("Unspecified error")]
  Unspecified,
  #[error("Domain logic error")]
  DomainLogic,
  #[error("Not found")]
  NotFound,
  #[error("Key already exists")]
  KeyExists,
}
