use std::hash::{Hash, Hasher};

/// Discriminant of an [`Optional`](crate::optional::Optional) or [`Fallible`](crate::fallible::Fallible) variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
  Present,
  Absent,
  Success,
  Failure,
}

impl Variant {
  /// Stable name of this variant, fed into container hashes ahead of the payload.
  #[inline]
  pub const fn tag(self) -> &'static str {
    match self {
      Self::Present => "Present",
      Self::Absent => "Absent",
      Self::Success => "Success",
      Self::Failure => "Failure",
    }
  }
}

/// Hashes the tag of `variant` followed by `payload`, if any.
///
/// Payloads are hashed through their own [`Hash`] impl; wrap a payload in a newtype to hash it differently.
///
/// Tag and payload are written to `state` in sequence rather than combined after the fact, so
/// payload hashes keep their full distribution and payload-less variants all share one hash.
#[inline]
pub(crate) fn hash_variant<P: Hash + ?Sized, H: Hasher>(variant: Variant, payload: Option<&P>, state: &mut H) {
  variant.tag().hash(state);
  if let Some(payload) = payload {
    payload.hash(state);
  }
}
