use std::hash::{Hash, Hasher};

use crate::error::{empty_access, EmptyAccess};
use crate::fallible::Fallible;
use crate::variant::{hash_variant, Variant};

/// A value of type `T`, or nothing.
///
/// Every operation is derived from [`dispatch`](Self::dispatch), the only place (besides the
/// borrowing adapters) that inspects the variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Optional<T> {
  Present(T),
  Absent,
}

impl<T> Optional<T> {
  #[inline]
  pub const fn some(value: T) -> Self { Self::Present(value) }
  #[inline]
  pub const fn none() -> Self { Self::Absent }


  /// Invokes `on_present` with the value if present, or `on_absent` otherwise. Exactly one of
  /// the two is invoked, exactly once.
  #[inline]
  pub fn dispatch<U>(self, on_present: impl FnOnce(T) -> U, on_absent: impl FnOnce() -> U) -> U {
    match self {
      Self::Present(value) => on_present(value),
      Self::Absent => on_absent(),
    }
  }

  /// Side-effecting form of [`dispatch`](Self::dispatch).
  #[inline]
  pub fn dispatch_void(self, on_present: impl FnOnce(T), on_absent: impl FnOnce()) {
    self.dispatch(on_present, on_absent)
  }

  /// Converts from `&Optional<T>` to `Optional<&T>`.
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }

  /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }


  #[inline]
  pub fn variant(&self) -> Variant {
    self.as_ref().dispatch(|_| Variant::Present, || Variant::Absent)
  }
  #[inline]
  pub fn is_present(&self) -> bool { self.as_ref().dispatch(|_| true, || false) }
  #[inline]
  pub fn is_absent(&self) -> bool { !self.is_present() }


  /// Returns the value, or an [`EmptyAccess`] error if absent.
  #[inline]
  pub fn try_unwrap(self) -> Result<T, EmptyAccess> {
    self.ok_or(EmptyAccess::new(Variant::Present, Variant::Absent)).into_result()
  }

  /// Returns the value.
  ///
  /// # Panics
  ///
  /// Panics with an [`EmptyAccess`] message if absent. Prefer [`unwrap_or`](Self::unwrap_or),
  /// [`unwrap_or_else`](Self::unwrap_or_else), or [`dispatch`](Self::dispatch) unless presence has already been
  /// established.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    self.dispatch(|value| value, || -> T { empty_access(EmptyAccess::new(Variant::Present, Variant::Absent), None) })
  }

  /// Like [`unwrap`](Self::unwrap), but prefixes the panic message with `message`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    self.dispatch(|value| value, || -> T { empty_access(EmptyAccess::new(Variant::Present, Variant::Absent), Some(message)) })
  }

  /// Returns the value, or `fallback` if absent. `fallback` is evaluated by the caller even when unused; use
  /// [`unwrap_or_else`](Self::unwrap_or_else) to defer it.
  #[inline]
  pub fn unwrap_or(self, fallback: T) -> T {
    self.dispatch(|value| value, || fallback)
  }

  /// Returns the value, or the result of `fallback` if absent. `fallback` is only invoked when absent.
  #[inline]
  pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
    self.dispatch(|value| value, fallback)
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(T::default)
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    self.dispatch(|value| Optional::Present(f(value)), || Optional::Absent)
  }

  /// Finalizes into `f(value)` if present, or the eagerly evaluated `fallback` if absent.
  #[inline]
  pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
    self.dispatch(f, || fallback)
  }

  /// Finalizes into `f(value)` if present, or `fallback()` if absent.
  #[inline]
  pub fn map_or_else<U>(self, fallback: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    self.dispatch(f, fallback)
  }


  /// Chains `f` onto the value if present. Absent short-circuits without invoking `f`.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    self.dispatch(f, || Optional::Absent)
  }

  /// Keeps the value only if `predicate` holds for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    self.dispatch(|value| if predicate(&value) { Self::Present(value) } else { Self::Absent }, || Self::Absent)
  }

  /// Returns `self` if present, or `other` otherwise. Note that `other` may itself be absent.
  #[inline]
  pub fn or(self, other: Self) -> Self {
    self.dispatch(Self::Present, || other)
  }

  /// Returns `self` if present, or the result of `other` otherwise. `other` is only invoked when absent.
  #[inline]
  pub fn or_else(self, other: impl FnOnce() -> Self) -> Self {
    self.dispatch(Self::Present, other)
  }


  /// Converts into a [`Fallible`], using `error` as the failure if absent.
  #[inline]
  pub fn ok_or<E>(self, error: E) -> Fallible<T, E> {
    self.dispatch(Fallible::Success, || Fallible::Failure(error))
  }

  /// Converts into a [`Fallible`], invoking `error` for the failure only if absent.
  #[inline]
  pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Fallible<T, E> {
    self.dispatch(Fallible::Success, || Fallible::Failure(error()))
  }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T: Hash> Hash for Optional<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    hash_variant(self.variant(), self.as_ref().dispatch(Some, || None), state);
  }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    optional.dispatch(Some, || None)
  }
}
