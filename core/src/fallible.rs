use std::hash::{Hash, Hasher};

use crate::error::{empty_access, EmptyAccess};
use crate::variant::{hash_variant, Variant};

/// A value of type `T`, or an error of type `E`.
///
/// Mirrors [`Optional`](crate::optional::Optional): every operation is derived from
/// [`dispatch`](Self::dispatch), except `Hash`, which matches on the variant itself. There is no conversion into
/// an `Optional`; it would drop the error.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Fallible<T, E> {
  Success(T),
  Failure(E),
}

impl<T, E> Fallible<T, E> {
  #[inline]
  pub const fn ok(value: T) -> Self { Self::Success(value) }
  #[inline]
  pub const fn err(error: E) -> Self { Self::Failure(error) }


  /// Invokes `on_ok` with the value if successful, or `on_err` with the error otherwise. Exactly one of the two
  /// is invoked, exactly once.
  #[inline]
  pub fn dispatch<U>(self, on_ok: impl FnOnce(T) -> U, on_err: impl FnOnce(E) -> U) -> U {
    match self {
      Self::Success(value) => on_ok(value),
      Self::Failure(error) => on_err(error),
    }
  }

  /// Side-effecting form of [`dispatch`](Self::dispatch).
  #[inline]
  pub fn dispatch_void(self, on_ok: impl FnOnce(T), on_err: impl FnOnce(E)) {
    self.dispatch(on_ok, on_err)
  }

  #[inline]
  pub const fn as_ref(&self) -> Fallible<&T, &E> {
    match self {
      Self::Success(value) => Fallible::Success(value),
      Self::Failure(error) => Fallible::Failure(error),
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Fallible<&mut T, &mut E> {
    match self {
      Self::Success(value) => Fallible::Success(value),
      Self::Failure(error) => Fallible::Failure(error),
    }
  }


  #[inline]
  pub fn variant(&self) -> Variant {
    self.as_ref().dispatch(|_| Variant::Success, |_| Variant::Failure)
  }
  #[inline]
  pub fn is_ok(&self) -> bool { self.as_ref().dispatch(|_| true, |_| false) }
  #[inline]
  pub fn is_err(&self) -> bool { !self.is_ok() }


  #[inline]
  pub fn try_unwrap(self) -> Result<T, EmptyAccess> {
    self.dispatch(Ok, |_| Err(EmptyAccess::new(Variant::Success, Variant::Failure)))
  }

  #[inline]
  pub fn try_unwrap_err(self) -> Result<E, EmptyAccess> {
    self.dispatch(|_| Err(EmptyAccess::new(Variant::Failure, Variant::Success)), Ok)
  }

  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Panics with an [`EmptyAccess`] message on failure.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    self.dispatch(|value| value, |_| -> T { empty_access(EmptyAccess::new(Variant::Success, Variant::Failure), None) })
  }

  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    self.dispatch(|value| value, |_| -> T { empty_access(EmptyAccess::new(Variant::Success, Variant::Failure), Some(message)) })
  }

  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Panics with an [`EmptyAccess`] message on success. Exactly one of [`unwrap`](Self::unwrap) and `unwrap_err`
  /// succeeds on any given instance.
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E {
    self.dispatch(|_| -> E { empty_access(EmptyAccess::new(Variant::Failure, Variant::Success), None) }, |error| error)
  }

  /// Returns the success value, or `fallback` on failure. `fallback` is evaluated by the caller even when unused.
  #[inline]
  pub fn unwrap_or(self, fallback: T) -> T {
    self.dispatch(|value| value, |_| fallback)
  }

  /// Returns the success value, or `fallback(error)` on failure. `fallback` is only invoked on failure.
  #[inline]
  pub fn unwrap_or_else(self, fallback: impl FnOnce(E) -> T) -> T {
    self.dispatch(|value| value, fallback)
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.dispatch(|value| value, |_| T::default())
  }


  /// Transforms the success value. A failure passes through untouched, without invoking `f`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fallible<U, E> {
    self.dispatch(|value| Fallible::Success(f(value)), Fallible::Failure)
  }

  /// Finalizes into `f(value)` on success, or the eagerly evaluated `fallback` on failure.
  #[inline]
  pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
    self.dispatch(f, |_| fallback)
  }

  /// Finalizes into `f(value)` on success, or `fallback()` on failure.
  #[inline]
  pub fn map_or_else<U>(self, fallback: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    self.dispatch(f, |_| fallback())
  }

  /// Transforms the error. A success passes through untouched, without invoking `f`.
  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Fallible<T, F> {
    self.dispatch(Fallible::Success, |error| Fallible::Failure(f(error)))
  }


  /// Chains `f` onto the success value. A failure short-circuits with its error untouched, without invoking `f`.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Fallible<U, E>) -> Fallible<U, E> {
    self.dispatch(f, Fallible::Failure)
  }

  /// Returns `self` on success, or `other` on failure. Note that `other` may itself be a failure.
  #[inline]
  pub fn or<F>(self, other: Fallible<T, F>) -> Fallible<T, F> {
    self.dispatch(Fallible::Success, |_| other)
  }

  /// Returns `self` on success, or `other(error)` on failure. `other` is only invoked on failure.
  #[inline]
  pub fn or_else<F>(self, other: impl FnOnce(E) -> Fallible<T, F>) -> Fallible<T, F> {
    self.dispatch(Fallible::Success, other)
  }


  /// Converts into a standard [`Result`], for use with the `?` operator.
  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    self.dispatch(Ok, Err)
  }
}

impl<T: Hash, E: Hash> Hash for Fallible<T, E> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    // Matches directly: both `dispatch` arms would need `state` mutably at once.
    match self {
      Self::Success(value) => hash_variant(Variant::Success, Some(value), state),
      Self::Failure(error) => hash_variant(Variant::Failure, Some(error), state),
    }
  }
}

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Success(value),
      Err(error) => Self::Failure(error),
    }
  }
}

impl<T, E> From<Fallible<T, E>> for Result<T, E> {
  #[inline]
  fn from(fallible: Fallible<T, E>) -> Self {
    fallible.into_result()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dispatch_invokes_one_branch() {
    let mut ok_calls = 0;
    let mut err_calls = 0;
    Fallible::<i32, &str>::ok(1).dispatch_void(|_| ok_calls += 1, |_| err_calls += 1);
    Fallible::<i32, &str>::err("oops").dispatch_void(|_| ok_calls += 1, |_| err_calls += 1);
    assert_eq!(1, ok_calls);
    assert_eq!(1, err_calls);
  }

  #[test]
  fn try_unwrap_reports_found_variant() {
    let cause = Fallible::<i32, &str>::err("oops").try_unwrap().unwrap_err();
    assert_eq!(EmptyAccess::new(Variant::Success, Variant::Failure), cause);
    let cause = Fallible::<i32, &str>::ok(1).try_unwrap_err().unwrap_err();
    assert_eq!(EmptyAccess::new(Variant::Failure, Variant::Success), cause);
  }

  #[test]
  fn std_result_interop() {
    fn parse(input: &str) -> Result<i32, String> {
      let fallible: Fallible<i32, String> = input.parse::<i32>().map_err(|e| e.to_string()).into();
      let doubled = fallible.map(|n| n * 2).into_result()?;
      Ok(doubled)
    }
    assert_eq!(Ok(8), parse("4"));
    assert!(parse("four").is_err());
  }
}
