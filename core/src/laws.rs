//! Checks for the algebraic laws that [`Optional`] and [`Fallible`] uphold.
//!
//! Every check takes concrete samples and returns the first [`LawViolation`] it finds. Checks that a callback is
//! *not* invoked wrap it in a closure that trips a flag.

use std::cell::Cell;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use hashbrown::HashSet;
use hashbrown::hash_map::DefaultHashBuilder;
use thiserror::Error;

use crate::fallible::Fallible;
use crate::optional::Optional;

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Law {
  FunctorIdentity,
  FunctorComposition,
  LeftIdentity,
  RightIdentity,
  Associativity,
  ShortCircuit,
  Filter,
  OkOr,
  MapErrIndependence,
  MapIndependence,
  OrSelection,
  EqualHashes,
  DistinctEntries,
  CollapsingEntries,
  VariantInequality,
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("{container} law {law:?} does not hold for sample {sample}")]
pub struct LawViolation {
  pub container: &'static str,
  pub law: Law,
  pub sample: String,
}

/// Functions applied to samples by the law checks. `step` and `other_step` may return [`Optional::Absent`] to
/// exercise short-circuiting.
pub struct Probes<T> {
  pub transform: fn(T) -> T,
  pub other_transform: fn(T) -> T,
  pub step: fn(T) -> Optional<T>,
  pub other_step: fn(T) -> Optional<T>,
  pub predicate: fn(&T) -> bool,
}
// Not derived: that would require `T: Copy`.
impl<T> Clone for Probes<T> {
  #[inline]
  fn clone(&self) -> Self { *self }
}
impl<T> Copy for Probes<T> {}


struct Checker<'s, S: ?Sized> {
  container: &'static str,
  sample: &'s S,
}
impl<'s, S: Debug + ?Sized> Checker<'s, S> {
  #[inline]
  fn new(container: &'static str, sample: &'s S) -> Self { Self { container, sample } }

  #[inline]
  fn ensure(&self, law: Law, holds: bool) -> Result<(), LawViolation> {
    if holds {
      Ok(())
    } else {
      Err(LawViolation { container: self.container, law, sample: format!("{:?}", self.sample) })
    }
  }
}

/// Checks the [`Optional`] laws for `sample`.
pub fn check_optional<T: Clone + Eq + Debug>(sample: &T, probes: &Probes<T>) -> Result<(), LawViolation> {
  let checker = Checker::new("Optional", sample);
  let some = || Optional::some(sample.clone());
  let none = Optional::<T>::none;
  let Probes { transform, other_transform, step, other_step, predicate } = *probes;

  checker.ensure(Law::FunctorIdentity, some().map(|v| v) == some() && none().map(|v| v) == none())?;
  checker.ensure(
    Law::FunctorComposition,
    some().map(transform).map(other_transform) == some().map(|v| other_transform(transform(v))),
  )?;

  checker.ensure(Law::LeftIdentity, some().and_then(step) == step(sample.clone()))?;
  checker.ensure(Law::RightIdentity, some().and_then(Optional::some) == some())?;
  checker.ensure(
    Law::Associativity,
    some().and_then(step).and_then(other_step) == some().and_then(|v| step(v).and_then(other_step)),
  )?;

  let tripped = Cell::new(false);
  let chained = none().and_then(|v| { tripped.set(true); Optional::some(v) });
  let chained_after_absent = step(sample.clone()).is_present()
    || some().and_then(step).and_then(|v| { tripped.set(true); other_step(v) }).is_absent();
  checker.ensure(Law::ShortCircuit, chained.is_absent() && chained_after_absent && !tripped.get())?;

  let expected = if predicate(sample) { some() } else { none() };
  let filtered = none().filter(|v| { tripped.set(true); predicate(v) });
  checker.ensure(Law::Filter, some().filter(predicate) == expected && filtered.is_absent() && !tripped.get())?;

  checker.ensure(
    Law::OkOr,
    some().ok_or(sample.clone()) == Fallible::ok(sample.clone())
      && none().ok_or(sample.clone()) == Fallible::err(sample.clone())
      && some().ok_or_else(|| { tripped.set(true); sample.clone() }) == Fallible::ok(sample.clone())
      && !tripped.get(),
  )?;

  checker.ensure(
    Law::OrSelection,
    some().or(none()) == some()
      && none().or(some()) == some()
      && some().or_else(|| { tripped.set(true); none() }) == some()
      && !tripped.get(),
  )?;

  Ok(())
}

/// Checks the [`Fallible`] laws for `sample`, using `error` as the failure payload.
pub fn check_fallible<T, E>(sample: &T, error: &E, probes: &Probes<T>) -> Result<(), LawViolation> where
  T: Clone + Eq + Debug,
  E: Clone + Eq + Debug,
{
  let checker = Checker::new("Fallible", sample);
  let ok = || Fallible::<T, E>::ok(sample.clone());
  let err = || Fallible::<T, E>::err(error.clone());
  let Probes { transform, other_transform, step, other_step, .. } = *probes;
  let step = |v: T| step(v).ok_or_else(|| error.clone());
  let other_step = |v: T| other_step(v).ok_or_else(|| error.clone());

  checker.ensure(Law::FunctorIdentity, ok().map(|v| v) == ok() && err().map(|v| v) == err())?;
  checker.ensure(
    Law::FunctorComposition,
    ok().map(transform).map(other_transform) == ok().map(|v| other_transform(transform(v))),
  )?;

  let tripped = Cell::new(false);
  checker.ensure(Law::MapErrIndependence, ok().map_err(|e| { tripped.set(true); e }) == ok() && !tripped.get())?;
  checker.ensure(Law::MapIndependence, err().map(|v| { tripped.set(true); transform(v) }) == err() && !tripped.get())?;

  checker.ensure(Law::LeftIdentity, ok().and_then(step) == step(sample.clone()))?;
  checker.ensure(Law::RightIdentity, ok().and_then(Fallible::ok) == ok())?;
  checker.ensure(
    Law::Associativity,
    ok().and_then(step).and_then(other_step) == ok().and_then(|v| step(v).and_then(other_step)),
  )?;
  checker.ensure(Law::ShortCircuit, err().and_then(|v| { tripped.set(true); step(v) }) == err() && !tripped.get())?;

  checker.ensure(
    Law::OrSelection,
    ok().or(err()) == ok()
      && err().or(ok()) == ok()
      && err().or(err()) == err()
      && ok().or_else(|_| { tripped.set(true); err() }) == ok()
      && !tripped.get(),
  )?;

  Ok(())
}


fn hash_of<T: Hash>(build_hasher: &DefaultHashBuilder, value: &T) -> u64 {
  build_hasher.hash_one(value)
}

/// Checks that equality and hashing of both containers agree with those of the payload, over `samples`.
///
/// Distinct samples must yield distinct set entries once wrapped, and repeatedly inserting one wrapped sample
/// must yield a single entry.
pub fn check_hashing<T: Clone + Eq + Hash + Debug>(samples: &[T]) -> Result<(), LawViolation> {
  let build_hasher = DefaultHashBuilder::default();
  let distinct = samples.iter().collect::<HashSet<_>>().len();

  let checker = Checker::new("Optional", samples);
  let presents = samples.iter().cloned().map(Optional::some).collect::<HashSet<_>>();
  checker.ensure(Law::DistinctEntries, presents.len() == distinct)?;
  let absents = std::iter::repeat_with(Optional::<T>::none).take(10).collect::<HashSet<_>>();
  checker.ensure(Law::CollapsingEntries, absents.len() == 1)?;

  let checker = Checker::new("Fallible", samples);
  let successes = samples.iter().cloned().map(Fallible::<T, T>::ok).collect::<HashSet<_>>();
  let failures = samples.iter().cloned().map(Fallible::<T, T>::err).collect::<HashSet<_>>();
  checker.ensure(Law::DistinctEntries, successes.len() == distinct && failures.len() == distinct)?;

  for sample in samples {
    let checker = Checker::new("Optional", sample);
    let some = Optional::some(sample.clone());
    let rebuilt = Optional::none().or_else(|| Optional::some(sample.clone()));
    checker.ensure(Law::EqualHashes, some == rebuilt && hash_of(&build_hasher, &some) == hash_of(&build_hasher, &rebuilt))?;
    checker.ensure(Law::VariantInequality, some != Optional::none())?;
    let repeated = std::iter::repeat(some).take(10).collect::<HashSet<_>>();
    checker.ensure(Law::CollapsingEntries, repeated.len() == 1)?;

    let checker = Checker::new("Fallible", sample);
    let ok = Fallible::<T, T>::ok(sample.clone());
    let err = Fallible::<T, T>::err(sample.clone());
    let rebuilt_ok = Optional::some(sample.clone()).ok_or(sample.clone());
    let rebuilt_err = Optional::<T>::none().ok_or(sample.clone());
    checker.ensure(
      Law::EqualHashes,
      ok == rebuilt_ok
        && err == rebuilt_err
        && hash_of(&build_hasher, &ok) == hash_of(&build_hasher, &rebuilt_ok)
        && hash_of(&build_hasher, &err) == hash_of(&build_hasher, &rebuilt_err),
    )?;
    checker.ensure(Law::VariantInequality, ok != err)?;
  }

  Ok(())
}
