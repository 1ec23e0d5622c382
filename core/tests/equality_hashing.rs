use std::hash::BuildHasher;

use hashbrown::HashSet;
use hashbrown::hash_map::DefaultHashBuilder;

use choice_core::{Fallible, Optional};

fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
  DefaultHashBuilder::default().hash_one(value)
}

#[test]
fn optional_present_present() {
  let o1 = Optional::some(10);
  let o2 = Optional::some(10);
  assert_eq!(o1, o2);
  assert_eq!(hash_of(&o1), hash_of(&o2));
  assert_ne!(Optional::some(10), Optional::some(11));
  assert_ne!(hash_of(&Optional::some(10)), hash_of(&Optional::some(11)));
}

#[test]
fn optional_present_absent() {
  let o1 = Optional::some(10);
  let o2 = Optional::none();
  assert_ne!(o1, o2);
  assert_ne!(hash_of(&o1), hash_of(&o2));
}

#[test]
fn optional_absent_absent() {
  let o1 = Optional::<i32>::none();
  let o2 = Optional::<i32>::none();
  assert_eq!(o1, o2);
  assert_eq!(hash_of(&o1), hash_of(&o2));
}

#[test]
fn presents_with_diff_values_dont_collide() {
  let set = (0..1000).map(Optional::some).collect::<HashSet<_>>();
  assert_eq!(1000, set.len());
}

#[test]
fn absents_collapse_to_one_entry() {
  let set = (0..10).map(|_| Optional::<i32>::none()).collect::<HashSet<_>>();
  assert_eq!(1, set.len());
}

#[test]
fn presents_with_same_values_collapse_to_one_entry() {
  let set = (0..10).map(|_| Optional::some(1)).collect::<HashSet<_>>();
  assert_eq!(1, set.len());
}

#[test]
fn fallible_same_and_diff_oks() {
  let o1 = Fallible::<i32, String>::ok(10);
  let o2 = Fallible::<i32, String>::ok(10);
  assert_eq!(o1, o2);
  assert_eq!(hash_of(&o1), hash_of(&o2));

  let o3 = Fallible::<i32, String>::ok(11);
  assert_ne!(o1, o3);
  assert_ne!(hash_of(&o1), hash_of(&o3));
}

#[test]
fn fallible_same_and_diff_errs() {
  let o1 = Fallible::<i32, char>::err('c');
  let o2 = Fallible::<i32, char>::err('c');
  assert_eq!(o1, o2);
  assert_eq!(hash_of(&o1), hash_of(&o2));

  let o3 = Fallible::<i32, char>::err('C');
  assert_ne!(o1, o3);
  assert_ne!(hash_of(&o1), hash_of(&o3));
}

#[test]
fn fallible_ok_and_err_differ() {
  let o1 = Fallible::<i32, char>::ok(10);
  let o2 = Fallible::<i32, char>::err('c');
  assert_ne!(o1, o2);
  assert_ne!(hash_of(&o1), hash_of(&o2));
}

#[test]
fn fallible_same_payload_ok_and_err_differ() {
  let o1 = Fallible::<i32, i32>::ok(10);
  let o2 = Fallible::<i32, i32>::err(10);
  assert_ne!(o1, o2);
  assert_ne!(hash_of(&o1), hash_of(&o2));
}

#[test]
fn oks_and_errs_with_diff_values_dont_collide() {
  let oks = (0..1000).map(Fallible::<i32, String>::ok).collect::<HashSet<_>>();
  assert_eq!(1000, oks.len());
  let errs = (0..1000).map(Fallible::<String, i32>::err).collect::<HashSet<_>>();
  assert_eq!(1000, errs.len());
}

#[test]
fn oks_and_errs_with_same_values_collapse_to_one_entry() {
  let oks = (0..10).map(|_| Fallible::<i32, String>::ok(1)).collect::<HashSet<_>>();
  assert_eq!(1, oks.len());
  let errs = (0..10).map(|_| Fallible::<i32, String>::err(String::from("Hello!!"))).collect::<HashSet<_>>();
  assert_eq!(1, errs.len());
}

#[test]
fn usable_as_map_keys() {
  let mut lookups = hashbrown::HashMap::new();
  lookups.insert(Optional::some("a"), 1);
  lookups.insert(Optional::none(), 0);
  assert_eq!(Some(&1), lookups.get(&Optional::some("a")));
  assert_eq!(Some(&0), lookups.get(&Optional::none()));
  assert_eq!(None, lookups.get(&Optional::some("b")));
}

#[test]
fn fallible_hash_tracks_variant_and_payload() {
  let ok = Fallible::<String, String>::ok(String::from("x"));
  let rebuilt = Optional::some(String::from("x")).ok_or(String::from("y"));
  assert_eq!(ok, rebuilt);
  assert_eq!(hash_of(&ok), hash_of(&rebuilt));
  assert_ne!(hash_of(&ok), hash_of(&Fallible::<String, String>::err(String::from("x"))));
}

/// Compares and hashes ASCII case-insensitively.
#[derive(Debug, Clone)]
struct Caseless(&'static str);
impl PartialEq for Caseless {
  fn eq(&self, other: &Self) -> bool { self.0.eq_ignore_ascii_case(other.0) }
}
impl Eq for Caseless {}
impl std::hash::Hash for Caseless {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    for byte in self.0.bytes() {
      state.write_u8(byte.to_ascii_lowercase());
    }
  }
}

#[test]
fn payload_equality_decides_container_equality() {
  assert_eq!(Optional::some(Caseless("Hello")), Optional::some(Caseless("hELLO")));
  assert_eq!(hash_of(&Optional::some(Caseless("Hello"))), hash_of(&Optional::some(Caseless("hELLO"))));
  let entries = ["a", "A", "b"].map(|s| Fallible::<Caseless, ()>::ok(Caseless(s))).into_iter().collect::<HashSet<_>>();
  assert_eq!(2, entries.len());
  assert_ne!(Optional::some(Caseless("a")), Optional::none());
}
