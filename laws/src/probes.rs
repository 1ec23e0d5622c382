use choice_core::laws::Probes;
use choice_core::Optional;

pub fn integers() -> Probes<i64> {
  Probes {
    transform: |n| n.wrapping_mul(2),
    other_transform: |n| n.wrapping_add(7),
    step: |n| if n % 2 == 0 { Optional::some(n / 2) } else { Optional::none() },
    other_step: |n| if n % 3 == 0 { Optional::some(n / 3) } else { Optional::none() },
    predicate: |n| n % 5 != 0,
  }
}

pub fn integer_samples(count: usize) -> Vec<i64> {
  let half = (count / 2) as i64;
  (-half..).take(count).collect()
}

pub fn strings() -> Probes<String> {
  Probes {
    transform: |s| s.chars().rev().collect(),
    other_transform: |s| s.to_uppercase(),
    step: |s| s.split_once('-').map(|(_, tail)| tail.to_owned()).into(),
    other_step: |s| s.char_indices().last().map(|(i, _)| s[..i].to_owned()).into(),
    predicate: |s| s.len() % 2 == 0,
  }
}

pub fn string_samples(count: usize) -> Vec<String> {
  (0..count).map(|i| format!("sample-{i}")).collect()
}
