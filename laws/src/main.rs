use std::error::Error;
use std::fmt::Debug;
use std::hash::Hash;
use std::num::ParseIntError;

use thiserror::Error;
use tracing::{debug, error, info};

use choice_core::app::env;
use choice_core::app::tracing::AppTracingBuilder;
use choice_core::laws::{check_fallible, check_hashing, check_optional, LawViolation, Probes};
use choice_core::{parse_env_or, run_or_compile_time_env, ErrorType};

mod probes;

#[derive(Debug, Error)]
enum RunError {
  #[error("invalid LAW_SAMPLES value: {0}")]
  InvalidSampleCount(#[from] ParseIntError),
  #[error("{0} law violation(s) found")]
  Violations(usize),
}

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(run_or_compile_time_env!("LAW_LOG_FILE"))
    .build();

  let result = run();
  if let Err(cause) = &result {
    error!(%cause, "law check failed");
  }
  Ok(result?)
}

fn run() -> Result<(), RunError> {
  let sample_count: usize = parse_env_or!("LAW_SAMPLES", 1000)?;
  debug!(sample_count, "checking laws");

  let mut violations = 0;
  violations += check_group("integers", &probes::integer_samples(sample_count), &ErrorType::NotFound, &probes::integers());
  violations += check_group("strings", &probes::string_samples(sample_count), &ErrorType::DomainLogic, &probes::strings());

  if violations > 0 {
    return Err(RunError::Violations(violations));
  }
  info!(sample_count, "all laws hold");
  Ok(())
}

fn check_group<T, E>(name: &str, samples: &[T], error: &E, probes: &Probes<T>) -> usize where
  T: Clone + Eq + Hash + Debug,
  E: Clone + Eq + Debug,
{
  let _span = tracing::info_span!("group", name).entered();

  let mut violations: Vec<LawViolation> = Vec::new();
  for sample in samples {
    violations.extend(check_optional(sample, probes).err());
    violations.extend(check_fallible(sample, error, probes).err());
  }
  violations.extend(check_hashing(samples).err());

  for violation in &violations {
    error!(%violation, "law violated");
  }
  info!(samples = samples.len(), violations = violations.len(), "checked laws");
  violations.len()
}
