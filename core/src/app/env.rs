/// Loads a `.env` file from the current directory (or its parents) into the process environment.
pub fn load_dotenv_into_env() {
  if let Err(cause) = dotenvy::dotenv() {
    if !cause.not_found() {
      #[cfg(feature = "tracing")]
      tracing::warn!(%cause, "failed to load .env file");
    }
  }
}

/// Reads environment variable `$env` at run time, falling back to its value at compile time. Evaluates to
/// `Option<String>`.
#[macro_export]
macro_rules! run_or_compile_time_env {
  ($env:literal) => {
    ::std::env::var($env).ok().or_else(|| ::std::option_env!($env).map(::std::borrow::ToOwned::to_owned))
  };
}
pub use crate::run_or_compile_time_env;

/// Reads and parses environment variable `$env` (see [`run_or_compile_time_env`]), or evaluates to `$default`
/// when it is unset. Evaluates to `Result<T, T::Err>`.
#[macro_export]
macro_rules! parse_env_or {
  ($env:literal, $default:expr) => {
    match $crate::run_or_compile_time_env!($env) {
      Some(value) => value.trim().parse(),
      None => Ok($default),
    }
  };
}
pub use crate::parse_env_or;
