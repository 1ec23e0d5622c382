use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the global subscriber. Filters that were not set explicitly are read from the `CONSOLE_LOG` and
  /// `FILE_LOG` environment variables, defaulting to `info`.
  pub fn build(self) -> AppTracing {
    macro_rules! filter {
      ($env:literal) => {{
        #[cfg(feature = "app_env")] {
          crate::run_or_compile_time_env!($env)
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
        }
        #[cfg(not(feature = "app_env"))] {
          EnvFilter::try_from_env($env).unwrap_or_else(|_| EnvFilter::new("info"))
        }
      }};
    }

    let console_filter = self.console_filter.unwrap_or_else(|| filter!("CONSOLE_LOG"));
    let file = self.log_file_path.map(|p| (p, self.file_filter.unwrap_or_else(|| filter!("FILE_LOG"))));
    AppTracing::new(console_filter, file)
  }
}

pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing {
  _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(
    console_filter: EnvFilter,
    file: Option<(PathBuf, EnvFilter)>,
  ) -> Self {
    use std::io;

    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    #[cfg(feature = "app_tracing_file")] let _file_tracing = {
      use std::fs::{create_dir_all, File};
      use std::io::BufWriter;

      if let Some((file_path, filter)) = file {
        let result = (|| {
          if let Some(parent) = file_path.parent() {
            create_dir_all(parent)?;
          }
          File::create(&file_path)
        })();
        match result {
          Err(e) => {
            layered.init();
            tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
            FileTracing::default()
          }
          Ok(log_file) => {
            let writer = BufWriter::new(log_file);
            let (non_blocking, guard) = tracing_appender::non_blocking(writer);
            let layered = layered.with(
              tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(filter)
            );
            layered.init();
            FileTracing { _guard: Some(guard) }
          }
        }
      } else {
        layered.init();
        FileTracing::default()
      }
    };
    #[cfg(not(feature = "app_tracing_file"))] let _file_tracing = {
      if let Some((file_path, _)) = file {
        layered.init();
        tracing::warn!("Cannot log to file '{}'; file logging is not enabled", file_path.display());
      } else {
        layered.init();
      }
      FileTracing::default()
    };

    Self { _file_tracing }
  }
}


#[cfg(all(test, feature = "app_tracing_file"))]
mod tests {
  use super::*;

  #[test]
  fn file_guard_flushes_on_drop() {
    let log_file_path = std::env::temp_dir().join(format!("choice_core-{}", std::process::id())).join("test.log");
    let app_tracing = AppTracingBuilder::default()
      .with_console_filter(EnvFilter::new("off"))
      .with_log_file_path(log_file_path.clone())
      .with_file_filter(EnvFilter::new("info"))
      .build();
    tracing::info!("written through the file guard");
    drop(app_tracing);

    let contents = std::fs::read_to_string(&log_file_path).unwrap();
    assert!(contents.contains("written through the file guard"));
    let _ = std::fs::remove_dir_all(log_file_path.parent().unwrap());
  }
}
