use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::OpenOptions;
use std::io::Write;

use crate::error::{Result, StylegenError};

static INSTALLED: OnceCell<String> = OnceCell::new();

struct FileLogger {
    file_path: String,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a debug-level logger that appends to `path`.
///
/// Returns `Ok(false)` if this function already installed a logger, and
/// `LoggerInstalled` if some other logger owns the process.
pub fn init_logger(path: &str) -> Result<bool> {
    let mut fresh = false;
    INSTALLED.get_or_try_init(|| {
        let logger = FileLogger {
            file_path: path.to_string(),
        };
        log::set_boxed_logger(Box::new(logger)).map_err(|_| StylegenError::LoggerInstalled)?;
        log::set_max_level(LevelFilter::Debug);
        fresh = true;
        Ok::<_, StylegenError>(path.to_string())
    })?;
    Ok(fresh)
}

/// Path of the log file installed by [`init_logger`], if any.
pub fn log_path() -> Option<&'static str> {
    INSTALLED.get().map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_a_no_op() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first_path = dir.path().join("first.log");
        let second_path = dir.path().join("second.log");
        let first = first_path.to_str().expect("utf-8 path");
        let second = second_path.to_str().expect("utf-8 path");

        assert!(init_logger(first).unwrap());
        assert!(!init_logger(second).unwrap());
        assert_eq!(log_path(), Some(first));

        log::debug!("compiled 3 scopes for .card_z9");

        let contents = std::fs::read_to_string(&first_path).expect("log file written");
        assert!(contents.contains("[DEBUG]"));
        assert!(contents.contains("compiled 3 scopes for .card_z9"));
        assert!(!second_path.exists());
    }
}
