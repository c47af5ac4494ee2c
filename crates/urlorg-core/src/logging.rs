//! Logging init: file under XDG state dir, optionally mirrored to stderr,
//! or graceful fallback to stderr only.

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::APP_NAME;

/// Flags from the command line that shape log output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    /// Mirror log lines to stderr as well as the log file.
    pub verbose: bool,
    /// Lower the default filter to `debug` for every target.
    pub debug: bool,
}

impl LogOptions {
    fn env_filter(&self) -> EnvFilter {
        let default = if self.debug {
            "debug"
        } else {
            "info,urlorg_core=debug"
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

/// Writer that goes to the log file, stderr, or both.
struct LogSink {
    file: Option<fs::File>,
    mirror_stderr: bool,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.mirror_stderr {
            io::stderr().lock().write_all(buf)?;
        }
        match self.file.as_mut() {
            Some(f) => f.write(buf),
            None if self.mirror_stderr => Ok(buf.len()),
            None => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(f) = self.file.as_mut() {
            f.flush()?;
        }
        io::stderr().lock().flush()
    }
}

/// Location of the log file: `~/.local/state/urlorg/urlorg.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs
        .get_state_home()
        .join(APP_NAME)
        .join(format!("{APP_NAME}.log")))
}

/// Initialize structured logging to the XDG state log file.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(opts: LogOptions) -> Result<PathBuf> {
    let log_file_path = log_file_path()?;
    if let Some(dir) = log_file_path.parent() {
        fs::create_dir_all(dir)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter {
        file: fs::File,
        mirror_stderr: bool,
    }

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = LogSink;

        fn make_writer(&'a self) -> Self::Writer {
            LogSink {
                file: self.file.try_clone().ok(),
                mirror_stderr: self.mirror_stderr,
            }
        }
    }

    let writer = BoxMakeWriter::new(FileMakeWriter {
        file,
        mirror_stderr: opts.verbose,
    });

    tracing_subscriber::fmt()
        .with_env_filter(opts.env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("urlorg logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr(opts: LogOptions) {
    tracing_subscriber::fmt()
        .with_env_filter(opts.env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
