pub mod config;
pub mod error;
pub mod logging;

pub mod cache;
pub mod control;
pub mod merge;
pub mod normalize;
pub mod pool;
pub mod session;
pub mod update;
pub mod url_file;
pub mod validate;

/// Application name used for XDG directories and log file naming.
pub const APP_NAME: &str = "urlorg";
