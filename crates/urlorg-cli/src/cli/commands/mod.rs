//! CLI command handlers.

mod completions;
mod organize;
mod update;

pub use completions::print_completions;
pub use organize::run_organize;
pub use update::check_updates;
