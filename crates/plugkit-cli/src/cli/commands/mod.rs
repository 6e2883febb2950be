//! CLI command handlers, one per file.

mod download_config;
mod exec;
mod flags;
mod whoami;

pub use download_config::run_download_config;
pub use exec::run_exec;
pub use flags::run_flags;
pub use whoami::run_whoami;
