//! Helpers that read typed values out of a command's flag context, fall back
//! to environment variables, and assemble the download configuration handed
//! to the transfer layer.

pub mod config;
pub mod context;
pub mod download;
pub mod env;
pub mod error;
pub mod flags;
pub mod help;
pub mod logging;
pub mod registry;
pub mod secret;
pub mod threads;

pub use context::{FlagContext, StaticContext};
pub use download::{
    build_download_configuration, build_download_configuration_with, DownloadConfiguration,
};
pub use env::{EnvLookup, MapEnv, ProcessEnv};
pub use error::FlagError;
pub use registry::{get_command_flags, FlagDescriptor, FlagKind};
