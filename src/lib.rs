pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::server::ToolServer;
pub use app::tools::ToolCatalog;
pub use config::{ConfigSnapshot, ServerSettings, SiteRegistry};
pub use core::dispatcher::RestDispatcher;
pub use utils::error::{Result, WpError};
