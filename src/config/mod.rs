pub mod sites;
pub mod snapshot;

pub use sites::{resolve_sites, SiteRegistry, DEFAULT_SITE_PREFIX};
pub use snapshot::ConfigSnapshot;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 伺服器執行期設定（與 CLI 無關的部分）
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub site_prefix: String,
    pub timeout: Duration,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            site_prefix: DEFAULT_SITE_PREFIX.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site_prefix", &self.site_prefix)?;
        validate_range("timeout_secs", self.timeout.as_secs(), 1, 300)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::{ServerSettings, DEFAULT_SITE_PREFIX, DEFAULT_TIMEOUT_SECS};
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "wp-multisite")]
    #[command(about = "Expose WordPress sites as tools over a line-delimited JSON-RPC protocol")]
    pub struct CliConfig {
        /// dotenv 檔案；未指定時嘗試讀取 ./.env
        #[arg(long, env = "WP_MCP_ENV_FILE", global = true)]
        pub env_file: Option<PathBuf>,

        #[arg(long, env = "WP_MCP_SITE_PREFIX", default_value = DEFAULT_SITE_PREFIX, global = true)]
        pub site_prefix: String,

        #[arg(long, env = "WP_MCP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
        pub timeout_secs: u64,

        #[arg(long, help = "Enable verbose output", global = true)]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON", global = true)]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Option<Command>,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Serve the tool catalog over stdin/stdout (default)
        Serve,
        /// Show which sites are configured
        Sites,
        /// Print the tool catalog as JSON
        Tools,
        /// Invoke a single tool and print its result
        Call {
            tool: String,
            #[arg(long, default_value = "{}")]
            args: String,
        },
    }

    impl CliConfig {
        pub fn settings(&self) -> ServerSettings {
            ServerSettings {
                site_prefix: self.site_prefix.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            }
        }

        pub fn command(&self) -> Command {
            self.command.clone().unwrap_or(Command::Serve)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            self.settings().validate()
        }
    }
}
