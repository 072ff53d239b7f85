use serde_json::Value;
use thiserror::Error;

/// 必要的站點設定鍵（`<NAME>` 為站點名稱）
pub const REQUIRED_SITE_KEYS: [&str; 3] = ["_URL", "_USER", "_APP_PASSWORD"];

#[derive(Error, Debug)]
pub enum WpError {
    #[error(
        "No WordPress sites configured. Define {prefix}_<NAME>_URL, {prefix}_<NAME>_USER and {prefix}_<NAME>_APP_PASSWORD"
    )]
    NoSitesConfigured { prefix: String },

    #[error("Unknown site '{name}'. Known sites: {}", .known.join(", "))]
    UnknownSite { name: String, known: Vec<String> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {reason} (value: {value})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("WordPress API returned {status}: {body}")]
    Upstream { status: u16, body: Value },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Programming,
    Upstream,
    Network,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WpError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WpError::NoSitesConfigured { .. }
            | WpError::UnknownSite { .. }
            | WpError::ConfigError { .. }
            | WpError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            WpError::UnsupportedMethod(_) | WpError::SerializationError(_) => {
                ErrorCategory::Programming
            }
            WpError::Upstream { .. } => ErrorCategory::Upstream,
            WpError::Transport(_) | WpError::IoError(_) => ErrorCategory::Network,
            WpError::InvalidArguments { .. }
            | WpError::InvalidEndpoint { .. }
            | WpError::UnknownTool(_) => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Upstream | ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Programming => ErrorSeverity::Critical,
        }
    }

    /// 上游回應的 HTTP 狀態碼（僅 `Upstream` 有）
    pub fn status(&self) -> Option<u16> {
        match self {
            WpError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WpError::NoSitesConfigured { prefix } => format!(
                "Add {p}_<NAME>_URL, {p}_<NAME>_USER and {p}_<NAME>_APP_PASSWORD to the environment or the .env file",
                p = prefix
            ),
            WpError::UnknownSite { known, .. } => {
                format!("Use one of the configured sites: {}", known.join(", "))
            }
            WpError::ConfigError { .. } | WpError::InvalidConfigValueError { .. } => {
                "Check the configuration values and restart the server".to_string()
            }
            WpError::UnsupportedMethod(_) => {
                "Use one of GET, POST, PUT, PATCH or DELETE".to_string()
            }
            WpError::Upstream { status: 401 | 403, .. } => {
                "Verify the site username and application password".to_string()
            }
            WpError::Upstream { status: 404, .. } => {
                "Check that the resource id exists on the site".to_string()
            }
            WpError::Upstream { .. } => "Inspect the response body returned by WordPress".to_string(),
            WpError::Transport(_) | WpError::IoError(_) => {
                "Check network connectivity and the site base URL".to_string()
            }
            WpError::InvalidArguments { .. } => {
                "Check the tool input schema via tools/list".to_string()
            }
            WpError::InvalidEndpoint { .. } => {
                "Pass ids and slugs as plain values without '/', '?' or '#'".to_string()
            }
            WpError::UnknownTool(_) => "Use tools/list to see the available tools".to_string(),
            WpError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Upstream => format!("WordPress rejected the request: {}", self),
            ErrorCategory::Network => format!("Could not reach WordPress: {}", self),
            ErrorCategory::Input => format!("Invalid request: {}", self),
            ErrorCategory::Programming => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, WpError>;
