//! Error types for the Specify CLI

use thiserror::Error;

/// Result type alias using the CLI's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project setup error types
#[derive(Error, Debug)]
pub enum Error {
    /// Required external tool not found on the search path
    #[error("{tool} not found. Install with: {hint}")]
    ToolMissing {
        /// Executable name
        tool: String,
        /// Human install hint
        hint: String,
    },

    /// Unknown AI assistant flavor
    #[error("invalid AI assistant '{flavor}'. Choose from: {available}")]
    InvalidSelection {
        /// The rejected flavor key
        flavor: String,
        /// Comma-separated valid keys
        available: String,
    },

    /// Target directory already exists (create mode)
    #[error("directory '{path}' already exists")]
    AlreadyExists {
        /// The occupied path
        path: String,
    },

    /// No template asset matches the requested flavor
    #[error("no template found for AI assistant '{flavor}'. Available assets: {available}")]
    NotFound {
        /// The requested flavor key
        flavor: String,
        /// Names of the assets that were available
        available: String,
    },

    /// Transport error while downloading the template
    #[error("template download failed: {message}")]
    DownloadFailed {
        /// What went wrong
        message: String,
    },

    /// Corrupt archive or failed extraction/copy
    #[error("template extraction failed: {message}")]
    ExtractFailed {
        /// What went wrong
        message: String,
    },

    /// Git repository initialization failed (non-fatal at the command level)
    #[error("git repository initialization failed: {message}")]
    RepoInitFailed {
        /// What went wrong
        message: String,
    },

    /// Selection menu aborted via escape or interrupt
    #[error("selection cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a tool missing error
    pub fn tool_missing(tool: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::ToolMissing {
            tool: tool.into(),
            hint: hint.into(),
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(flavor: impl Into<String>, available: impl Into<String>) -> Self {
        Self::InvalidSelection {
            flavor: flavor.into(),
            available: available.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// Create a not found error
    pub fn not_found(flavor: impl Into<String>, available: impl Into<String>) -> Self {
        Self::NotFound {
            flavor: flavor.into(),
            available: available.into(),
        }
    }

    /// Create a download failed error
    pub fn download_failed(message: impl Into<String>) -> Self {
        Self::DownloadFailed {
            message: message.into(),
        }
    }

    /// Create an extract failed error
    pub fn extract_failed(message: impl Into<String>) -> Self {
        Self::ExtractFailed {
            message: message.into(),
        }
    }

    /// Create a repo init failed error
    pub fn repo_init_failed(message: impl Into<String>) -> Self {
        Self::RepoInitFailed {
            message: message.into(),
        }
    }
}
