//! Infrastructure layer constants
//!
//! Defaults for configuration, logging and provider selection.

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cex.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cex";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CEX";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING
// ============================================================================

/// Environment variable holding an `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "CEX_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix of rolled log files
pub const LOG_FILE_PREFIX: &str = "cex";

// ============================================================================
// PROVIDERS
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "null";

/// Vector index used when none is configured
pub const DEFAULT_VECTOR_INDEX_PROVIDER: &str = "in_memory";

/// Vector mover used when none is configured
pub const DEFAULT_MOVER_PROVIDER: &str = "linear";

/// Authorizer used when none is configured
pub const DEFAULT_AUTHORIZER: &str = "allow_all";
