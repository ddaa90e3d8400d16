//! Session configuration for salesdesk.
//!
//! Configuration is layered, later sources winning:
//! - Built-in defaults
//! - Config file (`.salesdesk/config.yaml`)
//! - Environment variables
//! - Command-line flags
//!
//! The resulting `AppConfig` is the explicit session value handed to every
//! component; nothing reads ambient globals after startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Name of the per-workspace state directory.
pub const DATA_DIR: &str = ".salesdesk";

/// File name of the interaction log database.
pub const DEFAULT_DB_FILE: &str = "agent_memory.db";

/// Number of dataset rows rendered into the context snippet.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Environment variable consulted for a Gemini key when nothing else is set.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

const KNOWN_PROVIDERS: [&str; 2] = ["gemini", "ollama"];

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .salesdesk/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// LLM provider ("gemini" or "ollama")
    pub provider: String,

    /// Model identifier passed to the provider
    pub model: String,

    /// API key supplied for this session
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Explicit interaction log path (defaults under .salesdesk/)
    pub db_path: Option<PathBuf>,

    /// Rows of the dataset included as context
    pub preview_rows: usize,

    /// Log level override
    pub log_level: Option<String>,

    /// Disable colored output
    pub no_color: bool,

    /// LLM provider configurations
    pub llm: Option<LlmConfig>,
}

/// LLM configuration from config.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(rename = "activeProvider")]
    pub active_provider: String,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Per-provider blocks, keyed by provider name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,

    #[serde(default)]
    pub ollama: Option<OllamaConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Environment variable holding the API key (replaces `GEMINI_API_KEY`)
    #[serde(rename = "apiKeyEnv", default)]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    /// Base URL up to and including `/models`
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub model: Option<String>,
}

impl ProvidersConfig {
    /// Model configured for `provider`, if any.
    pub fn model(&self, provider: &str) -> Option<&str> {
        match provider {
            "gemini" => self.gemini.as_ref()?.model.as_deref(),
            "ollama" => self.ollama.as_ref()?.model.as_deref(),
            _ => None,
        }
    }

    /// Custom endpoint configured for `provider`, if any.
    pub fn endpoint(&self, provider: &str) -> Option<&str> {
        match provider {
            "gemini" => self.gemini.as_ref()?.endpoint.as_deref(),
            "ollama" => self.ollama.as_ref()?.endpoint.as_deref(),
            _ => None,
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    llm: Option<LlmConfig>,
    workspace: Option<WorkspaceConfig>,
    memory: Option<MemoryConfig>,
    dataset: Option<DatasetConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemoryConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DatasetConfig {
    #[serde(rename = "previewRows")]
    preview_rows: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            provider: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
            db_path: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            log_level: None,
            no_color: false,
            llm: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file, environment variables and defaults.
    ///
    /// An explicit `workspace` or `config_file` takes precedence over its
    /// environment variable.
    ///
    /// Environment variables:
    /// - `SALESDESK_WORKSPACE`: Override workspace path
    /// - `SALESDESK_CONFIG`: Path to config file
    /// - `SALESDESK_PROVIDER`: LLM provider
    /// - `SALESDESK_MODEL`: Model identifier
    /// - `SALESDESK_API_KEY`: API key
    /// - `SALESDESK_DB`: Interaction log path
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load_from(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) = workspace.or_else(|| {
            std::env::var("SALESDESK_WORKSPACE").ok().map(PathBuf::from)
        }) {
            config.workspace = workspace;
        }

        config.config_file =
            config_file.or_else(|| std::env::var("SALESDESK_CONFIG").ok().map(PathBuf::from));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = match config.config_file {
            Some(ref cf) => cf.clone(),
            None => config.data_dir().join("config.yaml"),
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("SALESDESK_PROVIDER") {
            config.provider = provider.to_lowercase();
        }

        if let Ok(model) = std::env::var("SALESDESK_MODEL") {
            config.model = model;
        }

        if let Ok(db) = std::env::var("SALESDESK_DB") {
            config.db_path = Some(PathBuf::from(db));
        }

        config.api_key = std::env::var("SALESDESK_API_KEY").ok();

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(path) = config_file.workspace.and_then(|ws| ws.path) {
            result.workspace = PathBuf::from(path);
        }

        if let Some(path) = config_file.memory.and_then(|m| m.path) {
            result.db_path = Some(PathBuf::from(path));
        }

        if let Some(rows) = config_file.dataset.and_then(|d| d.preview_rows) {
            result.preview_rows = rows;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(llm) = config_file.llm {
            result.provider = llm.active_provider.to_lowercase();

            if let Some(model) = llm.providers.model(&result.provider) {
                result.model = model.to_string();
            }

            result.llm = Some(llm);
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over both the config file and the environment.
    /// `verbose` only raises the log level to `debug` when none was given.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        provider: Option<String>,
        model: Option<String>,
        api_key: Option<String>,
        db_path: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(provider) = provider {
            self.provider = provider.to_lowercase();
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(api_key) = api_key {
            self.api_key = Some(api_key);
        }

        if let Some(db_path) = db_path {
            self.db_path = Some(db_path);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose && self.log_level.is_none() {
            self.log_level = Some("debug".to_string());
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .salesdesk directory.
    pub fn data_dir(&self) -> PathBuf {
        self.workspace.join(DATA_DIR)
    }

    /// Path of the interaction log database.
    pub fn memory_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| self.data_dir().join(DEFAULT_DB_FILE))
    }

    /// Custom endpoint for a provider, if configured.
    pub fn endpoint(&self, provider: &str) -> Option<&str> {
        self.llm.as_ref()?.providers.endpoint(provider)
    }

    /// Name of the environment variable holding the key for `provider`.
    ///
    /// `llm.providers.gemini.apiKeyEnv` when set, otherwise `GEMINI_API_KEY`.
    /// Ollama takes no key.
    pub fn api_key_env(&self, provider: &str) -> Option<&str> {
        if provider != "gemini" {
            return None;
        }

        self.llm
            .as_ref()
            .and_then(|llm| llm.providers.gemini.as_ref())
            .and_then(|gemini| gemini.api_key_env.as_deref())
            .or(Some(GEMINI_API_KEY_ENV))
    }

    /// Resolve the API key for a provider.
    ///
    /// Order: explicit session key, then the variable named by
    /// [`AppConfig::api_key_env`]. Blank values count as missing.
    pub fn resolve_api_key(&self, provider: &str) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.trim().is_empty() {
                return Some(key.clone());
            }
        }

        let var = self.api_key_env(provider)?;
        std::env::var(var).ok().filter(|key| !key.trim().is_empty())
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let provider = self.provider.as_str();

        if !KNOWN_PROVIDERS.contains(&provider) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                provider,
                KNOWN_PROVIDERS.join(", ")
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier cannot be empty".to_string()));
        }

        if self.preview_rows == 0 {
            return Err(AppError::Config(
                "dataset.previewRows must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
