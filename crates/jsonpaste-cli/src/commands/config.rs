//! Config command implementation.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/jsonpaste/config.toml`
//! - macOS: `~/Library/Application Support/jsonpaste/config.toml`
//! - Windows: `%APPDATA%\jsonpaste\config.toml`
//!
//! The `JSONPASTE_CONFIG` environment variable overrides the location.

use crate::actions::ConfigAction;
use anyhow::{Context, Result, bail};
use jsonpaste_core::cli::{ExitCode, OutputFormat};
use jsonpaste_core::{DispatcherConfig, MAX_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "JSONPASTE_CONFIG";

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

const KNOWN_KEYS: [&str; 5] = [
    "general.default_format",
    "general.log_level",
    "generator.executable",
    "generator.timeout_seconds",
    "generator.temp_dir",
];

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// default_format = "pretty"
/// log_level = "warn"
///
/// [generator]
/// executable = "/usr/local/bin/quicktype"
/// timeout_seconds = 60
/// temp_dir = "/tmp/jsonpaste"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default report format (json, text, pretty)
    pub default_format: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Absolute path of the generator; `quicktype` on `PATH` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    /// Seconds before a running generator is killed
    pub timeout_seconds: u64,

    /// Directory for temporary input files; system temp dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default().as_str().to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            executable: None,
            timeout_seconds: jsonpaste_core::DEFAULT_TIMEOUT.as_secs(),
            temp_dir: None,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if !OutputFormat::NAMES.contains(&self.general.default_format.as_str()) {
            bail!(
                "invalid default_format '{}', must be one of: {}",
                self.general.default_format,
                OutputFormat::NAMES.join(", ")
            );
        }

        if !VALID_LEVELS.contains(&self.general.log_level.as_str()) {
            bail!(
                "invalid log_level '{}', must be one of: {}",
                self.general.log_level,
                VALID_LEVELS.join(", ")
            );
        }

        if self.generator.timeout_seconds == 0 {
            bail!("generator.timeout_seconds must be greater than 0");
        }

        if self.generator.timeout_seconds > MAX_TIMEOUT.as_secs() {
            bail!(
                "generator.timeout_seconds cannot exceed {} seconds",
                MAX_TIMEOUT.as_secs()
            );
        }

        Ok(())
    }

    /// The default report format.
    ///
    /// # Errors
    ///
    /// Returns an error if `general.default_format` is not a known format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.general
            .default_format
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
    }

    /// Dispatcher settings derived from the `[generator]` section.
    #[must_use]
    pub fn to_dispatcher_config(&self) -> DispatcherConfig {
        let mut builder = DispatcherConfig::builder()
            .timeout(Duration::from_secs(self.generator.timeout_seconds));
        if let Some(executable) = &self.generator.executable {
            builder = builder.executable(executable);
        }
        if let Some(dir) = &self.generator.temp_dir {
            builder = builder.temp_dir(dir);
        }
        builder.build()
    }
}

/// Gets the configuration file path.
///
/// # Errors
///
/// Returns an error if no config directory can be determined.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("jsonpaste").join("config.toml"))
}

/// Loads configuration from the default location or returns defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Loads configuration from `path`, or defaults when the file is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file {} not found, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config.validate()?;

    Ok(config)
}

/// Writes `config` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if validation, serialization or writing fails.
pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }

    let toml_str = toml::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, toml_str)
        .with_context(|| format!("failed to write config file {}", path.display()))?;

    debug!("Saved config to {}", path.display());
    Ok(())
}

/// Gets a configuration value by key path (e.g. `generator.timeout_seconds`).
///
/// Unset optional values are reported as `none`.
#[must_use]
pub fn get_config_value_by_key(config: &Config, key: &str) -> Option<String> {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "none".to_string());
    match key {
        "general.default_format" => Some(config.general.default_format.clone()),
        "general.log_level" => Some(config.general.log_level.clone()),
        "generator.executable" => Some(optional(&config.generator.executable)),
        "generator.timeout_seconds" => Some(config.generator.timeout_seconds.to_string()),
        "generator.temp_dir" => Some(optional(&config.generator.temp_dir)),
        _ => None,
    }
}

/// Sets a configuration value by key path.
///
/// # Errors
///
/// Returns an error for unknown keys and unparsable numbers.
pub fn set_config_value_by_key(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let optional = |value: &str| {
        let value = value.trim();
        (!value.is_empty() && value != "none").then(|| value.to_string())
    };

    match key {
        "general.default_format" => config.general.default_format = value.to_string(),
        "general.log_level" => config.general.log_level = value.to_lowercase(),
        "generator.executable" => config.generator.executable = optional(value),
        "generator.timeout_seconds" => {
            config.generator.timeout_seconds = value
                .parse()
                .context("invalid value for timeout_seconds, must be a number")?;
        }
        "generator.temp_dir" => config.generator.temp_dir = optional(value),
        _ => bail!(
            "unknown configuration key: {key}\n\nAvailable keys:\n  {}",
            KNOWN_KEYS.join("\n  ")
        ),
    }

    Ok(())
}

/// Initialization result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a new file was written
    pub created: bool,
    /// Status message
    pub message: String,
    /// Config file path
    pub path: String,
}

/// Configuration value result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigValue {
    /// Configuration key
    pub key: String,
    /// Configuration value
    pub value: String,
}

/// Runs the config command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, validated or
/// written.
pub async fn run(action: ConfigAction, output_format: OutputFormat) -> Result<ExitCode> {
    info!("Config action: {:?}", action);

    let path = config_path()?;
    match action {
        ConfigAction::Init => {
            let result = init_config(&path)?;
            print(&result, output_format)?;
        }
        ConfigAction::Show => {
            let config = load_config_from(&path)?;
            print(&config, output_format)?;
        }
        ConfigAction::Get { key } => {
            let config = load_config_from(&path)?;
            let Some(value) = get_config_value_by_key(&config, &key) else {
                bail!(
                    "configuration key '{key}' not found\n\nAvailable keys:\n  {}",
                    KNOWN_KEYS.join("\n  ")
                );
            };
            print(&ConfigValue { key, value }, output_format)?;
        }
        ConfigAction::Set { key, value } => {
            let mut config = load_config_from(&path)?;
            set_config_value_by_key(&mut config, &key, &value)?;
            save_config_to(&config, &path)?;
            let value = get_config_value_by_key(&config, &key).unwrap_or(value);
            print(&ConfigValue { key, value }, output_format)?;
        }
        ConfigAction::Path => println!("{}", path.display()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Creates a default configuration file unless one already exists.
fn init_config(path: &Path) -> Result<InitResult> {
    if path.exists() {
        return Ok(InitResult {
            created: false,
            message: "configuration file already exists".to_string(),
            path: path.display().to_string(),
        });
    }

    save_config_to(&Config::default(), path)?;
    Ok(InitResult {
        created: true,
        message: "configuration file created with default values".to_string(),
        path: path.display().to_string(),
    })
}

fn print<T: Serialize>(data: &T, output_format: OutputFormat) -> Result<()> {
    let formatted = crate::formatters::format_output(data, output_format)
        .context("failed to format configuration output")?;
    println!("{formatted}");
    Ok(())
}
