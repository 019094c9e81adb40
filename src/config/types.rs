//! Config file location for one registry

use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Directory, relative to the game root, holding extension configs
pub const DEFAULT_CONFIG_DIR: &str = "cfg/sourcemod";

/// File extension every config name ends with
pub const CONFIG_EXTENSION: &str = ".cfg";

static CONFIG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("config name pattern is valid"));

/// Describes where a registry's config file lives and whether it may be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoExecConfig {
    /// Extension short name, written into the generated header
    pub extension_name: String,

    /// Directory relative to the game root
    pub config_dir: PathBuf,

    /// File name including the `.cfg` extension
    pub config_name: String,

    /// Generate the file from defaults when it is missing
    pub auto_create: bool,
}

impl AutoExecConfig {
    /// Create a new builder for AutoExecConfig
    ///
    /// # Example
    /// ```rust
    /// use cvarcfg::AutoExecConfig;
    ///
    /// let config = AutoExecConfig::builder("sample").build().unwrap();
    /// assert_eq!(config.config_name, "extension.sample.cfg");
    /// assert_eq!(
    ///     config.relative_path(),
    ///     std::path::Path::new("cfg/sourcemod/extension.sample.cfg")
    /// );
    /// ```
    pub fn builder(extension_name: impl Into<String>) -> AutoExecConfigBuilder {
        AutoExecConfigBuilder::new(extension_name)
    }

    /// Default file name for an extension (`extension.<name>.cfg`)
    pub fn default_config_name(extension_name: &str) -> String {
        format!("extension.{extension_name}{CONFIG_EXTENSION}")
    }

    /// Path of the config file relative to the game root
    pub fn relative_path(&self) -> PathBuf {
        self.config_dir.join(&self.config_name)
    }
}

/// Builder for creating AutoExecConfig with a fluent API
#[derive(Debug, Clone)]
pub struct AutoExecConfigBuilder {
    extension_name: String,
    config_dir: PathBuf,
    config_name: Option<String>,
    auto_create: bool,
}

impl AutoExecConfigBuilder {
    pub fn new(extension_name: impl Into<String>) -> Self {
        Self {
            extension_name: extension_name.into(),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_name: None,
            auto_create: true,
        }
    }

    /// Set the directory relative to the game root (default: "cfg/sourcemod")
    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Set the config name (default: `extension.<name>.cfg`)
    ///
    /// `.cfg` is appended when missing.
    pub fn config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = Some(name.into());
        self
    }

    /// Use the default name when `name` is `None`
    pub fn maybe_config_name(mut self, name: Option<&str>) -> Self {
        if let Some(name) = name {
            self.config_name = Some(name.to_string());
        }
        self
    }

    /// Whether a missing file is generated from defaults (default: true)
    pub fn auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }

    /// Build the AutoExecConfig
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfigName`] if the file name has characters
    /// outside `[A-Za-z0-9_.-]` or contains `..`, and
    /// [`Error::InvalidConfigDir`] if the directory is absolute or climbs out
    /// of the game root.
    pub fn build(self) -> Result<AutoExecConfig> {
        let config_name = match self.config_name {
            Some(name) if name.ends_with(CONFIG_EXTENSION) => name,
            Some(name) => format!("{name}{CONFIG_EXTENSION}"),
            None => AutoExecConfig::default_config_name(&self.extension_name),
        };
        validate_config_name(&config_name)?;
        validate_config_dir(&self.config_dir)?;

        Ok(AutoExecConfig {
            extension_name: self.extension_name,
            config_dir: self.config_dir,
            config_name,
            auto_create: self.auto_create,
        })
    }
}

fn validate_config_name(name: &str) -> Result<()> {
    if name == CONFIG_EXTENSION || !CONFIG_NAME_RE.is_match(name) || name.contains("..") {
        return Err(Error::InvalidConfigName(name.to_string()));
    }
    Ok(())
}

fn validate_config_dir(dir: &Path) -> Result<()> {
    let escapes = dir
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(Error::InvalidConfigDir(dir.display().to_string()));
    }
    Ok(())
}
