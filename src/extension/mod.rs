//! Extension context
//!
//! An [`Extension`] is created once when the plugin loads. It owns the
//! extension's default convar registry and the host collaborators, and is
//! passed explicitly to whatever needs it. Additional registries (one per
//! extra config file) can be synchronised through the same context.

mod builder;

pub use builder::ExtensionBuilder;

use crate::config::{self, AutoExecConfig, AutoExecConfigBuilder, SyncOutcome};
use crate::convar::{ConVar, ConVarFlags, ConVarRegistry, ConVars};
use crate::error::{Error, Result};
use crate::host::{ErrorSink, PathResolver, TokenParser};
use std::path::PathBuf;
use std::sync::Arc;

/// A plugin extension with its default convar registry
///
/// # Example
///
/// ```rust,no_run
/// use cvarcfg::{ConVarFlags, Extension};
///
/// let ext = Extension::builder("sample").game_dir("/srv/tf2/tf").build();
///
/// let enabled = ext.create_convar(
///     "sm_sample_enabled",
///     "1",
///     ConVarFlags::NOTIFY,
///     "Enable the sample extension",
///     Some(0.0),
///     Some(1.0),
/// );
///
/// // Writes cfg/sourcemod/extension.sample.cfg on first run, reads it afterwards
/// ext.auto_exec_config(true, None);
///
/// if enabled.get_bool() {
///     // ...
/// }
/// ```
pub struct Extension {
    name: String,
    convars: ConVarRegistry,
    config_dir: PathBuf,
    paths: Box<dyn PathResolver>,
    tokenizer: Box<dyn TokenParser>,
    errors: Box<dyn ErrorSink>,
}

impl Extension {
    /// Create a new builder for Extension
    pub fn builder(name: impl Into<String>) -> ExtensionBuilder {
        ExtensionBuilder::new(name)
    }

    /// Create an extension with default host collaborators
    pub fn new(name: impl Into<String>) -> Self {
        ExtensionBuilder::new(name).build()
    }

    /// Extension short name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default registry
    pub fn convars(&self) -> &ConVarRegistry {
        &self.convars
    }

    // =========================================================================
    // Registration (default registry)
    // =========================================================================

    /// Append a convar to the default registry
    pub fn add_convar(&self, var: Arc<ConVar>) {
        self.convars.register(var);
    }

    /// Create a convar in the default registry and return its handle
    pub fn create_convar(
        &self,
        name: &str,
        default_value: &str,
        flags: ConVarFlags,
        help_text: &str,
        min: Option<f32>,
        max: Option<f32>,
    ) -> Arc<ConVar> {
        self.convars
            .create(name, default_value, flags, help_text, min, max)
    }

    /// Register a whole convar set into the default registry
    pub fn register<T: ConVars>(&self) -> T {
        T::register(&self.convars)
    }

    // =========================================================================
    // Config files
    // =========================================================================

    /// Config builder preset with this extension's name and config directory
    pub fn config(&self) -> AutoExecConfigBuilder {
        AutoExecConfig::builder(self.name.as_str()).config_dir(self.config_dir.clone())
    }

    /// Absolute path of a config file (`None` for the default name)
    ///
    /// # Errors
    ///
    /// Returns an error if the name or config directory is not allowed.
    pub fn config_path(&self, name: Option<&str>) -> Result<PathBuf> {
        let config = self.config().maybe_config_name(name).build()?;
        Ok(self.resolve(&config))
    }

    /// Synchronise the default registry with its config file.
    ///
    /// Failures are reported to the error sink and yield `None`; the convars
    /// keep their in-memory values.
    pub fn auto_exec_config(&self, auto_create: bool, name: Option<&str>) -> Option<SyncOutcome> {
        self.auto_exec_config_for(&self.convars, auto_create, name)
    }

    /// Synchronise any registry with its config file, reporting failures.
    pub fn auto_exec_config_for(
        &self,
        registry: &ConVarRegistry,
        auto_create: bool,
        name: Option<&str>,
    ) -> Option<SyncOutcome> {
        let result = self
            .config()
            .maybe_config_name(name)
            .auto_create(auto_create)
            .build()
            .and_then(|config| self.try_exec(registry, &config));
        self.report(result)
    }

    /// Synchronise a registry according to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileCreate`] or [`Error::FileRead`] on I/O failure.
    /// Nothing is sent to the error sink.
    pub fn try_exec(&self, registry: &ConVarRegistry, config: &AutoExecConfig) -> Result<SyncOutcome> {
        let path = self.resolve(config);
        config::ensure_and_apply(
            &path,
            registry,
            &config.extension_name,
            config.auto_create,
            self.tokenizer.as_ref(),
        )
    }

    /// Apply an existing config file to a registry without generating it.
    ///
    /// Returns the number of values applied, or `None` after reporting the
    /// failure to the error sink.
    pub fn exec_config(&self, registry: &ConVarRegistry, name: Option<&str>) -> Option<usize> {
        let result = self
            .config_path(name)
            .and_then(|path| config::apply(&path, registry, self.tokenizer.as_ref()));
        self.report(result)
    }

    fn resolve(&self, config: &AutoExecConfig) -> PathBuf {
        self.paths.build_path(&config.relative_path())
    }

    fn report<T>(&self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    fn report_error(&self, err: &Error) {
        self.errors.log_error(&self.name, &err.to_string());
    }
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension")
            .field("name", &self.name)
            .field("config_dir", &self.config_dir)
            .field("convars", &self.convars.len())
            .finish_non_exhaustive()
    }
}
