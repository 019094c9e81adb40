//! Builder for Extension
//!
//! This module contains [`ExtensionBuilder`] which provides a fluent API
//! for creating an [`Extension`](super::Extension).

use crate::config::DEFAULT_CONFIG_DIR;
use crate::convar::ConVarRegistry;
use crate::host::{ErrorSink, GameDir, LogSink, PathResolver, TokenParser};
use crate::tokenizer::SourceTokenizer;
use std::path::PathBuf;

use super::Extension;

/// Builder for creating an [`Extension`] with a fluent API.
///
/// Every host collaborator has a default, so only the extension's short name
/// is required.
///
/// # Example
///
/// ```rust
/// use cvarcfg::Extension;
///
/// let ext = Extension::builder("sample")
///     .game_dir("/srv/tf2/tf")
///     .config_dir("cfg/sourcemod")
///     .build();
///
/// assert_eq!(
///     ext.config_path(None).unwrap(),
///     std::path::Path::new("/srv/tf2/tf/cfg/sourcemod/extension.sample.cfg")
/// );
/// ```
pub struct ExtensionBuilder {
    name: String,
    config_dir: PathBuf,
    paths: Box<dyn PathResolver>,
    tokenizer: Box<dyn TokenParser>,
    errors: Box<dyn ErrorSink>,
}

impl ExtensionBuilder {
    /// Create a new builder with the extension's short name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            paths: Box::new(GameDir::default()),
            tokenizer: Box::new(SourceTokenizer),
            errors: Box::new(LogSink),
        }
    }

    /// Resolve config paths inside this game directory.
    ///
    /// Supports `~` expansion for home directory.
    pub fn game_dir(mut self, root: impl Into<PathBuf>) -> Self {
        self.paths = Box::new(GameDir::new(root));
        self
    }

    /// Set the config directory relative to the game root (default: "cfg/sourcemod").
    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Use the host's path resolution instead of a plain game directory.
    pub fn path_resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
        self.paths = Box::new(resolver);
        self
    }

    /// Use the host's token parser.
    pub fn token_parser(mut self, parser: impl TokenParser + 'static) -> Self {
        self.tokenizer = Box::new(parser);
        self
    }

    /// Send failures to the host's error log instead of `log::error!`.
    pub fn error_sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.errors = Box::new(sink);
        self
    }

    /// Build the [`Extension`] with an empty default registry.
    pub fn build(self) -> Extension {
        Extension {
            name: self.name,
            convars: ConVarRegistry::new(),
            config_dir: self.config_dir,
            paths: self.paths,
            tokenizer: self.tokenizer,
            errors: self.errors,
        }
    }
}
