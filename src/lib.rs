//! # cvarcfg - Console variable config files
//!
//! Keeps a game-server plugin extension's console variables in sync with a
//! plain-text config file under the game directory.
//!
//! ## Features
//!
//! - **Auto-generated configs**: On first run, write an annotated file listing every convar with
//!   its help text, default and bounds
//! - **Apply on load**: On later runs, read the file and set each listed convar
//! - **Explicit registries**: No process-wide globals; each extension owns its default registry and
//!   may sync any number of extra ones to their own files
//! - **Host collaborators as traits**: Path resolution, token parsing and error logging can forward
//!   to the real plugin runtime
//! - **Derive support**: `#[derive(ConVars)]` registers a struct of convar handles (requires the
//!   `derive` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cvarcfg::{ConVarFlags, Extension};
//!
//! let ext = Extension::builder("sample")
//!     .game_dir("/srv/tf2/tf")
//!     .build();
//!
//! let rate = ext.create_convar(
//!     "sm_sample_rate",
//!     "5",
//!     ConVarFlags::NONE,
//!     "Samples per second",
//!     Some(1.0),
//!     None,
//! );
//!
//! ext.auto_exec_config(true, None);
//! println!("rate = {}", rate.get_int());
//! ```
//!
//! ## File Format
//!
//! ```text
//! // This file was auto-generated
//! // ConVars for extension "sample"
//!
//!
//! // Samples per second
//! // -
//! // Default: "5"
//! // Minimum: "1.00"
//! sm_sample_rate "5"
//!
//! ```
//!
//! Lines starting with `//` are comments. Assignments are `name "value"`.
//! Unknown names are ignored, so hand-added or stale entries never fail a
//! load. Convars flagged [`ConVarFlags::DONT_RECORD`] are neither written
//! nor read.
//!
//! ## Multiple Config Files
//!
//! ```rust,no_run
//! use cvarcfg::{ConVarFlags, ConVarRegistry, Extension};
//!
//! let ext = Extension::new("sample");
//! let maps = ConVarRegistry::new();
//! maps.create("sm_sample_mapcycle", "default", ConVarFlags::NONE, "", None, None);
//!
//! // cfg/sourcemod/sample_maps.cfg
//! ext.auto_exec_config_for(&maps, true, Some("sample_maps"));
//! ```

#![warn(clippy::all)]

// Core modules
mod error;
mod events;
mod extension;
pub mod host;
mod sync;
pub mod tokenizer;

// Grouped modules
pub mod config;
pub mod convar;

// Re-exports from core
pub use error::{Error, Result};
pub use events::{ChangeCallback, ChangeListeners};
pub use extension::{Extension, ExtensionBuilder};
pub use host::{ErrorSink, GameDir, LogSink, PathResolver, TokenParser};
pub use tokenizer::{MAX_TOKEN_LEN, SourceTokenizer};

// Re-exports from config
pub use config::{
    AutoExecConfig, AutoExecConfigBuilder, SyncOutcome, apply, ensure_and_apply, render_template,
};

// Re-exports from convar
pub use convar::{Bounds, ConVar, ConVarFlags, ConVarInfo, ConVarRegistry, ConVars};

// Derive macro re-export (requires `derive` feature)
/// Derive macro for registering a struct of convar handles.
///
/// # Example
///
/// ```rust,ignore
/// use cvarcfg::{ConVar, ConVarRegistry, ConVars, DeriveConVars};
/// use std::sync::Arc;
///
/// #[derive(DeriveConVars)]
/// #[convars(prefix = "sm_sample_")]
/// struct SampleConVars {
///     #[convar(default = "1", help = "Enable the sample", min = 0, max = 1, notify)]
///     enabled: Arc<ConVar>,
///
///     #[convar(name = "sm_sample_secret", default = "", dont_record)]
///     password: Arc<ConVar>,
/// }
///
/// let registry = ConVarRegistry::new();
/// let cvars = SampleConVars::register(&registry);
/// assert_eq!(cvars.enabled.name(), "sm_sample_enabled");
/// ```
#[cfg(feature = "derive")]
pub use cvarcfg_derive::ConVars as DeriveConVars;
