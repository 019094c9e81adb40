//! Config file synchronization
//!
//! This module contains everything between a registry and its file on disk:
//! - `AutoExecConfig` - Where the file lives and whether it may be created
//! - `render_template` - The annotated file written on first run
//! - `ensure_and_apply` / `apply` - Generate-if-missing, then parse-and-set

mod exec;
mod template;
mod types;

pub use exec::{SyncOutcome, apply, ensure_and_apply, generate};
pub use template::render_template;
pub use types::{AutoExecConfig, AutoExecConfigBuilder, CONFIG_EXTENSION, DEFAULT_CONFIG_DIR};
