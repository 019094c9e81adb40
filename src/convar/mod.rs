//! Console variables and their registry
//!
//! This module contains the data the config synchronizer works on:
//! - `ConVar` - A named value with default, flags, help text and bounds
//! - `ConVarFlags` - Engine flag word (`DONT_RECORD` excludes from config files)
//! - `ConVarRegistry` - Ordered list of convars for one extension
//! - `ConVars` - Trait implemented by `#[derive(ConVars)]` structs

mod flags;
mod registry;
mod types;

pub use flags::ConVarFlags;
pub use registry::ConVarRegistry;
pub use types::{Bounds, ConVar, ConVarInfo};

/// A set of convars registered together.
///
/// Usually derived (requires the `derive` feature):
///
/// ```rust,ignore
/// use cvarcfg::{ConVar, ConVars, DeriveConVars};
/// use std::sync::Arc;
///
/// #[derive(DeriveConVars)]
/// #[convars(prefix = "sm_sample_")]
/// struct SampleConVars {
///     #[convar(default = "1", help = "Enable the sample", min = 0, max = 1)]
///     enabled: Arc<ConVar>,
/// }
/// ```
pub trait ConVars: Sized {
    /// Register every convar of the set into `registry`, in declaration order
    fn register(registry: &ConVarRegistry) -> Self;
}
