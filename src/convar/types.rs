//! Console variable type
//!
//! A [`ConVar`] carries the static description the config generator needs
//! (name, default, flags, help text, bounds) plus the current value that the
//! config reader overwrites.
//!
//! ```
//! use cvarcfg::{ConVar, ConVarFlags};
//!
//! let enabled = ConVar::new("sm_sample_enabled", "1")
//!     .with_help("Enable the sample extension")
//!     .with_flags(ConVarFlags::NOTIFY)
//!     .with_min(0.0)
//!     .with_max(1.0);
//!
//! assert!(enabled.get_bool());
//! enabled.set_value("0");
//! assert!(!enabled.get_bool());
//! assert_eq!(enabled.default_value(), "1");
//! ```

use super::flags::ConVarFlags;
use crate::events::ChangeListeners;
use crate::sync::RwLockExt;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

// =============================================================================
// Bounds
// =============================================================================

/// Optional numeric bounds of a convar
///
/// Bounds are documentation only: they are written to the generated config
/// but never enforced when a value is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
}

impl Bounds {
    /// No bounds declared
    pub const NONE: Self = Self {
        min: None,
        max: None,
    };

    /// Build from the host's `(has_min, min, has_max, max)` quadruple
    #[must_use]
    pub fn from_parts(has_min: bool, min: f32, has_max: bool, max: f32) -> Self {
        Self {
            min: has_min.then_some(min),
            max: has_max.then_some(max),
        }
    }
}

// =============================================================================
// ConVar
// =============================================================================

/// A named runtime-adjustable value owned by a plugin extension
pub struct ConVar {
    name: String,
    default_value: String,
    flags: ConVarFlags,
    help_text: String,
    bounds: Bounds,
    value: RwLock<String>,
    listeners: ChangeListeners,
}

impl ConVar {
    /// Create a convar whose current value starts at `default_value`
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        Self {
            name: name.into(),
            value: RwLock::new(default_value.clone()),
            default_value,
            flags: ConVarFlags::NONE,
            help_text: String::new(),
            bounds: Bounds::NONE,
            listeners: ChangeListeners::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    #[must_use]
    pub fn with_flags(mut self, flags: ConVarFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the help text (may span several lines)
    #[must_use]
    pub fn with_help(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f32) -> Self {
        self.bounds.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f32) -> Self {
        self.bounds.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    // =========================================================================
    // Static description
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn flags(&self) -> ConVarFlags {
        self.flags
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min(&self) -> Option<f32> {
        self.bounds.min
    }

    pub fn max(&self) -> Option<f32> {
        self.bounds.max
    }

    /// Whether this convar takes part in config files
    pub fn is_persisted(&self) -> bool {
        self.flags.is_persisted()
    }

    // =========================================================================
    // Current value
    // =========================================================================

    /// Current value as a string
    pub fn get_string(&self) -> String {
        self.value.read_recovered().clone()
    }

    /// Current value as a float, 0.0 when it does not parse
    pub fn get_float(&self) -> f32 {
        self.value.read_recovered().trim().parse().unwrap_or(0.0)
    }

    /// Current value as an integer
    ///
    /// Float values are truncated toward zero; anything else is 0.
    pub fn get_int(&self) -> i32 {
        let value = self.value.read_recovered();
        let trimmed = value.trim();
        trimmed
            .parse::<i32>()
            .ok()
            .or_else(|| trimmed.parse::<f32>().ok().map(|f| f as i32))
            .unwrap_or(0)
    }

    /// Current value as a boolean (any non-zero integer is true)
    pub fn get_bool(&self) -> bool {
        self.get_int() != 0
    }

    /// Replace the current value.
    ///
    /// Listeners run after the lock is released and only when the value
    /// actually changed. Returns whether it changed.
    pub fn set_value(&self, value: &str) -> bool {
        let old = {
            let mut current = self.value.write_recovered();
            if *current == value {
                return false;
            }
            std::mem::replace(&mut *current, value.to_string())
        };

        self.listeners.notify(&self.name, &old, value);
        true
    }

    /// Restore the default value
    pub fn reset(&self) -> bool {
        let default = self.default_value.clone();
        self.set_value(&default)
    }

    /// Register a listener receiving (`name`, `old_value`, `new_value`)
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&str, &str, &str) + Send + Sync + 'static,
    {
        self.listeners.on_change(callback);
    }

    /// Serializable snapshot of this convar
    pub fn info(&self) -> ConVarInfo {
        ConVarInfo {
            name: self.name.clone(),
            default_value: self.default_value.clone(),
            value: self.get_string(),
            flags: self.flags,
            help_text: self.help_text.clone(),
            bounds: self.bounds,
        }
    }
}

impl std::fmt::Debug for ConVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConVar")
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("value", &*self.value.read_recovered())
            .field("flags", &self.flags)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Point-in-time copy of a convar, for host tooling and admin panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConVarInfo {
    pub name: String,
    #[serde(rename = "default")]
    pub default_value: String,
    pub value: String,
    pub flags: ConVarFlags,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help_text: String,
    #[serde(default)]
    pub bounds: Bounds,
}

// =============================================================================
// Tests
// =============================================================================
