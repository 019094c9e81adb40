//! Ordered convar registry
//!
//! Registration order is preserved because it decides the order in which
//! convars appear in a generated config file. Names are not checked for
//! uniqueness; the host owns that rule.

use super::flags::ConVarFlags;
use super::types::{Bounds, ConVar, ConVarInfo};
use crate::sync::RwLockExt;
use log::debug;
use std::sync::{Arc, RwLock};

/// Ordered collection of convars for one extension or sub-feature
///
/// The registry is safe to share between threads; every access goes through
/// an internal lock.
#[derive(Debug, Default)]
pub struct ConVarRegistry {
    vars: RwLock<Vec<Arc<ConVar>>>,
}

impl ConVarRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a convar to the end of the registry
    pub fn register(&self, var: Arc<ConVar>) {
        debug!("Registering convar {}", var.name());
        self.vars.write_recovered().push(var);
    }

    /// Build a convar, register it and hand back the shared handle.
    ///
    /// All strings are copied, so the registry never borrows from the caller.
    pub fn create(
        &self,
        name: &str,
        default_value: &str,
        flags: ConVarFlags,
        help_text: &str,
        min: Option<f32>,
        max: Option<f32>,
    ) -> Arc<ConVar> {
        let var = Arc::new(
            ConVar::new(name, default_value)
                .with_flags(flags)
                .with_help(help_text)
                .with_bounds(Bounds { min, max }),
        );
        self.register(Arc::clone(&var));
        var
    }

    /// First registered convar with this exact name
    pub fn find(&self, name: &str) -> Option<Arc<ConVar>> {
        self.vars
            .read_recovered()
            .iter()
            .find(|v| v.name() == name)
            .cloned()
    }

    /// Copy of the handle list in registration order
    pub fn convars(&self) -> Vec<Arc<ConVar>> {
        self.vars.read_recovered().clone()
    }

    /// Snapshot of every convar in registration order
    pub fn infos(&self) -> Vec<ConVarInfo> {
        self.vars.read_recovered().iter().map(|v| v.info()).collect()
    }

    /// Reset every convar to its default value
    pub fn reset_all(&self) {
        for var in self.convars() {
            var.reset();
        }
    }

    pub fn len(&self) -> usize {
        self.vars.read_recovered().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Tests
// =============================================================================
