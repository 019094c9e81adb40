//! Change listeners for console variables
//!
//! Hooks fire after a convar's value was replaced by a different one.

use crate::sync::RwLockExt;
use std::sync::Arc;
use std::sync::RwLock;

/// Type alias for a change callback, receiving (`name`, `old_value`, `new_value`)
pub type ChangeCallback = Arc<dyn Fn(&str, &str, &str) + Send + Sync>;

/// Listener list attached to a single convar
pub struct ChangeListeners {
    listeners: RwLock<Vec<ChangeCallback>>,
}

impl ChangeListeners {
    /// Create an empty listener list
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Register a change listener
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&str, &str, &str) + Send + Sync + 'static,
    {
        self.listeners.write_recovered().push(Arc::new(callback));
    }

    /// Notify all listeners about a change
    ///
    /// The listener list is cloned first so a callback may register further
    /// listeners without deadlocking.
    pub fn notify(&self, name: &str, old_value: &str, new_value: &str) {
        let listeners: Vec<ChangeCallback> = self.listeners.read_recovered().clone();
        for callback in &listeners {
            callback(name, old_value, new_value);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.read_recovered().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all listeners
    pub fn clear(&self) {
        self.listeners.write_recovered().clear();
    }
}

impl Default for ChangeListeners {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("count", &self.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
