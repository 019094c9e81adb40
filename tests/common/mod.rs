//! Common test utilities for cvarcfg integration tests
//!
//! Provides a temporary game directory, an extension wired to it and an
//! error sink that records what it receives.

#![allow(dead_code)]

use cvarcfg::{ConVar, ConVarFlags, ErrorSink, Extension};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// =============================================================================
// Recording Error Sink
// =============================================================================

/// Error sink that keeps every (source, message) pair
#[derive(Default, Clone)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl ErrorSink for RecordingSink {
    fn log_error(&self, source: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((source.to_string(), message.to_string()));
    }
}

// =============================================================================
// Test Fixture
// =============================================================================

/// Test fixture bundling a game directory and an extension rooted in it
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub ext: Extension,
    pub errors: RecordingSink,
}

impl TestFixture {
    /// Fixture with `cfg/sourcemod` already created
    pub fn new() -> Self {
        let fixture = Self::without_config_dir();
        std::fs::create_dir_all(fixture.config_dir()).unwrap();
        fixture
    }

    /// Fixture whose config directory does not exist
    pub fn without_config_dir() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let errors = RecordingSink::default();
        let ext = Extension::builder("sample")
            .game_dir(temp_dir.path())
            .error_sink(errors.clone())
            .build();

        Self {
            temp_dir,
            ext,
            errors,
        }
    }

    pub fn game_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.game_dir().join("cfg").join("sourcemod")
    }

    /// Path of the default config file
    pub fn default_config(&self) -> PathBuf {
        self.config_dir().join("extension.sample.cfg")
    }

    pub fn read_config(&self, name: &str) -> String {
        std::fs::read_to_string(self.config_dir().join(name)).expect("config file exists")
    }

    pub fn write_config(&self, name: &str, content: &str) {
        std::fs::write(self.config_dir().join(name), content).unwrap();
    }

    /// Register the standard sample convars
    pub fn with_sample_convars(self) -> Self {
        register_sample_convars(&self.ext);
        self
    }
}

/// Register a small, representative set of convars
pub fn register_sample_convars(ext: &Extension) -> Vec<Arc<ConVar>> {
    vec![
        ext.create_convar(
            "sm_sample_enabled",
            "1",
            ConVarFlags::NOTIFY,
            "Enable the sample extension",
            Some(0.0),
            Some(1.0),
        ),
        ext.create_convar(
            "myvar",
            "5",
            ConVarFlags::NONE,
            "line1\nline2",
            None,
            None,
        ),
        ext.create_convar(
            "sm_sample_password",
            "hunter2",
            ConVarFlags::PROTECTED | ConVarFlags::DONT_RECORD,
            "Never written to disk",
            None,
            None,
        ),
        ext.create_convar(
            "sm_sample_motd",
            "Welcome to the server",
            ConVarFlags::NONE,
            "Message of the day",
            None,
            None,
        ),
    ]
}

/// Assignment lines (non-comment, non-blank) of a config file
pub fn assignment_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with("//"))
        .collect()
}
