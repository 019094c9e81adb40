//! Host runtime collaborators
//!
//! The plugin runtime supplies path resolution, token parsing and the error
//! log. Each is a trait so an embedding can forward to the real host, and
//! each has a standalone default:
//!
//! | Trait            | Default                                   |
//! |------------------|-------------------------------------------|
//! | [`PathResolver`] | [`GameDir`] - joins onto a game root dir  |
//! | [`TokenParser`]  | [`SourceTokenizer`](crate::SourceTokenizer) |
//! | [`ErrorSink`]    | [`LogSink`] - forwards to `log::error!`   |

use std::path::{Path, PathBuf};

/// Maps a path relative to the game directory onto the file system
pub trait PathResolver: Send + Sync {
    fn build_path(&self, relative: &Path) -> PathBuf;
}

/// Extracts one token from `buf`, returning it and the rest of the buffer
///
/// `None` means no token could be read (blank input, comment only, or a
/// malformed token).
pub trait TokenParser: Send + Sync {
    fn parse_token<'a>(&self, buf: &'a str) -> (Option<&'a str>, &'a str);
}

/// Host error log taking a named source and a message
pub trait ErrorSink: Send + Sync {
    fn log_error(&self, source: &str, message: &str);
}

// =============================================================================
// Defaults
// =============================================================================

/// Resolves paths inside a game installation directory
#[derive(Debug, Clone)]
pub struct GameDir {
    root: PathBuf,
}

impl GameDir {
    /// Create a resolver rooted at `root`
    ///
    /// Supports `~` expansion for home directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root: PathBuf = root.into();
        let expanded = if root.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                home.join(root.strip_prefix("~").unwrap_or(&root))
            } else {
                root
            }
        } else {
            root
        };
        Self { root: expanded }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for GameDir {
    fn default() -> Self {
        Self::new(".")
    }
}

impl PathResolver for GameDir {
    fn build_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

/// Error sink that forwards to the `log` facade with the source as target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn log_error(&self, source: &str, message: &str) {
        log::error!(target: source, "{message}");
    }
}
