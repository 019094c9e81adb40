//! Config synchronization: generate a missing file, then apply its values

use super::template::render_template;
use crate::convar::{ConVar, ConVarRegistry};
use crate::error::{Error, Result, create_failed, open_file};
use crate::host::TokenParser;
use log::{debug, info};
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// What a synchronization run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The file already existed and its values were applied
    Applied { applied: usize },
    /// The file was generated from defaults, then applied
    Generated { applied: usize },
    /// The file was missing and auto-create was disabled
    Skipped,
}

impl SyncOutcome {
    /// Number of assignments performed
    pub fn applied(&self) -> usize {
        match self {
            SyncOutcome::Applied { applied } | SyncOutcome::Generated { applied } => *applied,
            SyncOutcome::Skipped => 0,
        }
    }

    pub fn was_generated(&self) -> bool {
        matches!(self, SyncOutcome::Generated { .. })
    }
}

/// Make sure the config at `path` exists, then apply it to `registry`.
///
/// An existing file is only read. A missing one is written from the
/// registry's defaults (when `auto_create` is set) and then applied, which
/// leaves every value at its default.
///
/// # Errors
///
/// Returns [`Error::FileCreate`] when the file cannot be written and
/// [`Error::FileRead`] when it cannot be read back.
pub fn ensure_and_apply(
    path: &Path,
    registry: &ConVarRegistry,
    extension_name: &str,
    auto_create: bool,
    parser: &dyn TokenParser,
) -> Result<SyncOutcome> {
    let exists = path.try_exists().map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if exists {
        let applied = apply(path, registry, parser)?;
        return Ok(SyncOutcome::Applied { applied });
    }

    if !auto_create {
        debug!("Config {} missing and auto-create disabled", path.display());
        return Ok(SyncOutcome::Skipped);
    }

    generate(path, registry, extension_name)?;
    let applied = apply(path, registry, parser)?;
    Ok(SyncOutcome::Generated { applied })
}

/// Write the annotated default config for `registry` to `path`.
///
/// Content goes to a `.tmp` sibling first and is renamed into place, so a
/// failure never leaves a partial config behind. Parent directories are not
/// created.
///
/// # Errors
///
/// Returns [`Error::FileCreate`] if the file cannot be created or written.
pub fn generate(path: &Path, registry: &ConVarRegistry, extension_name: &str) -> Result<()> {
    let content = render_template(extension_name, &registry.convars());

    let file_name = path.file_name().ok_or_else(|| {
        create_failed(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let mut temp_filename = file_name.to_os_string();
    temp_filename.push(".tmp");
    let temp_path = path.with_file_name(temp_filename);

    if let Err(e) = std::fs::write(&temp_path, &content) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(create_failed(path, e));
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(create_failed(path, e));
    }

    info!("Generated config file {}", path.display());
    Ok(())
}

/// Apply the assignments in the file at `path` to `registry`.
///
/// Each line is tokenized; when the first token names a registered convar
/// the next token becomes its value. Blank lines, comments, unknown names
/// and lines without a value token are skipped. `DONT_RECORD` convars are
/// never set from a file. If a name is registered twice the first
/// registration wins.
///
/// Returns the number of assignments made.
///
/// # Errors
///
/// Returns [`Error::FileRead`] if the file cannot be opened or read.
pub fn apply(path: &Path, registry: &ConVarRegistry, parser: &dyn TokenParser) -> Result<usize> {
    let reader = BufReader::new(open_file(path)?);

    let convars = registry.convars();
    let lookup = name_lookup(&convars);

    let mut applied = 0;
    for line in reader.split(b'\n') {
        let line = line.map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let line = String::from_utf8_lossy(&line);

        if let Some((var, value)) = parse_assignment(&line, &lookup, parser) {
            var.set_value(value);
            applied += 1;
        }
    }

    debug!("Applied {applied} value(s) from {}", path.display());
    Ok(applied)
}

/// Name to convar map keeping the first registration of each name
fn name_lookup(convars: &[Arc<ConVar>]) -> HashMap<&str, &ConVar> {
    let mut lookup = HashMap::with_capacity(convars.len());
    for var in convars.iter().filter(|v| v.is_persisted()) {
        lookup.entry(var.name()).or_insert(var.as_ref());
    }
    lookup
}

fn parse_assignment<'l, 'v>(
    line: &'l str,
    lookup: &HashMap<&str, &'v ConVar>,
    parser: &dyn TokenParser,
) -> Option<(&'v ConVar, &'l str)> {
    let (name, rest) = parser.parse_token(line);
    let name = name.filter(|n| !n.is_empty())?;
    let var = lookup.get(name)?;
    let (value, _) = parser.parse_token(rest);
    Some((*var, value?))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convar::ConVarFlags;
    use crate::tokenizer::SourceTokenizer;
    use tempfile::tempdir;

    fn registry_with(vars: &[(&str, &str)]) -> ConVarRegistry {
        let registry = ConVarRegistry::new();
        for (name, default) in vars {
            registry.create(name, default, ConVarFlags::NONE, "", None, None);
        }
        registry
    }

    #[test]
    fn test_generate_then_apply_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extension.sample.cfg");
        let registry = registry_with(&[("myvar", "5")]);

        let outcome =
            ensure_and_apply(&path, &registry, "sample", true, &SourceTokenizer).unwrap();

        assert_eq!(outcome, SyncOutcome::Generated { applied: 1 });
        assert!(outcome.was_generated());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().any(|l| l == "myvar \"5\""));
        assert_eq!(registry.find("myvar").unwrap().get_string(), "5");
        assert!(!dir.path().join("extension.sample.cfg.tmp").exists());
    }

    #[test]
    fn test_existing_file_is_not_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.cfg");
        std::fs::write(&path, "myvar \"42\"\n").unwrap();
        let registry = registry_with(&[("myvar", "5")]);

        let outcome = ensure_and_apply(&path, &registry, "x", true, &SourceTokenizer).unwrap();

        assert_eq!(outcome, SyncOutcome::Applied { applied: 1 });
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "myvar \"42\"\n");
        assert_eq!(registry.find("myvar").unwrap().get_string(), "42");
    }

    #[test]
    fn test_auto_create_disabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.cfg");
        let registry = registry_with(&[("myvar", "5")]);

        let outcome = ensure_and_apply(&path, &registry, "x", false, &SourceTokenizer).unwrap();

        assert_eq!(outcome, SyncOutcome::Skipped);
        assert_eq!(outcome.applied(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_generate_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing/sub/x.cfg");
        let registry = registry_with(&[("myvar", "5")]);

        let err = ensure_and_apply(&path, &registry, "x", true, &SourceTokenizer).unwrap_err();

        assert!(matches!(err, Error::FileCreate { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(!path.exists());
    }

    #[test]
    fn test_apply_missing_file_is_read_error() {
        let registry = registry_with(&[]);
        let err = apply(Path::new("/nonexistent/x.cfg"), &registry, &SourceTokenizer).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_apply_counts_assignments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.cfg");
        std::fs::write(
            &path,
            "// comment\n\na \"1\"\nunknown \"2\"\nb 3\nc\n",
        )
        .unwrap();
        let registry = registry_with(&[("a", "0"), ("b", "0"), ("c", "0")]);

        assert_eq!(apply(&path, &registry, &SourceTokenizer).unwrap(), 2);
        assert_eq!(registry.find("a").unwrap().get_string(), "1");
        assert_eq!(registry.find("b").unwrap().get_string(), "3");
        assert_eq!(registry.find("c").unwrap().get_string(), "0");
    }

    #[test]
    fn test_dont_record_not_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.cfg");
        std::fs::write(&path, "hidden \"9\"\n").unwrap();

        let registry = ConVarRegistry::new();
        let hidden = registry.create("hidden", "1", ConVarFlags::DONT_RECORD, "", None, None);

        assert_eq!(apply(&path, &registry, &SourceTokenizer).unwrap(), 0);
        assert_eq!(hidden.get_string(), "1");
    }

    #[test]
    fn test_name_lookup_keeps_first() {
        let first = Arc::new(ConVar::new("dup", "1"));
        let second = Arc::new(ConVar::new("dup", "2"));
        let convars = vec![first.clone(), second];

        let lookup = name_lookup(&convars);
        assert_eq!(lookup.len(), 1);
        assert!(std::ptr::eq(lookup["dup"], first.as_ref()));
    }
}
