//! Config template generator
//!
//! Renders the annotated, human-editable config file written on first run.
//! For a convar `sm_sample_rate` with default `5`, minimum `1` and help text
//! "Samples per second" the entry reads:
//!
//! ```text
//! // Samples per second
//! // -
//! // Default: "5"
//! // Minimum: "1.00"
//! sm_sample_rate "5"
//!
//! ```

use crate::convar::ConVar;
use std::fmt::{self, Write};
use std::sync::Arc;

/// Render the config file for `convars`, skipping `DONT_RECORD` ones
#[must_use]
pub fn render_template(extension_name: &str, convars: &[Arc<ConVar>]) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail
    let _ = write_template(&mut output, extension_name, convars);
    output
}

fn write_template(out: &mut String, extension_name: &str, convars: &[Arc<ConVar>]) -> fmt::Result {
    writeln!(out, "// This file was auto-generated")?;
    writeln!(out, "// ConVars for extension \"{extension_name}\"")?;
    out.push_str("\n\n");

    for var in convars.iter().filter(|v| v.is_persisted()) {
        format_convar(out, var)?;
    }

    out.push('\n');
    Ok(())
}

fn format_convar(out: &mut String, var: &ConVar) -> fmt::Result {
    for line in var.help_text().lines() {
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            writeln!(out, "// {line}")?;
        }
    }

    out.push_str("// -\n");
    writeln!(out, "// Default: \"{}\"", var.default_value())?;
    if let Some(min) = var.min() {
        writeln!(out, "// Minimum: \"{min:.2}\"")?;
    }
    if let Some(max) = var.max() {
        writeln!(out, "// Maximum: \"{max:.2}\"")?;
    }
    writeln!(out, "{} \"{}\"", var.name(), var.default_value())?;
    out.push('\n');
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
