//! Tests for the `#[derive(ConVars)]` macro

mod common;

use common::{TestFixture, assignment_lines};
use cvarcfg::{ConVar, ConVarFlags, ConVarRegistry, ConVars, DeriveConVars};
use std::sync::Arc;

#[derive(DeriveConVars)]
#[convars(prefix = "sm_sample_")]
struct SampleConVars {
    #[convar(default = "1", help = "Enable the sample extension", min = 0, max = 1, notify)]
    enabled: Arc<ConVar>,

    #[convar(default = "5", help = "Samples per second\nRaise for accuracy", min = 0.5)]
    rate: Arc<ConVar>,

    #[convar(name = "sm_sample_secret", default = "hunter2", protected, dont_record)]
    password: Arc<ConVar>,

    #[convar(default = "-1", min = -1, max = 10.5)]
    offset: Arc<ConVar>,

    untouched: Arc<ConVar>,
}

#[derive(DeriveConVars)]
struct Unprefixed {
    #[convar(default = "0", cheat, replicated, archive, hidden)]
    sv_flagged: Arc<ConVar>,
}

#[test]
fn test_names_from_prefix_and_override() {
    let registry = ConVarRegistry::new();
    let cvars = SampleConVars::register(&registry);

    assert_eq!(cvars.enabled.name(), "sm_sample_enabled");
    assert_eq!(cvars.rate.name(), "sm_sample_rate");
    assert_eq!(cvars.password.name(), "sm_sample_secret");
    assert_eq!(cvars.untouched.name(), "sm_sample_untouched");
}

#[test]
fn test_registered_in_declaration_order() {
    let registry = ConVarRegistry::new();
    let _cvars = SampleConVars::register(&registry);

    let names: Vec<String> = registry
        .convars()
        .iter()
        .map(|v| v.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "sm_sample_enabled",
            "sm_sample_rate",
            "sm_sample_secret",
            "sm_sample_offset",
            "sm_sample_untouched",
        ]
    );
}

#[test]
fn test_defaults_help_and_bounds() {
    let registry = ConVarRegistry::new();
    let cvars = SampleConVars::register(&registry);

    assert_eq!(cvars.enabled.get_string(), "1");
    assert_eq!(cvars.enabled.help_text(), "Enable the sample extension");
    assert_eq!(cvars.enabled.min(), Some(0.0));
    assert_eq!(cvars.enabled.max(), Some(1.0));

    assert_eq!(cvars.rate.help_text(), "Samples per second\nRaise for accuracy");
    assert_eq!(cvars.rate.min(), Some(0.5));
    assert_eq!(cvars.rate.max(), None);

    assert_eq!(cvars.offset.min(), Some(-1.0));
    assert_eq!(cvars.offset.max(), Some(10.5));
    assert_eq!(cvars.offset.get_int(), -1);

    assert_eq!(cvars.untouched.default_value(), "");
    assert_eq!(cvars.untouched.help_text(), "");
}

#[test]
fn test_flags() {
    let registry = ConVarRegistry::new();
    let cvars = SampleConVars::register(&registry);

    assert_eq!(cvars.enabled.flags(), ConVarFlags::NOTIFY);
    assert!(cvars.password.flags().contains(ConVarFlags::PROTECTED));
    assert!(!cvars.password.is_persisted());
    assert!(cvars.untouched.flags().is_empty());

    let other = Unprefixed::register(&registry);
    let flags = other.sv_flagged.flags();
    assert_eq!(other.sv_flagged.name(), "sv_flagged");
    assert!(flags.contains(ConVarFlags::CHEAT));
    assert!(flags.contains(ConVarFlags::REPLICATED));
    assert!(flags.contains(ConVarFlags::ARCHIVE));
    assert!(flags.contains(ConVarFlags::HIDDEN));
}

#[test]
fn test_derived_set_through_extension() {
    let fixture = TestFixture::new();
    let cvars: SampleConVars = fixture.ext.register();

    fixture.ext.auto_exec_config(true, None).unwrap();

    let content = fixture.read_config("extension.sample.cfg");
    assert_eq!(
        assignment_lines(&content),
        vec![
            "sm_sample_enabled \"1\"",
            "sm_sample_rate \"5\"",
            "sm_sample_offset \"-1\"",
            "sm_sample_untouched \"\"",
        ]
    );
    assert!(content.contains("// Minimum: \"0.50\""));
    assert!(content.contains("// Minimum: \"-1.00\"\n// Maximum: \"10.50\""));
    assert!(content.contains("// Samples per second\n// Raise for accuracy\n// -"));

    fixture
        .write_config("extension.sample.cfg", "sm_sample_rate \"12\"\nsm_sample_secret \"x\"\n");
    fixture.ext.auto_exec_config(true, None).unwrap();
    assert_eq!(cvars.rate.get_int(), 12);
    assert_eq!(cvars.password.get_string(), "hunter2");
}
