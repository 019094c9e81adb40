// Sample extension using cvarcfg
//
// Run with: cargo run --example sample_extension --features derive -- <game_dir>

use cvarcfg::{ConVar, ConVarFlags, ConVarRegistry, DeriveConVars, Extension, SyncOutcome};
use std::sync::Arc;

// =============================================================================
// Convars defined using the derive macro
// =============================================================================

#[derive(DeriveConVars)]
#[convars(prefix = "sm_sample_")]
struct SampleConVars {
    #[convar(default = "1", help = "Enable the sample extension", min = 0, max = 1, notify)]
    enabled: Arc<ConVar>,

    #[convar(
        default = "5",
        help = "Samples taken per second\nHigher values cost more CPU",
        min = 1,
        max = 66
    )]
    rate: Arc<ConVar>,

    #[convar(default = "Welcome to the server", help = "Message shown on join")]
    motd: Arc<ConVar>,

    #[convar(default = "", help = "Remote API token", protected, dont_record)]
    api_token: Arc<ConVar>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let game_dir = std::env::args().nth(1).unwrap_or_else(|| {
        std::env::temp_dir()
            .join("cvarcfg_demo")
            .display()
            .to_string()
    });
    if let Err(e) = std::fs::create_dir_all(format!("{game_dir}/cfg/sourcemod")) {
        eprintln!("Cannot prepare {game_dir}: {e}");
        return;
    }

    let ext = Extension::builder("sample").game_dir(&game_dir).build();
    let cvars: SampleConVars = ext.register();

    cvars.enabled.on_change(|name, old, new| {
        println!("  {name} changed: {old} -> {new}");
    });

    // Main config: cfg/sourcemod/extension.sample.cfg
    match ext.auto_exec_config(true, None) {
        Some(SyncOutcome::Generated { .. }) => println!("Wrote default config"),
        Some(SyncOutcome::Applied { applied }) => println!("Applied {applied} value(s)"),
        Some(SyncOutcome::Skipped) | None => println!("Config not loaded"),
    }

    // A second file for map-specific settings
    let maps = ConVarRegistry::new();
    let cycle = maps.create(
        "sm_sample_mapcycle",
        "mapcycle.txt",
        ConVarFlags::NONE,
        "Map cycle file to read",
        None,
        None,
    );
    ext.auto_exec_config_for(&maps, true, Some("sample_maps"));

    println!();
    println!("enabled   = {}", cvars.enabled.get_bool());
    println!("rate      = {}", cvars.rate.get_int());
    println!("motd      = {}", cvars.motd.get_string());
    println!("api_token = {:?}", cvars.api_token.get_string());
    println!("mapcycle  = {}", cycle.get_string());

    if let Ok(path) = ext.config_path(None) {
        println!();
        println!("Edit {} and run again.", path.display());
    }
}
