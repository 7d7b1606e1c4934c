use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use wlim_core::actuate::{Actuator, RecordingActuator, device_actuator};
use wlim_core::config::WlimConfig;
use wlim_core::discover::{DiscoveryError, DiscoveryOptions, discover_targets, load_tree};
use wlim_core::events;
use wlim_core::feed::hyprctl::{CLIENTS_REQUEST, MONITORS_REQUEST, request_or_empty};
use wlim_core::feed::{ClientFeed, parse_monitors, read_feed_file, screen_bounds};
use wlim_core::matcher::MatchOutcome;
use wlim_core::session::{LogSurface, ScriptedKeys, SessionSettings, run_session};
use wlim_core::{ScreenBounds, Target};

use crate::keys::parse_key_script;
use crate::table::TableFormatter;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config(matches)?;

    let result = match matches.subcommand() {
        Some(("targets", sub_matches)) => handle_targets_command(sub_matches, &config),
        Some(("hint", sub_matches)) => handle_hint_command(sub_matches, &config),
        Some(("bounds", sub_matches)) => handle_bounds_command(sub_matches, &config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}

fn load_config(matches: &ArgMatches) -> Result<WlimConfig, Box<dyn std::error::Error>> {
    let explicit = matches.get_one::<PathBuf>("config");
    match WlimConfig::load_hierarchy(explicit.map(PathBuf::as_path)) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.config_load_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Read a saved feed file, or ask the live compositor. A failed live query
/// yields an empty feed.
fn read_feed(
    path: Option<&PathBuf>,
    request: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(read_feed_file(path)?),
        None => Ok(request_or_empty(request)),
    }
}

fn load_screen(
    matches: &ArgMatches,
    config: &WlimConfig,
) -> Result<ScreenBounds, Box<dyn std::error::Error>> {
    let text = read_feed(matches.get_one::<PathBuf>("monitors"), MONITORS_REQUEST)?;
    let monitors = parse_monitors(&text);
    Ok(screen_bounds(&monitors, config.actuation.fallback_screen()))
}

fn discover(
    matches: &ArgMatches,
    config: &WlimConfig,
) -> Result<Vec<Target>, Box<dyn std::error::Error>> {
    let tree_path = matches
        .get_one::<PathBuf>("tree")
        .ok_or("--tree is required")?;
    let tree = load_tree(tree_path).inspect_err(|e| {
        eprintln!("{}", e);
        error!(event = "cli.tree_load_failed", error = %e);
    })?;

    let feed_text = read_feed(matches.get_one::<PathBuf>("clients"), CLIENTS_REQUEST)?;
    let feed = ClientFeed::parse_with_title_limit(&feed_text, config.geometry.title_max_len());

    let options = DiscoveryOptions::new(config.collector_limits(), config.repair_tuning());
    let root = &tree;
    match discover_targets(&root, &feed, &options) {
        Ok(targets) => {
            events::log_targets_discovered(&tree_path.display().to_string(), &targets);
            Ok(targets)
        }
        Err(e) => {
            eprintln!("{}", e);
            if !matches!(e, DiscoveryError::NoTargets) {
                events::log_app_error(&e);
            }
            Err(e.into())
        }
    }
}

fn handle_targets_command(
    matches: &ArgMatches,
    config: &WlimConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.targets_started", json_output = json_output);

    let targets = discover(matches, config)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else {
        println!("Targets:");
        TableFormatter::new(&targets).print_table(&targets);
    }

    info!(event = "cli.targets_completed", count = targets.len());
    Ok(())
}

fn handle_hint_command(
    matches: &ArgMatches,
    config: &WlimConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let dry_run = matches.get_flag("dry-run");
    let script = matches
        .get_one::<String>("keys")
        .ok_or("--keys is required")?;

    info!(
        event = "cli.hint_started",
        dry_run = dry_run,
        json_output = json_output
    );

    let keys = parse_key_script(script).inspect_err(|e| eprintln!("{}", e))?;
    let targets = discover(matches, config)?;
    let screen = load_screen(matches, config)?;

    let mut actuator: Box<dyn Actuator> = if dry_run {
        Box::new(RecordingActuator::new(screen))
    } else {
        device_actuator(screen, config.actuation_timing())?
    };

    let settings = SessionSettings {
        max_typed: config.max_typed(),
        settle_delay: config.actuation_timing().settle_delay,
    };

    let outcome = match run_session(
        &targets,
        &mut LogSurface::new(),
        &mut ScriptedKeys::new(keys),
        actuator.as_mut(),
        &settings,
    ) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.hint_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    events::log_hint_outcome(&outcome, dry_run);

    if json_output {
        let mut report = serde_json::to_value(&outcome)?;
        report["dry_run"] = dry_run.into();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &outcome {
            MatchOutcome::Selected(selection) => {
                let point = screen.clamp(selection.click_point());
                let verb = if dry_run { "Would click" } else { "Clicked" };
                println!(
                    "{} '{}' at ({}, {}) with {} button",
                    verb,
                    selection.label(),
                    point.x,
                    point.y,
                    selection.button()
                );
            }
            MatchOutcome::Cancelled => println!("Cancelled."),
        }
    }

    info!(event = "cli.hint_completed", dry_run = dry_run);
    Ok(())
}

fn handle_bounds_command(
    matches: &ArgMatches,
    config: &WlimConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.bounds_started", json_output = json_output);

    let screen = load_screen(matches, config)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&screen)?);
    } else {
        println!("Screen: {}x{}", screen.width, screen.height);
    }

    info!(
        event = "cli.bounds_completed",
        width = screen.width,
        height = screen.height
    );
    Ok(())
}
