//! Entry points of the `appversion` and `versions-bridge` binaries

use super::cli::args::{Args, BridgeArgs};
use super::cli::config::load_config;
use crate::bridge::api::{DeviceInfoBridge, HostInfo, MethodCall};
use crate::bumper::api::{bump_file, BumpOutcome, BumpResult};
use crate::core::error_handling::{fatal_message, log_error_with_context};
use crate::core::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;

/// Run the version bump driver
pub fn startup() -> ExitCode {
    startup_with(Args::parse())
}

/// Run the version bump driver on already parsed arguments
pub fn startup_with(mut args: Args) -> ExitCode {
    // Config is read before logging starts because it can set log options
    match load_config(args.config_file.as_deref()) {
        Ok(Some(config)) => {
            if let Err(e) = args.apply_toml_values(&config) {
                eprintln!("Error: {}", fatal_message(&e, "Applying configuration"));
                return ExitCode::FAILURE;
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", fatal_message(&e, "Loading configuration"));
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.effective_log_file(),
        args.use_color(),
    ) {
        eprintln!("Error: failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    log::debug!("Final arguments: {:#?}", args);

    match run(&args) {
        Ok(outcome) => {
            if args.dry_run {
                print!("{}", outcome.manifest);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let context = format!("Bumping version in {}", args.manifest_path().display());
            log_error_with_context(&e, &context);
            ExitCode::FAILURE
        }
    }
}

/// Bump the configured manifest and report old and new versions
pub fn run(args: &Args) -> BumpResult<BumpOutcome> {
    let manifest = args.manifest_path();
    let outcome = bump_file(&manifest, &args.target, args.dry_run)?;

    log::info!("Old version: {}", outcome.previous);
    log::info!("New version: {}", outcome.current);
    if !args.dry_run {
        log::info!("Updated {}", manifest.display());
    }

    Ok(outcome)
}

/// Run the stdio bridge host: one call in, one JSON response out
pub fn bridge_startup() -> ExitCode {
    let args = BridgeArgs::parse();

    let use_color = std::io::IsTerminal::is_terminal(&std::io::stderr());
    if let Err(e) = init_logging(
        Some(args.log_level.as_deref().unwrap_or("warn")),
        args.log_format.as_deref(),
        None,
        use_color,
    ) {
        eprintln!("Error: failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    let bridge: DeviceInfoBridge = DeviceInfoBridge::default();
    match answer_call(&bridge, &args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("FATAL: Failed to serialise bridge response: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Handle the requested call and render the response as JSON
pub fn answer_call<H: HostInfo>(
    bridge: &DeviceInfoBridge<H>,
    args: &BridgeArgs,
) -> serde_json::Result<String> {
    let response = bridge.handle(&MethodCall::new(args.method.as_str()));
    if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
}
