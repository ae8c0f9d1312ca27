// Copyright (c) 2026 Voltaic Systems s.r.o.
//
// This file is part of Voltaic.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: licensing@voltaic-systems.example

//! CLI entry point for the Voltaic electrical analysis engine.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use tracing::info;
use tracing_subscriber::EnvFilter;

use voltaic_core::gauge::Insulation;
use voltaic_core::{calculate_wire_size, validate_with_conditions, SizingInput};
use voltaic_types::{ConductorMaterial, Design, Severity, SizingStatus};

#[derive(Parser)]
#[command(name = "voltaic", about = "Electrical analysis engine for off-grid and marine DC/AC systems")]
struct Cli {
    /// Increase log verbosity (-v, -vv); overridden by RUST_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a design file against the rule engine.
    Validate(ValidateArgs),
    /// Size a single conductor run for a given current, length, and voltage.
    Size(SizeArgs),
    /// Print the engine version.
    Version,
}

#[derive(clap::Args)]
struct ValidateArgs {
    /// Path to a Design JSON file.
    design: PathBuf,

    /// Output format.
    #[arg(long, value_parser = ["table", "json"], default_value = "table")]
    format: String,

    /// Ambient temperature in °C, for wire-sizing derating (§4.2).
    #[arg(long, default_value_t = 30.0)]
    temperature: f64,

    /// Bundling factor applied to ampacity (§4.2 SUPPLEMENT); 1.0 = no derating.
    #[arg(long, default_value_t = 1.0)]
    bundling: f64,
}

#[derive(clap::Args)]
struct SizeArgs {
    /// Current in amps.
    #[arg(long)]
    current: f64,

    /// Conductor run length in feet (one-way).
    #[arg(long)]
    length: f64,

    /// Reference voltage for the voltage-drop percentage.
    #[arg(long)]
    voltage: f64,

    /// Conductor material.
    #[arg(long, value_parser = ["copper", "aluminum"], default_value = "copper")]
    material: String,

    /// Ambient temperature in °C.
    #[arg(long, default_value_t = 30.0)]
    temperature: f64,

    /// Insulation temperature rating: 60, 75, or 90.
    #[arg(long, default_value_t = 75)]
    insulation: u16,

    /// Bundling factor; 1.0 = no derating.
    #[arg(long, default_value_t = 1.0)]
    bundling: f64,

    /// Maximum allowed voltage-drop percentage.
    #[arg(long = "max-drop-pct", default_value_t = 3.0)]
    max_drop_pct: f64,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate(args) => validate_command(args),
        Commands::Size(args) => size_command(args),
        Commands::Version => {
            println!("voltaic {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "voltaic_cli=info,voltaic_core=info",
        1 => "voltaic_cli=debug,voltaic_core=debug",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn validate_command(args: ValidateArgs) -> Result<ExitCode> {
    info!(path = %args.design.display(), "loading design");
    let content = std::fs::read_to_string(&args.design)
        .with_context(|| format!("failed to read design file {}", args.design.display()))?;
    let design: Design = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse design JSON from {}", args.design.display()))?;

    let result = validate_with_conditions(&design, args.temperature, args.bundling);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(ExitCode::SUCCESS);
    }

    print_table(&result);

    // §6: exit non-zero iff invalid, except under --format json (handled above).
    if result.valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_table(result: &voltaic_types::ValidationResult) {
    println!("Score: {:.1}/100   Valid: {}", result.score, result.valid);
    println!(
        "Errors: {}   Warnings: {}   Info: {}",
        result.metrics.error_count, result.metrics.warning_count, result.metrics.info_count
    );

    if result.issues.is_empty() {
        println!("\nNo issues found.");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Severity", "Category", "Message", "Suggestion"]);
        for issue in &result.issues {
            let severity_cell = match issue.severity {
                Severity::Error => Cell::new("error").fg(Color::Red),
                Severity::Warning => Cell::new("warning").fg(Color::Yellow),
                Severity::Info => Cell::new("info").fg(Color::Blue),
            };
            table.add_row(vec![
                severity_cell,
                Cell::new(format!("{:?}", issue.category)),
                Cell::new(&issue.message),
                Cell::new(issue.suggestion.as_deref().unwrap_or("")),
            ]);
        }
        println!("\n{table}");
    }

    if !result.wire_results.is_empty() {
        let mut wire_table = Table::new();
        wire_table.load_preset(UTF8_FULL);
        wire_table.set_header(vec!["Wire", "Current (A)", "Drop (%)", "Recommended", "Status"]);
        let mut wires: Vec<_> = result.wire_results.values().collect();
        wires.sort_by(|a, b| a.wire_id.cmp(&b.wire_id));
        for wire in wires {
            let status_cell = match wire.sizing_status {
                SizingStatus::Error => Cell::new("error").fg(Color::Red),
                SizingStatus::Warning => Cell::new("warning").fg(Color::Yellow),
                SizingStatus::Valid => Cell::new("valid").fg(Color::Green),
            };
            wire_table.add_row(vec![
                Cell::new(&wire.wire_id),
                Cell::new(format!("{:.1}", wire.current_a)),
                Cell::new(format!("{:.2}", wire.voltage_drop_pct)),
                Cell::new(wire.recommended_gauge.to_string()),
                status_cell,
            ]);
        }
        println!("\n{wire_table}");
    }
}

fn size_command(args: SizeArgs) -> Result<ExitCode> {
    let material = match args.material.as_str() {
        "aluminum" => ConductorMaterial::Aluminum,
        _ => ConductorMaterial::Copper,
    };
    let insulation = Insulation::from_celsius(args.insulation);

    let input = SizingInput {
        current_a: args.current,
        length_ft: args.length,
        reference_voltage_v: args.voltage,
        temperature_c: args.temperature,
        material,
        insulation,
        bundling_factor: args.bundling,
        max_drop_pct: args.max_drop_pct,
    };
    let calc = calculate_wire_size(input);
    println!("{}", serde_json::to_string_pretty(&calc)?);
    Ok(ExitCode::SUCCESS)
}
