//! icongen - generate PNG assets from base64 icon constants in Java sources
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use icongen::config::{self, Settings};
use icongen_core::prelude::*;

/// Generate PNG assets from base64 icon constants embedded in Java sources
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(about = "Generate PNG assets from base64 icon constants", long_about = None)]
struct Args {
    /// Path to the project root
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Output directory for generated PNGs (overrides config)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Declared Java type of an icon constant (overrides config)
    #[arg(long, value_name = "TYPE")]
    field_type: Option<String>,

    /// File name suffix an icon source must match (overrides config)
    #[arg(long, value_name = "SUFFIX")]
    suffix: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract icons and write PNGs (the default)
    Generate,
    /// Delete all generated outputs and state
    Clean,
    /// List declared icons without generating anything
    List {
        /// Emit a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate, then regenerate on source changes until interrupted
    Watch,
    /// Write a default .icongen/config.toml
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    icongen_core::logging::init()?;

    let args = Args::parse();

    let base_path = args
        .path
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    // State file names derive from full source paths, so the root must not
    // change shape between a plain run and a watch session.
    let project_root = std::fs::canonicalize(&base_path).unwrap_or(base_path);

    let mut settings = config::load_settings(&project_root);
    apply_overrides(&mut settings, &args);

    let result = match args.command.unwrap_or(Command::Generate) {
        Command::Generate => icongen::generate(&project_root, &settings).map(|report| {
            println!(
                "Generated {} icon(s) from {} source(s) ({} stale removed)",
                report.icons_written, report.sources, report.stale_removed
            );
        }),
        Command::Clean => icongen::clean(&project_root, &settings).map(|()| {
            println!("Cleaned generated icons and state");
        }),
        Command::List { json } => icongen::run_list(&project_root, &settings, json),
        Command::Watch => icongen::run_watch(&project_root, &settings).await,
        Command::Init => config::init_config_dir(&project_root).map(|()| {
            println!("Wrote .icongen/config.toml");
        }),
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

/// CLI flags win over the config file
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(out) = &args.out {
        settings.output.dir = out.clone();
    }
    if let Some(field_type) = &args.field_type {
        settings.source.field_type = field_type.clone();
    }
    if let Some(suffix) = &args.suffix {
        settings.source.suffix = suffix.clone();
    }
}
