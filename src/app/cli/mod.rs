//! CLI Adapter.

mod listing;
mod load;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{BumpOptions, SaveOptions};
use crate::domain::{AppError, Kind, Settings};
use listing::OutputFormat;

#[derive(Parser)]
#[command(name = "projdeck")]
#[command(version)]
#[command(
    about = "Scaffold creative project folders and resolve work-file paths",
    long_about = None
)]
struct Cli {
    /// Settings file (default: ./projdeck.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Project root directory, overriding the settings file
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project folder with the standard sub-tree
    #[clap(visible_alias = "c")]
    Create {
        /// Project name (default: projects.default_name)
        name: Option<String>,
    },
    /// List projects under the root
    #[clap(visible_alias = "p")]
    Projects {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List asset or shot entries of a project
    #[clap(visible_alias = "e")]
    Entries {
        #[arg(short, long)]
        project: Option<String>,
        /// Asset or Shot
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<Kind>,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List work files inside an entry
    #[clap(visible_alias = "f")]
    Files {
        /// Entry directory name
        entry: String,
        #[arg(short, long)]
        project: Option<String>,
        /// Asset or Shot
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<Kind>,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Resolve the save path for a work file, creating its entry directory
    #[clap(visible_alias = "s")]
    Save {
        /// Work-file name without extension
        #[arg(short, long)]
        name: String,
        /// Entry directory (default: the work-file name)
        #[arg(short, long)]
        dir: Option<String>,
        #[arg(short, long)]
        project: Option<String>,
        /// Asset or Shot
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<Kind>,
    },
    /// Resolve an existing work file to open
    #[clap(visible_alias = "l")]
    Load {
        /// Entry directory name (prompted when omitted)
        entry: Option<String>,
        /// Work-file name (prompted when omitted)
        file: Option<String>,
        #[arg(short, long)]
        project: Option<String>,
        /// Asset or Shot
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<Kind>,
    },
    /// Ensure the project's Render directory exists and print it
    Render {
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Increment the _vNN version token in a path
    #[clap(visible_alias = "b")]
    Bump {
        /// Work-file path
        path: String,
        /// Amount to add (may be negative)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        by: i64,
        /// Copy the file to the bumped path
        #[arg(long)]
        copy: bool,
    },
}

fn parse_kind(value: &str) -> Result<Kind, String> {
    value.parse::<Kind>().map_err(|err| err.to_string())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = resolve_settings(cli.config, cli.root)
        .and_then(|settings| dispatch(&settings, cli.command));

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn resolve_settings(config: Option<PathBuf>, root: Option<PathBuf>) -> Result<Settings, AppError> {
    let settings = crate::app::api::load_settings(config.as_deref())?;
    Ok(match root {
        Some(root) => settings.with_root(root),
        None => settings,
    })
}

fn dispatch(settings: &Settings, command: Commands) -> Result<i32, AppError> {
    match command {
        Commands::Create { name } => run_create(settings, name).map(|_| 0),
        Commands::Projects { format } => listing::run_projects(settings, format).map(|_| 0),
        Commands::Entries { project, kind, format } => {
            listing::run_entries(settings, project.as_deref(), kind, format).map(|_| 0)
        }
        Commands::Files { entry, project, kind, format } => {
            listing::run_files(settings, project.as_deref(), kind, &entry, format).map(|_| 0)
        }
        Commands::Save { name, dir, project, kind } => {
            run_save(settings, SaveOptions { project, kind, name, dir }).map(|_| 0)
        }
        Commands::Load { entry, file, project, kind } => {
            load::run_load(settings, project, kind, entry, file)
        }
        Commands::Render { project } => run_render(settings, project.as_deref()).map(|_| 0),
        Commands::Bump { path, by, copy } => {
            run_bump(BumpOptions { path, increment: by, copy }).map(|_| 0)
        }
    }
}

fn run_create(settings: &Settings, name: Option<String>) -> Result<(), AppError> {
    let name = name.unwrap_or_else(|| settings.projects.default_name.clone());
    let report = crate::app::api::create_project(settings, &name)?;

    if report.already_existed && report.created.is_empty() && !report.readme_written {
        println!("✅ Project already complete at {}/", report.project_path.display());
    } else if report.already_existed {
        println!("✅ Completed project at {}/", report.project_path.display());
        println!("  Added {} missing folder(s)", report.created.len());
    } else {
        println!("✅ Created project at {}/", report.project_path.display());
    }
    Ok(())
}

fn run_save(settings: &Settings, options: SaveOptions) -> Result<(), AppError> {
    let target = crate::app::api::prepare_save(settings, &options)?;
    if target.entry_created {
        eprintln!("✅ Created entry directory {}/", target.entry_path.display());
    }
    println!("{}", target.work_file.display());
    Ok(())
}

fn run_render(settings: &Settings, project: Option<&str>) -> Result<(), AppError> {
    let target = crate::app::api::prepare_render_path(settings, project)?;
    if target.created {
        eprintln!("✅ Created render directory {}/", target.path.display());
    }
    println!("{}", target.output_path);
    Ok(())
}

fn run_bump(options: BumpOptions) -> Result<(), AppError> {
    let outcome = crate::app::api::bump_version(&options)?;
    if outcome.copied {
        eprintln!("✅ Copied {} to next version", options.path);
    }
    println!("{}", outcome.bumped);
    Ok(())
}
