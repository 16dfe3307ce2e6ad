//! Listing commands: projects, entries, files.

use clap::ValueEnum;

use crate::domain::{AppError, Kind, Settings};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One name per line
    #[default]
    Text,
    /// JSON array of names
    Json,
}

pub fn run_projects(settings: &Settings, format: OutputFormat) -> Result<(), AppError> {
    let names = crate::app::api::list_projects(settings);
    print_names(&names, format)
}

pub fn run_entries(
    settings: &Settings,
    project: Option<&str>,
    kind: Option<Kind>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let names = crate::app::api::list_entries(settings, project, kind)?;
    print_names(&names, format)
}

pub fn run_files(
    settings: &Settings,
    project: Option<&str>,
    kind: Option<Kind>,
    entry: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let names = crate::app::api::list_work_files(settings, project, kind, entry)?;
    print_names(&names, format)
}

fn print_names(names: &[String], format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for name in names {
                println!("{}", name);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(names)?),
    }
    Ok(())
}
