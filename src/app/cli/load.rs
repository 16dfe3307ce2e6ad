//! Load command: resolve a work file, choosing entry and file interactively when omitted.

use dialoguer::Select;

use crate::app::api::{self, LoadOptions};
use crate::domain::layout::WORK_FILE_EXTENSION;
use crate::domain::{AppError, Kind, Settings};

pub fn run_load(
    settings: &Settings,
    project: Option<String>,
    kind: Option<Kind>,
    entry: Option<String>,
    file: Option<String>,
) -> Result<i32, AppError> {
    let kind_value = kind.unwrap_or(settings.work_files.default_kind);

    let entry = match entry {
        Some(value) => value,
        None => {
            let entries = api::load_entry_choices(settings, project.as_deref(), kind)?;
            match prompt_choice(&format!("Choose {}", kind_value), &entries)? {
                Some(value) => value,
                None => return Ok(0),
            }
        }
    };

    let file = match file {
        Some(value) => value,
        None => {
            let files = api::load_file_choices(settings, project.as_deref(), kind, &entry)?;
            match prompt_choice(&format!("Choose {} file", WORK_FILE_EXTENSION), &files)? {
                Some(value) => value,
                None => return Ok(0),
            }
        }
    };

    let options = LoadOptions { project, kind, entry, file };
    match api::resolve_load(settings, &options) {
        Ok(path) => {
            println!("{}", path.display());
            Ok(0)
        }
        Err(err @ AppError::WorkFileNotFound(_)) => {
            eprintln!("⚠️  {}", err);
            Ok(1)
        }
        Err(err) => Err(err),
    }
}

fn prompt_choice(prompt: &str, items: &[String]) -> Result<Option<String>, AppError> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to read selection: {}", err)))?;

    Ok(selection.map(|index| items[index].clone()))
}
