//! projdeck: scaffold creative project folders and resolve work-file paths.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BumpOptions, BumpOutcome, LoadOptions, MaterializeReport, RenderTarget, SaveOptions,
    SaveTarget, bump_version, create_project, list_entries, list_projects, list_work_files,
    load_settings, prepare_render_path, prepare_save, resolve_load,
};
pub use adapters::LocalFilesystem;
pub use app::services::materialize;
pub use domain::layout::{
    STANDARD_SUB_TREE, data_kind_path, entry_path, project_path, render_path, standard_sub_tree,
    work_file_path,
};
pub use domain::version_token::bump;
pub use domain::{AppError, Kind, Settings};
pub use ports::ProjectFilesystem;
