pub mod parse;
pub mod paths;
mod settings;

pub use parse::parse_settings_content;
pub use settings::{ProjectsConfig, Settings, WorkFilesConfig};
