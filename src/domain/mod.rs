pub mod config;
pub mod error;
pub mod layout;
pub mod names;
pub mod version_token;

pub use config::{Settings, parse_settings_content};
pub use error::AppError;
pub use layout::Kind;
