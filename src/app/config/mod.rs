mod load_settings;

pub use load_settings::load_settings;
