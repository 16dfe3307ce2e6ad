pub mod bump;
pub mod create;
pub mod list;
pub mod load;
pub mod render;
pub mod save;
