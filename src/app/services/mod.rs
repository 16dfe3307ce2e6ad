pub mod project_tree;

pub use project_tree::{MaterializeReport, materialize};
