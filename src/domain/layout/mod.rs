//! On-disk layout of a project tree.

mod kind;
pub mod paths;
mod sub_tree;

pub use kind::Kind;
pub use paths::{
    WORK_FILE_EXTENSION, data_kind_path, entry_path, project_path, render_path, work_file_name,
    work_file_path,
};
pub use sub_tree::{README_CONTENT, README_FILE, STANDARD_SUB_TREE, standard_sub_tree};
