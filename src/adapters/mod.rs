//! Concrete implementations of the ports.

mod local_filesystem;

pub use local_filesystem::LocalFilesystem;
