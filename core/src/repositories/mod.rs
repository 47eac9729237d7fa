//! Interfaces to external stores the core depends on.

pub mod user_directory;

pub use user_directory::UserDirectory;
