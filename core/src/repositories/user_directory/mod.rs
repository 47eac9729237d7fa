mod directory;

pub use directory::UserDirectory;
