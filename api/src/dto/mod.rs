pub mod auth;
pub mod email;

pub use auth::*;
pub use email::*;
