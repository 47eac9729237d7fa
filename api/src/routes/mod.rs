//! Route handlers

pub mod auth;
pub mod email;
pub mod health;
