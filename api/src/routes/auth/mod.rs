//! Password reset route handlers
//!
//! - `POST /api/send-otp` issues a code and emails it
//! - `POST /api/verify-otp` trades a code for a reset token
//! - `POST /api/reset-password` changes the password

pub mod reset_password;
pub mod send_otp;
pub mod verify_otp;

pub use reset_password::reset_password;
pub use send_otp::send_otp;
pub use verify_otp::verify_otp;
