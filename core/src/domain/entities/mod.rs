//! Domain entities representing core business objects.

pub mod account;
pub mod email_message;
pub mod reset_token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::Account;
pub use email_message::EmailMessage;
pub use reset_token::{
    Expiring, IssuedOtp, OtpPayload, ResetPayload,
    CODE_LENGTH, OTP_TTL_SECONDS, RESET_TTL_SECONDS,
};
