//! Business services containing domain logic and use cases.

pub mod otp;
pub mod password_reset;
pub mod token;

// Re-export commonly used types
pub use otp::{OtpIssuer, OtpVerifier, ResetConsumer};
pub use password_reset::{
    DynPasswordResetService, EmailServiceTrait, PasswordResetConfig, PasswordResetService,
    SendCodeResult,
};
pub use token::{Clock, FixedClock, SystemClock, TokenCodec};
