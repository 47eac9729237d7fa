//! One-time code issuance and verification
//!
//! The issuer mints a random 6-digit code and seals it in a signed OTP token.
//! The verifier checks a submitted code against that token and, on a match,
//! promotes it to a short-lived reset token.

mod consumer;
mod issuer;
mod verifier;

#[cfg(test)]
mod tests;

pub use consumer::ResetConsumer;
pub use issuer::OtpIssuer;
pub use verifier::OtpVerifier;
