//! Types for password reset results

/// Result of sending a reset code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Signed OTP token to hand back to the client
    pub otp_token: String,
    /// Expiry of the token in unix seconds
    pub expires_at: i64,
    /// Message id reported by the email provider
    pub message_id: String,
}
