mod verifier_tests;

use std::sync::Arc;

use crate::services::token::{FixedClock, TokenCodec};

pub(super) const SECRET: &str = "otp-test-secret";
pub(super) const NOW: i64 = 1_700_000_000;

pub(super) fn codec() -> TokenCodec {
    TokenCodec::new(SECRET).unwrap()
}

pub(super) fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(NOW))
}
