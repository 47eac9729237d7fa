//! Signed token primitives
//!
//! Tokens are self-contained: the payload rides along in the clear (base64url
//! JSON) and is protected by an HMAC-SHA256 signature over its encoded form.
//! Verification needs only the shared secret, never a store.

mod clock;
mod codec;


pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::TokenCodec;
