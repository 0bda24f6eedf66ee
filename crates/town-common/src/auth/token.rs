//! Bearer token generation
//!
//! Tokens are handed out on register and login for the front end to keep.
//! They are not stored anywhere and nothing checks them later.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

/// Number of random bytes behind each token
pub const TOKEN_BYTES: usize = 32;

/// Generate an opaque URL-safe token from a CSPRNG
#[must_use]
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
