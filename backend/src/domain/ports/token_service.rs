//! Port for issuing and verifying bearer tokens.
use crate::domain::{TokenClaims, User};

use super::define_port_error;

define_port_error! {
    /// Failures raised by token codecs.
    pub enum TokenError {
        /// The token could not be signed.
        Encode { message: String } => "token signing failed: {message}",
        /// The token is malformed or its signature does not verify.
        Invalid { message: String } => "token rejected: {message}",
        /// The token is past its expiry.
        Expired => "token expired",
    }
}

/// Signs and verifies bearer tokens with a process-wide secret.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Produce a signed token for `user`.
    fn issue(&self, user: &User) -> Result<String, TokenError>;

    /// Verify a token string and return its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
