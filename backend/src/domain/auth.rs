//! Authentication primitives: login credentials and token claims.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use zeroize::Zeroizing;

use super::user::{Email, User, UserId, UserValidationError};

/// Lifetime of an issued bearer token.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Return the lifetime of an issued bearer token.
pub fn token_lifetime() -> Duration {
    Duration::days(TOKEN_LIFETIME_DAYS)
}

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    MissingEmail,
    /// Password was missing or empty.
    MissingPassword,
    /// Email was present but malformed.
    InvalidEmail(UserValidationError),
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEmail | Self::MissingPassword => {
                write!(f, "Email and password required")
            }
            Self::InvalidEmail(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Validated email/password pair used for registration and login.
///
/// ## Invariants
/// - `email` is a valid, trimmed [`Email`].
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use backend::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("a@b.com", "pw123456").unwrap();
/// assert_eq!(creds.email().as_ref(), "a@b.com");
/// assert_eq!(creds.password(), "pw123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: Email,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        if email.trim().is_empty() {
            return Err(CredentialsValidationError::MissingEmail);
        }
        if password.is_empty() {
            return Err(CredentialsValidationError::MissingPassword);
        }
        let email = Email::new(email).map_err(CredentialsValidationError::InvalidEmail)?;

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the identity lookup.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Plain-text password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Decoded payload of a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    user_id: UserId,
    email: Email,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl TokenClaims {
    /// Claims for `user` issued at `issued_at`, valid for [`token_lifetime`].
    pub fn for_user(user: &User, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id: *user.id(),
            email: user.email().clone(),
            issued_at,
            expires_at: issued_at + token_lifetime(),
        }
    }

    /// Rebuild claims from decoded parts.
    pub fn from_parts(
        user_id: UserId,
        email: Email,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            email,
            issued_at,
            expires_at,
        }
    }

    /// Subject identifier.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Email embedded at issuance.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Issuance instant.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
