//! HS256 bearer tokens via `jsonwebtoken`.
//!
//! Expiry is checked against the injected clock with zero leeway rather than
//! the library's wall-clock check, so tests can move time.

use std::collections::HashSet;
use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::{TokenError, TokenService};
use crate::domain::{Email, TokenClaims, User, UserId};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JwtClaims {
    sub: String,
    user_id: String,
    email: String,
    iat: i64,
    exp: i64,
    /// Unique per issue so two tokens minted in the same second differ.
    jti: String,
}

/// Signs and verifies tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    /// Build a codec for `secret`.
    pub fn new(secret: &str, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["exp".to_owned(), "sub".to_owned()]);
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        }
    }
}

fn timestamp(seconds: i64) -> Result<chrono::DateTime<chrono::Utc>, TokenError> {
    chrono::DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| TokenError::invalid("timestamp out of range"))
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<String, TokenError> {
        let claims = TokenClaims::for_user(user, self.clock.utc());
        let payload = JwtClaims {
            sub: claims.user_id().to_string(),
            user_id: claims.user_id().to_string(),
            email: claims.email().to_string(),
            iat: claims.issued_at().timestamp(),
            exp: claims.expires_at().timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &payload, &self.encoding)
            .map_err(|err| TokenError::encode(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let decoded = jsonwebtoken::decode::<JwtClaims>(token, &self.decoding, &self.validation)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::expired(),
                _ => TokenError::invalid(err.to_string()),
            })?;
        let claims = decoded.claims;

        if claims.exp <= self.clock.utc().timestamp() {
            return Err(TokenError::expired());
        }

        let user_id =
            UserId::new(&claims.sub).map_err(|err| TokenError::invalid(err.to_string()))?;
        let email = Email::new(&claims.email).map_err(|err| TokenError::invalid(err.to_string()))?;
        Ok(TokenClaims::from_parts(
            user_id,
            email,
            timestamp(claims.iat)?,
            timestamp(claims.exp)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use std::sync::Mutex;

    struct StepClock(Mutex<DateTime<Utc>>);

    impl StepClock {
        fn advance_days(&self, days: i64) {
            let mut now = self.0.lock().expect("clock lock");
            *now += chrono::Duration::days(days);
        }
    }

    impl Clock for StepClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.0.lock().expect("clock lock")
        }
    }

    #[fixture]
    fn clock() -> Arc<StepClock> {
        let start = Utc
            .with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
            .single()
            .expect("timestamp");
        Arc::new(StepClock(Mutex::new(start)))
    }

    #[fixture]
    fn user() -> User {
        User::new(UserId::random(), Email::new("a@b.com").expect("email"))
    }

    #[rstest]
    fn issued_token_verifies_with_same_secret(clock: Arc<StepClock>, user: User) {
        let tokens = JwtTokenService::new("secret", clock);
        let token = tokens.issue(&user).expect("issue");

        let claims = tokens.verify(&token).expect("verify");
        assert_eq!(claims.user_id(), user.id());
        assert_eq!(claims.email(), user.email());
        assert_eq!(
            claims.expires_at() - claims.issued_at(),
            chrono::Duration::days(7)
        );
    }

    #[rstest]
    fn payload_carries_user_id_and_email(clock: Arc<StepClock>, user: User) {
        let tokens = JwtTokenService::new("secret", clock);
        let token = tokens.issue(&user).expect("issue");

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let raw = jsonwebtoken::decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &validation,
        )
        .expect("decode");
        assert_eq!(raw.claims["userId"], user.id().to_string());
        assert_eq!(raw.claims["sub"], user.id().to_string());
        assert_eq!(raw.claims["email"], "a@b.com");
    }

    #[rstest]
    fn tokens_issued_in_the_same_instant_differ(clock: Arc<StepClock>, user: User) {
        let tokens = JwtTokenService::new("secret", clock);
        let first = tokens.issue(&user).expect("issue");
        let second = tokens.issue(&user).expect("issue");

        assert_ne!(first, second);
        assert_eq!(
            tokens.verify(&first).expect("verify").user_id(),
            tokens.verify(&second).expect("verify").user_id()
        );
    }

    #[rstest]
    fn token_from_other_secret_is_rejected(clock: Arc<StepClock>, user: User) {
        let issuer = JwtTokenService::new("secret-a", clock.clone());
        let verifier = JwtTokenService::new("secret-b", clock);
        let token = issuer.issue(&user).expect("issue");

        assert!(matches!(
            verifier.verify(&token),
            Err(TokenError::Invalid { .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("not.a.token")]
    #[case("abc")]
    fn malformed_tokens_are_rejected(clock: Arc<StepClock>, #[case] token: &str) {
        let tokens = JwtTokenService::new("secret", clock);
        assert!(matches!(tokens.verify(token), Err(TokenError::Invalid { .. })));
    }

    #[rstest]
    #[case(6, true)]
    #[case(7, false)]
    #[case(30, false)]
    fn tokens_expire_after_seven_days(
        clock: Arc<StepClock>,
        user: User,
        #[case] days_later: i64,
        #[case] still_valid: bool,
    ) {
        let tokens = JwtTokenService::new("secret", clock.clone());
        let token = tokens.issue(&user).expect("issue");

        clock.advance_days(days_later);
        let result = tokens.verify(&token);
        if still_valid {
            assert!(result.is_ok());
        } else {
            assert_eq!(result.expect_err("expired"), TokenError::expired());
        }
    }
}
