//! Credential hashing and bearer-token adapters.

mod bcrypt_hasher;
mod jwt_tokens;

pub use bcrypt_hasher::{BCRYPT_COST, BcryptPasswordHasher};
pub use jwt_tokens::JwtTokenService;
