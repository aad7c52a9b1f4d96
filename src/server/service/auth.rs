//! Credential hashing and bearer-token issuance.
//!
//! Passwords are stored as bcrypt hashes; sessions are stateless HS256
//! tokens carrying the account id and actor kind. Token verification is the
//! single entry point the authentication extractor relies on.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::ActorKind,
};

const TOKEN_LIFETIME_DAYS: i64 = 30;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    /// Account id the token was issued for.
    pub sub: Uuid,
    /// Which account table the id refers to.
    pub kind: ActorKind,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a bearer token for the given account, valid for 30 days.
    pub fn issue(&self, id: Uuid, kind: ActorKind) -> Result<String, AppError> {
        let exp = (chrono::Utc::now() + chrono::Duration::days(TOKEN_LIFETIME_DAYS)).timestamp();

        let claims = Claims {
            sub: id,
            kind,
            exp: exp as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {e}")))
    }

    /// Verifies a bearer token's signature and expiry and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

/// Compares a login password against the stored bcrypt hash. A mismatch is
/// an `InvalidCredentials` outcome, not an infrastructure error.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AppError> {
    let matches = bcrypt::verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {e}")))?;

    if matches {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials.into())
    }
}
