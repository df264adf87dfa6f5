//! Stateless access tokens (HMAC-signed JWTs)

use crate::error::{CoreError, CoreResult};
use crate::types::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use std::str::FromStr;

/// Lifetime applied when the caller does not ask for one
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Longest lifetime configuration may ask for (one leap year)
pub const MAX_TOKEN_TTL_MINUTES: i64 = 366 * 24 * 60;

/// Parse an algorithm name, accepting only the symmetric HMAC family
pub fn parse_algorithm(name: &str) -> CoreResult<Algorithm> {
    let alg = Algorithm::from_str(name)
        .map_err(|_| CoreError::Invalid(format!("unknown signing algorithm: {name}")))?;
    match alg {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(alg),
        _ => Err(CoreError::Invalid(format!("signing algorithm must be HS256, HS384 or HS512, got {name}"))),
    }
}

#[derive(Clone)]
pub struct TokenIssuer {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_ttl: Duration,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &self.algorithm)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(secret: &str, algorithm: Algorithm, default_ttl: Duration) -> CoreResult<Self> {
        if secret.is_empty() {
            return Err(CoreError::Invalid("signing secret must not be empty".to_string()));
        }
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(CoreError::Invalid(format!("unsupported signing algorithm: {algorithm:?}")));
        }
        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            default_ttl,
        })
    }

    /// HS256 with the 15 minute default lifetime
    pub fn hs256(secret: &str) -> CoreResult<Self> {
        Self::new(secret, Algorithm::HS256, Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Sign `{sub, exp}` for `subject`, expiring `ttl` from now (or the default)
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> CoreResult<String> {
        let expire = Utc::now()
            .checked_add_signed(ttl.unwrap_or(self.default_ttl))
            .ok_or_else(|| CoreError::Internal("token expiry out of range".to_string()))?;
        let claims = Claims { sub: subject.to_string(), exp: expire.timestamp() };
        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| CoreError::Internal(format!("jwt encode failed: {e}")))
    }

    /// Check signature and expiry, returning the embedded claims.
    ///
    /// Not wired into any route; kept for callers that want to gate on a token.
    pub fn verify(&self, token: &str) -> CoreResult<Claims> {
        let validation = Validation::new(self.algorithm);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}
