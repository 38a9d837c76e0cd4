use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::IdentityClaims;
use super::errors::TokenError;

/// Issues and verifies signed identity tokens.
///
/// Tokens are HS256-signed (HMAC with SHA-256) with a process-wide secret
/// and carry a fixed lifetime stamped at issuance. Expiry is the only
/// invalidation mechanism; there is no revocation list.
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenAuthority {
    /// Default token lifetime in seconds (one hour).
    pub const DEFAULT_TTL_SECONDS: i64 = 3600;

    /// Create a token authority with the default one-hour lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::seconds(Self::DEFAULT_TTL_SECONDS))
    }

    /// Create a token authority with an explicit token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `ttl` - Lifetime stamped into every issued token
    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for an identity.
    ///
    /// The expiry is set to the authority's lifetime from now.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `email` - Email address to embed in the claims
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, email: &str) -> Result<String, TokenError> {
        let claims = IdentityClaims::new(subject, email, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return the embedded claims.
    ///
    /// Validates the signature and the expiry with zero leeway.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    ///
    /// # Returns
    /// The identity claims embedded at issuance
    ///
    /// # Errors
    /// * `Expired` - The token's expiry has passed
    /// * `Invalid` - The token is malformed or the signature does not match
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<IdentityClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}
