//! JWT service for session token generation and validation
//!
//! Tokens are self-contained HS256-signed claim sets carrying the user id
//! and an absolute expiry. Nothing is persisted server-side: a token is
//! valid exactly when its signature checks out and its expiry has not
//! passed. There is no revocation list; logout is client-side discard.

use anyhow::Result;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret used for signing and verifying tokens
    pub secret: String,
    /// Token lifetime in seconds (default: 24 hours)
    pub expiration: u64,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_SECRET`: Shared signing secret (required)
    /// - `JWT_EXPIRATION`: Token lifetime in seconds (default: 86400)
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable not set"))?;

        let expiration = std::env::var("JWT_EXPIRATION")
            .unwrap_or_else(|_| "86400".to_string()) // 24 hours
            .parse()
            .unwrap_or(86400);

        Ok(JwtConfig { secret, expiration })
    }
}

/// JWT claims structure
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: i64,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// Token validation failure
///
/// `Expired` and `Invalid` are distinct because callers surface different
/// messages for them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token's expiry has passed
    #[error("token expired")]
    Expired,
    /// Signature mismatch, malformed structure, or wrong algorithm
    #[error("invalid token")]
    Invalid,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Pinning the algorithm in the validation rejects tokens signed with
        // anything other than HS256.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtService {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }

    /// Generate a signed token for a user
    pub fn generate_token(&self, user_id: i64) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| anyhow::anyhow!("Failed to get current time: {}", e))?
            .as_secs();

        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.config.expiration,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a token and return the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test_secret_for_unit_tests".to_string(),
            expiration: 3600,
        })
    }

    #[test]
    fn test_generate_and_validate_roundtrip() {
        let service = test_service();
        let token = service.generate_token(42).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        let service = test_service();

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = Claims {
            sub: 42,
            iat: now - 10_000,
            exp: now - 7_200,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("test_secret_for_unit_tests".as_bytes()),
        )
        .unwrap();

        assert_eq!(service.validate_token(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let service = test_service();
        let token = service.generate_token(42).unwrap();

        // Alter one character of the payload segment so the signature no
        // longer matches.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let payload = parts[1].clone();
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        parts[1] = format!("{}{}", flipped, &payload[1..]);
        let tampered = parts.join(".");

        assert_eq!(
            service.validate_token(&tampered),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let service = test_service();
        let other = JwtService::new(JwtConfig {
            secret: "a_different_secret".to_string(),
            expiration: 3600,
        });

        let token = other.generate_token(42).unwrap();
        assert_eq!(service.validate_token(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_algorithm_is_invalid() {
        let service = test_service();

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = Claims {
            sub: 42,
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret("test_secret_for_unit_tests".as_bytes()),
        )
        .unwrap();

        assert_eq!(service.validate_token(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = test_service();
        assert_eq!(
            service.validate_token("not.a.token"),
            Err(TokenError::Invalid)
        );
        assert_eq!(service.validate_token(""), Err(TokenError::Invalid));
    }

    #[test]
    #[serial]
    fn test_jwt_config_from_env() {
        unsafe {
            std::env::set_var("JWT_SECRET", "env_secret");
            std::env::remove_var("JWT_EXPIRATION");
        }

        let config = JwtConfig::from_env().unwrap();
        assert_eq!(config.secret, "env_secret");
        assert_eq!(config.expiration, 86400);

        unsafe {
            std::env::remove_var("JWT_SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_jwt_config_requires_secret() {
        unsafe {
            std::env::remove_var("JWT_SECRET");
        }

        assert!(JwtConfig::from_env().is_err());
    }
}
