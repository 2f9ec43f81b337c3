use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::error;

use crate::domain::{
    common::{AuthConfig, entities::app_errors::CoreError},
    user::{
        entities::{AuthToken, JwtClaim, User},
        ports::TokenIssuer,
    },
};

#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_seconds: i64,
}

impl JwtTokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_seconds: config.token_ttl_seconds,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<AuthToken, CoreError> {
        let now = Utc::now().timestamp();

        let claims = JwtClaim {
            sub: user.id,
            phone: user.phone.clone(),
            iat: now,
            exp: now + self.token_ttl_seconds,
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(AuthToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_ttl_seconds,
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let data = decode::<JwtClaim>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| CoreError::InvalidCredentials)?;

        Ok(data.claims)
    }
}
