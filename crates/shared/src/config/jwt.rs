use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

impl Claims {
    pub fn new(sub: Uuid, exp: usize, iat: usize, token_type: String) -> Self {
        Claims {
            sub,
            exp,
            iat,
            token_type,
        }
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    jwt_secret: String,
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("jwt_secret", &"***")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, ttl_minutes: i64) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            ttl_minutes,
        }
    }

    pub fn ttl_minutes(&self) -> i64 {
        self.ttl_minutes
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: Uuid, token_type: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = match token_type {
            "access" => (now + Duration::minutes(self.ttl_minutes)).timestamp() as usize,
            _ => return Err(ServiceError::InvalidTokenType),
        };

        let claims = Claims::new(user_id, exp, iat, token_type.to_string());

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Uuid, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_back_to_subject() {
        let jwt = JwtConfig::new("test-secret", 30);
        let user_id = Uuid::new_v4();

        let token = jwt.generate_token(user_id, "access").expect("token");
        assert_eq!(jwt.verify_token(&token, "access").expect("verify"), user_id);
    }

    #[test]
    fn rejects_foreign_signature_and_unknown_type() {
        let jwt = JwtConfig::new("test-secret", 30);
        let other = JwtConfig::new("other-secret", 30);
        let token = other.generate_token(Uuid::new_v4(), "access").expect("token");

        assert!(matches!(
            jwt.verify_token(&token, "access"),
            Err(ServiceError::Jwt(_))
        ));
        assert!(matches!(
            jwt.generate_token(Uuid::new_v4(), "refresh"),
            Err(ServiceError::InvalidTokenType)
        ));
    }
}
