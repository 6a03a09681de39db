use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::{JwtClaims, Permission, UserInfo, UserRole};
use crate::utils::errors::AppError;

/// Configuración JWT
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub access_token_duration: Duration,
}

impl JwtConfig {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            algorithm: Algorithm::HS256,
            access_token_duration: Duration::hours(expiration_hours),
        }
    }
}

/// Servicio JWT
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Genera un token de acceso y devuelve su expiración
    pub fn generate_access_token(
        &self,
        user_info: &UserInfo,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + self.config.access_token_duration;

        let mut permissions: Vec<String> = user_info
            .permissions
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();
        permissions.sort();

        let claims = JwtClaims {
            sub: user_info.id.clone(),
            email: user_info.email.clone(),
            first_name: user_info.first_name.clone(),
            last_name: user_info.last_name.clone(),
            role: user_info.role.as_str().to_string(),
            permissions,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating access token: {}", e)))?;

        Ok((token, exp))
    }

    /// Valida y decodifica un token
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }

    /// Obtiene información completa del usuario desde el token
    pub fn get_user_info(&self, token: &str) -> Result<UserInfo, AppError> {
        let claims = self.validate_token(token)?;

        let role = UserRole::from_str(&claims.role)
            .ok_or_else(|| AppError::Jwt("Invalid role in token".to_string()))?;
        let permissions = claims
            .permissions
            .iter()
            .map(|p| {
                Permission::from_str(p)
                    .ok_or_else(|| AppError::Jwt(format!("Unknown permission '{}' in token", p)))
            })
            .collect::<Result<_, _>>()?;

        Ok(UserInfo {
            id: claims.sub,
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            role,
            permissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::authorization_service::AuthorizationService;

    fn service() -> JwtService {
        JwtService::new(JwtConfig::new("test-secret".to_string(), 1))
    }

    fn engineer() -> UserInfo {
        UserInfo {
            id: "3".to_string(),
            email: "engineer@autoservice.com".to_string(),
            first_name: "Mike".to_string(),
            last_name: "Engineer".to_string(),
            role: UserRole::Engineer,
            permissions: AuthorizationService::permissions_for_role(&UserRole::Engineer),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = service();
        let (token, expires_at) = jwt_service.generate_access_token(&engineer()).unwrap();
        assert!(!token.is_empty());
        assert!(expires_at > Utc::now());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "3");
        assert_eq!(claims.role, "engineer");
        assert!(claims.permissions.contains(&"workorders:update".to_string()));

        assert_eq!(jwt_service.get_user_info(&token).unwrap(), engineer());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let (token, _) = service().generate_access_token(&engineer()).unwrap();
        let other = JwtService::new(JwtConfig::new("another-secret".to_string(), 1));
        assert!(matches!(other.validate_token(&token), Err(AppError::Jwt(_))));
    }
}
