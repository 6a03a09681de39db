use std::collections::HashMap;

use bcrypt::{hash, verify};
use tracing::{info, warn};

use crate::models::auth::{LoginRequest, LoginResponse, UserInfo, UserRole};
use crate::services::authorization_service::AuthorizationService;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
struct StaffUser {
    id: String,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: UserRole,
    is_active: bool,
}

impl StaffUser {
    fn user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role,
            permissions: AuthorizationService::permissions_for_role(&self.role),
        }
    }
}

/// Servicio de autenticación del personal del taller
pub struct AuthService {
    jwt_service: JwtService,
    // Directorio en memoria (en producción sería una BD real)
    users: HashMap<String, StaffUser>,
}

impl AuthService {
    pub fn new(jwt_service: JwtService) -> Self {
        Self {
            jwt_service,
            users: HashMap::new(),
        }
    }

    /// Crea el servicio con el personal de demostración
    pub fn with_seed_users(
        jwt_service: JwtService,
        seed_password: &str,
        bcrypt_cost: u32,
    ) -> Result<Self, AppError> {
        let mut service = Self::new(jwt_service);
        let seed = [
            ("1", "admin@autoservice.com", "John", "Admin", UserRole::Admin),
            ("2", "manager@autoservice.com", "Sarah", "Manager", UserRole::Manager),
            ("3", "engineer@autoservice.com", "Mike", "Engineer", UserRole::Engineer),
            ("4", "advisor@autoservice.com", "Lisa", "Advisor", UserRole::Advisor),
            ("5", "reception@autoservice.com", "Emma", "Reception", UserRole::Receptionist),
        ];

        for (id, email, first_name, last_name, role) in seed {
            service.register_user(id, email, first_name, last_name, role, seed_password, bcrypt_cost)?;
        }

        info!("👥 {} usuarios de personal cargados", service.users.len());
        Ok(service)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn register_user(
        &mut self,
        id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: UserRole,
        password: &str,
        bcrypt_cost: u32,
    ) -> Result<(), AppError> {
        let password_hash =
            hash(password, bcrypt_cost).map_err(|e| AppError::Hash(e.to_string()))?;

        self.users.insert(
            email.to_lowercase(),
            StaffUser {
                id: id.to_string(),
                email: email.to_lowercase(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                password_hash,
                role,
                is_active: true,
            },
        );
        Ok(())
    }

    /// Autentica un usuario y emite un token
    pub fn authenticate(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let email = request.email.trim().to_lowercase();
        let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

        let user = self.users.get(&email).ok_or_else(|| {
            warn!("🔒 Login fallido: usuario desconocido '{}'", email);
            invalid()
        })?;

        if !user.is_active {
            warn!("🔒 Login fallido: usuario inactivo '{}'", email);
            return Err(invalid());
        }

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !valid {
            warn!("🔒 Login fallido: contraseña incorrecta para '{}'", email);
            return Err(invalid());
        }

        let user_info = user.user_info();
        let (token, expires_at) = self.jwt_service.generate_access_token(&user_info)?;
        info!("✅ Login exitoso: {} ({})", email, user.role.as_str());

        Ok(LoginResponse {
            token,
            user_info,
            expires_at,
        })
    }

    /// Resuelve el token en la información del usuario
    pub fn validate_token(&self, token: &str) -> Result<UserInfo, AppError> {
        self.jwt_service.get_user_info(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::jwt_service::JwtConfig;

    fn service() -> AuthService {
        let jwt = JwtService::new(JwtConfig::new("test-secret".to_string(), 1));
        AuthService::with_seed_users(jwt, "password123", 4).unwrap()
    }

    #[test]
    fn test_login_with_seed_user() {
        let auth = service();
        let response = auth
            .authenticate(&LoginRequest {
                email: "Manager@AutoService.com".to_string(),
                password: "password123".to_string(),
            })
            .unwrap();

        assert_eq!(response.user_info.role, UserRole::Manager);
        let resolved = auth.validate_token(&response.token).unwrap();
        assert_eq!(resolved, response.user_info);
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let auth = service();
        let wrong_password = auth.authenticate(&LoginRequest {
            email: "admin@autoservice.com".to_string(),
            password: "nope".to_string(),
        });
        assert!(matches!(wrong_password, Err(AppError::Unauthorized(_))));

        let unknown = auth.authenticate(&LoginRequest {
            email: "ghost@autoservice.com".to_string(),
            password: "password123".to_string(),
        });
        assert!(matches!(unknown, Err(AppError::Unauthorized(_))));
    }
}
