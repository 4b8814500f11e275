// ============================================================================
// AUTH MODELS - Usuario, sesión y payloads de autenticación
// ============================================================================

use serde::{Deserialize, Serialize};

/// Usuario autenticado (perfil devuelto por el backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Nombre completo para mostrar en la navbar
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request de login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request de registro
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Respuesta de login/registro
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl AuthResponse {
    /// Extraer el perfil de usuario de la respuesta
    pub fn user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Sesión persistida en localStorage (token + perfil)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Request de actualización de perfil (PUT /users/me)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Request de cambio de contraseña (POST /users/me/change-password)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_deserializes_camel_case() {
        let json = r#"{
            "token": "jwt-abc",
            "userId": "u-1",
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "jwt-abc");
        let user = resp.user();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn update_profile_skips_empty_fields() {
        let req = UpdateProfileRequest {
            email: None,
            first_name: Some("Grace".to_string()),
            last_name: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"firstName":"Grace"}"#);
    }
}
