// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// El token se inyecta explícitamente al construir el cliente (nada de
// estado global): con token se añade "Authorization: Bearer <token>",
// sin token el header se omite.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{
    AuthResponse, ChangePasswordRequest, FileListResponse, FileMetadata, FileSearchParams,
    LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};
use crate::utils::i18n::t;

/// Taxonomía de errores del transporte
#[derive(Debug, Error)]
pub enum ApiError {
    /// El backend rechazó la sesión (401): fuerza la limpieza de sesión
    #[error("unauthorized")]
    Unauthorized,
    /// Respuesta no-2xx con mensaje extraído del cuerpo JSON si existe
    #[error("HTTP {status}: {message:?}")]
    Server { status: u16, message: Option<String> },
    /// Fallo de red/transporte
    #[error("network error: {0}")]
    Network(String),
    /// Cuerpo de respuesta no parseable
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Mensaje para mostrar al usuario: el del servidor si lo hay,
    /// si no el mensaje localizado por defecto de la operación
    pub fn localized(&self, default_key: &str, lang: &str) -> String {
        match self {
            ApiError::Unauthorized => t("session_expired", lang),
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => t(default_key, lang),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Extraer el campo "message" del cuerpo de error JSON del backend
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

/// Construir el valor del header Authorization (None si no hay token)
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {}", t))
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Cliente con la URL del backend configurada y un token opcional
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(CONFIG.backend_url().to_string(), token)
    }

    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        Self { base_url, token }
    }

    fn attach_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match bearer_header(self.token.as_deref()) {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    /// Mapear una respuesta a la taxonomía de errores
    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status,
            message: extract_server_message(&body),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .attach_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Autenticación
    // ------------------------------------------------------------------

    /// POST /auth/login
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Archivos
    // ------------------------------------------------------------------

    /// GET /files?page=..&size=..&sort=..&search=..
    pub async fn list_files(&self, params: &FileSearchParams) -> Result<FileListResponse, ApiError> {
        let path = format!("/files?{}", params.to_query());
        self.get_json(&path).await
    }

    /// PUT /files/delete con el nombre en el cuerpo
    /// (en lugar de DELETE con path, por limitaciones CORS del despliegue)
    pub async fn delete_file(&self, filename: &str) -> Result<(), ApiError> {
        let url = format!("{}/files/delete", self.base_url);
        let body = serde_json::json!({ "fileName": filename });
        let response = self
            .attach_auth(Request::put(&url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// POST /files/download con el nombre en el cuerpo; devuelve los bytes
    /// crudos y el content-type anunciado por el servidor
    pub async fn download_file(&self, filename: &str) -> Result<(Vec<u8>, Option<String>), ApiError> {
        let url = format!("{}/files/download", self.base_url);
        let body = serde_json::json!({ "fileName": filename });
        let response = self
            .attach_auth(Request::post(&url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        let content_type = response.headers().get("content-type");
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok((bytes, content_type))
    }

    /// PUT /files/{id}/share
    pub async fn share_file(&self, file_id: &str, is_public: bool) -> Result<FileMetadata, ApiError> {
        let url = format!("{}/files/{}/share", self.base_url, file_id);
        let body = serde_json::json!({ "isPublic": is_public });
        let response = self
            .attach_auth(Request::put(&url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<FileMetadata>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// PUT /files/{id}/rename
    pub async fn rename_file(&self, file_id: &str, new_name: &str) -> Result<FileMetadata, ApiError> {
        let url = format!("{}/files/{}/rename", self.base_url, file_id);
        let body = serde_json::json!({ "newName": new_name });
        let response = self
            .attach_auth(Request::put(&url))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<FileMetadata>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Perfil de usuario
    // ------------------------------------------------------------------

    /// GET /users/me
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        self.get_json("/users/me").await
    }

    /// PUT /users/me
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        let url = format!("{}/users/me", self.base_url);
        let response = self
            .attach_auth(Request::put(&url))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_success(response).await?;
        response
            .json::<User>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST /users/me/change-password
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        let url = format!("{}/users/me/change-password", self.base_url);
        let response = self
            .attach_auth(Request::post(&url))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_present_only_with_token() {
        assert_eq!(
            bearer_header(Some("jwt-abc")).as_deref(),
            Some("Bearer jwt-abc")
        );
        assert!(bearer_header(None).is_none());
    }

    #[test]
    fn extracts_message_from_json_body() {
        assert_eq!(
            extract_server_message(r#"{"message":"Dosya bulunamadı"}"#).as_deref(),
            Some("Dosya bulunamadı")
        );
        assert!(extract_server_message(r#"{"error":"other"}"#).is_none());
        assert!(extract_server_message("not json").is_none());
        assert!(extract_server_message("").is_none());
    }

    #[test]
    fn localized_prefers_server_message() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Ya existe un archivo con ese nombre".to_string()),
        };
        assert_eq!(
            err.localized("error_upload", "ES"),
            "Ya existe un archivo con ese nombre"
        );
    }

    #[test]
    fn localized_falls_back_to_default_key() {
        let err = ApiError::Network("timeout".to_string());
        assert_eq!(err.localized("error_upload", "FR"), "Erreur lors du téléversement");

        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.localized("error_delete", "ES"), "Error eliminando el archivo");
    }

    #[test]
    fn unauthorized_maps_to_session_expired() {
        let err = ApiError::Unauthorized;
        assert!(err.is_unauthorized());
        assert_eq!(
            err.localized("error_fetch_files", "EN"),
            "Session expired, please sign in again"
        );
    }
}
