// ============================================================================
// CONFIG - Configuración en tiempo de compilación (via build.rs + .env)
// ============================================================================

/// Configuración global de la aplicación
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    /// Milisegundos antes de auto-descartar un aviso de éxito/error
    pub notice_timeout_ms: u32,
    /// Tamaño de página por defecto del listado de archivos
    pub page_size: u32,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8080/api")
                .to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.dosyahub.app/api")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            notice_timeout_ms: option_env!("NOTICE_TIMEOUT_MS")
                .unwrap_or("4000")
                .parse()
                .unwrap_or(4000),
            page_size: option_env!("PAGE_SIZE").unwrap_or("10").parse().unwrap_or(10),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::from_env();
        config.environment = "development".to_string();
        assert_eq!(config.backend_url(), config.backend_url_development.as_str());
        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), config.backend_url_production.as_str());
    }

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::from_env();
        assert!(config.notice_timeout_ms > 0);
        assert!(config.page_size > 0);
    }
}
