// ============================================================================
// FILE MODELS - Metadatos de archivos y parámetros de búsqueda
// ============================================================================

use serde::{Deserialize, Serialize};

/// Tipos de contenido aceptados para subir (validación en el cliente,
/// antes de cualquier tráfico de red)
pub const SUPPORTED_CONTENT_TYPES: [&str; 3] = ["application/pdf", "image/png", "image/jpeg"];

/// Verificar si un content-type está soportado
pub fn is_supported_content_type(content_type: &str) -> bool {
    SUPPORTED_CONTENT_TYPES.contains(&content_type)
}

/// Metadatos de un archivo (espejo de solo lectura del estado del servidor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub content_type: String,
    pub size: u64,
    pub upload_date: String,
    pub owner_id: String,
    pub is_public: bool,
}

/// Respuesta del listado paginado (GET /files)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<FileMetadata>,
    #[serde(default)]
    pub total_count: u64,
}

/// Respuesta de subida (POST /files/upload)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub content_type: String,
    pub size: u64,
    pub upload_date: String,
}

/// Parámetros de búsqueda/paginación del listado
#[derive(Debug, Clone, PartialEq)]
pub struct FileSearchParams {
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
    pub search: Option<String>,
}

impl Default for FileSearchParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: crate::config::CONFIG.page_size,
            sort: Some("uploadDate,desc".to_string()),
            search: None,
        }
    }
}

impl FileSearchParams {
    /// Construir el query string (search va URL-encoded)
    pub fn to_query(&self) -> String {
        let mut query = format!("page={}&size={}", self.page, self.size);
        if let Some(sort) = &self.sort {
            query.push_str("&sort=");
            query.push_str(&crate::utils::url_encode(sort));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                query.push_str("&search=");
                query.push_str(&crate::utils::url_encode(search));
            }
        }
        query
    }
}

/// Progreso de una subida en curso (efímero, uno por subida)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadProgress {
    pub loaded: f64,
    pub total: f64,
    /// Porcentaje 0-100
    pub progress: u32,
}

/// Tracker que garantiza progreso monótono no decreciente, acotado a [0,100]
#[derive(Debug, Default)]
pub struct ProgressTracker {
    last: u32,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Actualizar con bytes cargados/totales; nunca retrocede
    pub fn update(&mut self, loaded: f64, total: f64) -> UploadProgress {
        let raw = if total > 0.0 {
            ((loaded * 100.0) / total).round() as i64
        } else {
            0
        };
        let percent = raw.clamp(0, 100) as u32;
        if percent > self.last {
            self.last = percent;
        }
        UploadProgress {
            loaded,
            total,
            progress: self.last,
        }
    }

    /// Marcar la subida como completada: el 100 final es explícito y no
    /// depende del tamaño (un archivo de cero bytes también termina en 100)
    pub fn complete(&mut self, total: f64) -> UploadProgress {
        self.last = 100;
        UploadProgress {
            loaded: total,
            total,
            progress: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_content_types() {
        assert!(is_supported_content_type("application/pdf"));
        assert!(is_supported_content_type("image/png"));
        assert!(is_supported_content_type("image/jpeg"));
        assert!(!is_supported_content_type("image/gif"));
        assert!(!is_supported_content_type("text/html"));
        assert!(!is_supported_content_type(""));
    }

    #[test]
    fn search_params_query_full() {
        let params = FileSearchParams {
            page: 2,
            size: 10,
            sort: Some("uploadDate,desc".to_string()),
            search: Some("informe anual".to_string()),
        };
        assert_eq!(
            params.to_query(),
            "page=2&size=10&sort=uploadDate%2Cdesc&search=informe%20anual"
        );
    }

    #[test]
    fn search_params_query_omits_empty_search() {
        let params = FileSearchParams {
            page: 0,
            size: 10,
            sort: None,
            search: Some(String::new()),
        };
        assert_eq!(params.to_query(), "page=0&size=10");
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.update(10.0, 100.0).progress, 10);
        assert_eq!(tracker.update(50.0, 100.0).progress, 50);
        // Un evento que retrocede no baja el porcentaje
        assert_eq!(tracker.update(30.0, 100.0).progress, 50);
        // Nunca supera 100 aunque loaded > total
        assert_eq!(tracker.update(150.0, 100.0).progress, 100);
    }

    #[test]
    fn progress_with_zero_total() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.update(10.0, 0.0).progress, 0);
    }

    #[test]
    fn complete_always_terminates_at_100() {
        let mut tracker = ProgressTracker::new();
        tracker.update(50.0, 100.0);
        assert_eq!(tracker.complete(100.0).progress, 100);

        // Archivo de cero bytes: update(0,0) se queda en 0,
        // complete garantiza el 100 terminal igualmente
        let mut empty = ProgressTracker::new();
        assert_eq!(empty.update(0.0, 0.0).progress, 0);
        assert_eq!(empty.complete(0.0).progress, 100);
    }

    #[test]
    fn file_list_response_defaults() {
        let resp: FileListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.files.is_empty());
        assert_eq!(resp.total_count, 0);
    }

    #[test]
    fn file_metadata_deserializes_camel_case() {
        let json = r#"{
            "id": "f-1",
            "filename": "a1b2.pdf",
            "originalName": "informe.pdf",
            "contentType": "application/pdf",
            "size": 2048,
            "uploadDate": "2025-03-01T10:00:00Z",
            "ownerId": "u-1",
            "isPublic": false
        }"#;
        let meta: FileMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.original_name, "informe.pdf");
        assert!(!meta.is_public);
    }
}
