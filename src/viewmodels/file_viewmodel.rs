// ============================================================================
// FILE VIEWMODEL - Lógica de la colección de archivos
// ============================================================================
// Orquesta listado, subida, descarga, borrado, renombrado y compartido.
// La página local es un espejo del servidor: cada mutación confirmada
// relanza un fetch completo y reemplaza la página en bloque.
// ============================================================================

use crate::models::is_supported_content_type;
use crate::services::{
    auth_service, download::trigger_browser_save, upload_service::upload_with_progress, ApiClient,
    ApiError,
};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::schedule_notice_dismiss;

/// ViewModel de archivos - SOLO lógica de negocio
pub struct FileViewModel {
    state: AppState,
}

impl FileViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(self.state.auth.token())
    }

    // ------------------------------------------------------------------
    // Listado
    // ------------------------------------------------------------------

    /// Fetch de la página actual; el resultado reemplaza la colección
    /// local por completo
    pub async fn fetch_files(&self) {
        self.state.files.set_loading(true);
        self.state.notify_subscribers();

        let query = self.state.files.query();
        match self.client().list_files(&query).await {
            Ok(response) => {
                log::info!(
                    "📋 Página {} cargada: {} archivos de {}",
                    query.page,
                    response.files.len(),
                    response.total_count
                );
                self.state
                    .files
                    .replace_page(response.files, response.total_count);
            }
            Err(e) => self.handle_error(e, "error_fetch_files"),
        }

        self.state.files.set_loading(false);
        self.state.notify_subscribers();
    }

    /// Cambiar de página y recargar
    pub async fn go_to_page(&self, page: u32) {
        self.state.files.set_page(page);
        self.fetch_files().await;
    }

    /// Nueva búsqueda (resetea a la primera página) y recarga
    pub async fn search(&self, term: String) {
        let search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self.state.files.set_search(search);
        self.fetch_files().await;
    }

    /// Cambiar el criterio de orden (resetea a la primera página) y recargar
    pub async fn sort_by(&self, sort: String) {
        let sort = if sort.is_empty() { None } else { Some(sort) };
        self.state.files.set_sort(sort);
        self.fetch_files().await;
    }

    // ------------------------------------------------------------------
    // Subida
    // ------------------------------------------------------------------

    /// Subir un archivo. El tipo ya se rechazó en la selección (ver
    /// selection_error); este guardia evita que un tipo no soportado
    /// llegue al backend si se llama directamente, sin tocar el estado.
    pub async fn upload(&self, file: web_sys::File) {
        let lang = self.state.language();
        if selection_error(&file.type_(), &lang).is_some() {
            log::warn!("⚠️ Tipo no soportado: {}", file.type_());
            return;
        }

        log::info!("📤 Subiendo {} ({})", file.name(), file.type_());
        self.state.files.set_upload_progress(None);
        self.state.notify_subscribers();

        let base_url = crate::config::CONFIG.backend_url().to_string();
        let token = self.state.auth.token();
        let progress_state = self.state.clone();
        let result = upload_with_progress(&base_url, token.as_deref(), &file, move |progress| {
            progress_state.files.set_upload_progress(Some(progress));
            progress_state.notify_subscribers();
        })
        .await;

        // El progreso es efímero: desaparece al terminar, con éxito o sin él
        self.state.files.set_upload_progress(None);

        match result {
            Ok(_) => {
                let seq = self.state.files.set_success(t("success_upload", &lang));
                schedule_notice_dismiss(&self.state, seq);
                self.fetch_files().await;
            }
            Err(e) => {
                self.handle_error(e, "error_upload");
                self.state.notify_subscribers();
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutaciones sobre archivos existentes
    // ------------------------------------------------------------------

    /// Borrar por nombre: eliminación local inmediata tras la confirmación
    /// del servidor, seguida de un fetch completo que resincroniza la página
    pub async fn delete(&self, filename: String) {
        match self.client().delete_file(&filename).await {
            Ok(()) => {
                log::info!("🗑️ Archivo eliminado: {}", filename);
                self.state.files.remove_by_filename(&filename);
                let lang = self.state.language();
                let seq = self.state.files.set_success(t("success_delete", &lang));
                schedule_notice_dismiss(&self.state, seq);
                self.fetch_files().await;
            }
            Err(e) => {
                self.handle_error(e, "error_delete");
                self.state.notify_subscribers();
            }
        }
    }

    /// Descargar: bytes del backend + guardado vía el navegador
    pub async fn download(&self, filename: String) {
        match self.client().download_file(&filename).await {
            Ok((bytes, content_type)) => {
                if let Err(e) = trigger_browser_save(&filename, &bytes, content_type.as_deref()) {
                    log::error!("❌ Error disparando la descarga: {:?}", e);
                    let lang = self.state.language();
                    let seq = self.state.files.set_error(t("error_download", &lang));
                    schedule_notice_dismiss(&self.state, seq);
                    self.state.notify_subscribers();
                }
            }
            Err(e) => {
                self.handle_error(e, "error_download");
                self.state.notify_subscribers();
            }
        }
    }

    /// Renombrar y resincronizar la página
    pub async fn rename(&self, file_id: String, new_name: String) {
        match self.client().rename_file(&file_id, &new_name).await {
            Ok(_) => {
                log::info!("✏️ Archivo renombrado: {}", new_name);
                let lang = self.state.language();
                let seq = self.state.files.set_success(t("success_rename", &lang));
                schedule_notice_dismiss(&self.state, seq);
                self.fetch_files().await;
            }
            Err(e) => {
                self.handle_error(e, "error_rename");
                self.state.notify_subscribers();
            }
        }
    }

    /// Cambiar visibilidad pública y resincronizar la página
    pub async fn set_public(&self, file_id: String, is_public: bool) {
        match self.client().share_file(&file_id, is_public).await {
            Ok(_) => {
                log::info!("🔗 Visibilidad actualizada: public={}", is_public);
                let lang = self.state.language();
                let seq = self.state.files.set_success(t("success_share", &lang));
                schedule_notice_dismiss(&self.state, seq);
                self.fetch_files().await;
            }
            Err(e) => {
                self.handle_error(e, "error_share");
                self.state.notify_subscribers();
            }
        }
    }

    /// Error de una operación autenticada: un 401 invalida la sesión
    /// completa, el resto se publica como aviso
    fn handle_error(&self, error: ApiError, default_key: &str) {
        log::error!("❌ {}", error);
        let lang = self.state.language();
        let message = error.localized(default_key, &lang);
        if error.is_unauthorized() {
            auth_service::invalidate_session(&self.state.auth);
        }
        let seq = self.state.files.set_error(message);
        schedule_notice_dismiss(&self.state, seq);
    }
}

/// Validar un content-type en el momento de la selección. Devuelve el
/// mensaje a mostrar inline en el panel de subida, o None si el tipo
/// está soportado. La vista lo muestra sin tocar ningún store.
pub fn selection_error(content_type: &str, lang: &str) -> Option<String> {
    if is_supported_content_type(content_type) {
        None
    } else {
        Some(t("unsupported_type", lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FileState;

    #[test]
    fn supported_selection_passes() {
        assert!(selection_error("application/pdf", "FR").is_none());
        assert!(selection_error("image/png", "ES").is_none());
        assert!(selection_error("image/jpeg", "EN").is_none());
    }

    #[test]
    fn unsupported_selection_yields_inline_message() {
        assert_eq!(
            selection_error("image/gif", "EN").as_deref(),
            Some("Unsupported file type (only PDF, PNG or JPG)")
        );
        assert!(selection_error("text/html", "FR").is_some());
        assert!(selection_error("", "ES").is_some());
    }

    #[test]
    fn rejected_selection_leaves_notice_slot_untouched() {
        let files = FileState::new();
        let live = files.set_success("subido".to_string());

        // El rechazo devuelve un valor; no publica aviso ni avanza la
        // secuencia, así que el aviso vivo sigue intacto
        assert!(selection_error("image/gif", "ES").is_some());
        assert_eq!(
            files.notice(),
            Some(crate::state::Notice::Success("subido".to_string()))
        );
        files.clear_notice_if(live);
        assert!(files.notice().is_none());
    }
}
