// ============================================================================
// FILE STATE - Estado de la colección de archivos
// ============================================================================
// La colección es una página completa que se reemplaza en bloque tras cada
// fetch; nunca se fusiona incrementalmente. Los avisos de éxito/error son de
// un solo slot (el último gana) con número de secuencia para que un timer de
// auto-descarte obsoleto no borre un aviso más nuevo.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{FileMetadata, FileSearchParams, UploadProgress};

/// Aviso transitorio mostrado en el toast
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Estado de la colección de archivos
#[derive(Clone)]
pub struct FileState {
    files: Rc<RefCell<Vec<FileMetadata>>>,
    total_count: Rc<RefCell<u64>>,
    query: Rc<RefCell<FileSearchParams>>,
    loading: Rc<RefCell<bool>>,
    upload_progress: Rc<RefCell<Option<UploadProgress>>>,
    notice: Rc<RefCell<Option<(u64, Notice)>>>,
    notice_seq: Rc<Cell<u64>>,
}

impl FileState {
    pub fn new() -> Self {
        Self {
            files: Rc::new(RefCell::new(Vec::new())),
            total_count: Rc::new(RefCell::new(0)),
            query: Rc::new(RefCell::new(FileSearchParams::default())),
            loading: Rc::new(RefCell::new(false)),
            upload_progress: Rc::new(RefCell::new(None)),
            notice: Rc::new(RefCell::new(None)),
            notice_seq: Rc::new(Cell::new(0)),
        }
    }

    // ------------------------------------------------------------------
    // Colección
    // ------------------------------------------------------------------

    /// Reemplazar la página completa (nunca fusión incremental)
    pub fn replace_page(&self, files: Vec<FileMetadata>, total_count: u64) {
        *self.files.borrow_mut() = files;
        *self.total_count.borrow_mut() = total_count;
    }

    /// Eliminación local tras un delete confirmado por el servidor.
    /// El viewmodel relanza igualmente un fetch completo después.
    pub fn remove_by_filename(&self, filename: &str) {
        self.files.borrow_mut().retain(|f| f.filename != filename);
    }

    pub fn files(&self) -> Vec<FileMetadata> {
        self.files.borrow().clone()
    }

    pub fn contains_filename(&self, filename: &str) -> bool {
        self.files.borrow().iter().any(|f| f.filename == filename)
    }

    pub fn total_count(&self) -> u64 {
        *self.total_count.borrow()
    }

    /// Número total de páginas con el tamaño de página actual
    pub fn total_pages(&self) -> u32 {
        let size = self.query.borrow().size.max(1) as u64;
        let total = *self.total_count.borrow();
        total.div_ceil(size) as u32
    }

    // ------------------------------------------------------------------
    // Parámetros de búsqueda
    // ------------------------------------------------------------------

    pub fn query(&self) -> FileSearchParams {
        self.query.borrow().clone()
    }

    pub fn set_query(&self, query: FileSearchParams) {
        *self.query.borrow_mut() = query;
    }

    pub fn set_page(&self, page: u32) {
        self.query.borrow_mut().page = page;
    }

    pub fn set_search(&self, search: Option<String>) {
        let mut query = self.query.borrow_mut();
        query.search = search;
        // Nueva búsqueda siempre empieza en la primera página
        query.page = 0;
    }

    pub fn set_sort(&self, sort: Option<String>) {
        let mut query = self.query.borrow_mut();
        query.sort = sort;
        query.page = 0;
    }

    // ------------------------------------------------------------------
    // Loading / progreso de subida
    // ------------------------------------------------------------------

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_upload_progress(&self, progress: Option<UploadProgress>) {
        *self.upload_progress.borrow_mut() = progress;
    }

    pub fn upload_progress(&self) -> Option<UploadProgress> {
        *self.upload_progress.borrow()
    }

    // ------------------------------------------------------------------
    // Avisos (slot único, el último gana)
    // ------------------------------------------------------------------

    /// Publicar un aviso de éxito; devuelve el token de secuencia
    /// para el auto-descarte
    pub fn set_success(&self, message: String) -> u64 {
        self.set_notice(Notice::Success(message))
    }

    /// Publicar un aviso de error; devuelve el token de secuencia
    pub fn set_error(&self, message: String) -> u64 {
        self.set_notice(Notice::Error(message))
    }

    fn set_notice(&self, notice: Notice) -> u64 {
        let seq = self.notice_seq.get() + 1;
        self.notice_seq.set(seq);
        *self.notice.borrow_mut() = Some((seq, notice));
        seq
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.borrow().as_ref().map(|(_, n)| n.clone())
    }

    /// Descarte explícito (botón de cerrar)
    pub fn clear_notice(&self) {
        *self.notice.borrow_mut() = None;
    }

    /// Descarte por timeout: solo borra si el aviso sigue siendo el mismo
    /// que disparó el timer
    pub fn clear_notice_if(&self, seq: u64) {
        let mut slot = self.notice.borrow_mut();
        if let Some((current, _)) = slot.as_ref() {
            if *current == seq {
                *slot = None;
            }
        }
    }
}

impl Default for FileState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(filename: &str) -> FileMetadata {
        FileMetadata {
            id: format!("id-{}", filename),
            filename: filename.to_string(),
            original_name: filename.to_string(),
            content_type: "application/pdf".to_string(),
            size: 1024,
            upload_date: "2025-03-01T10:00:00Z".to_string(),
            owner_id: "u-1".to_string(),
            is_public: false,
        }
    }

    #[test]
    fn replace_page_is_wholesale() {
        let state = FileState::new();
        state.replace_page(vec![meta("a.pdf"), meta("b.pdf")], 12);
        assert_eq!(state.files().len(), 2);
        assert_eq!(state.total_count(), 12);

        // Un nuevo fetch reemplaza todo, no fusiona
        state.replace_page(vec![meta("c.pdf")], 1);
        assert_eq!(state.files().len(), 1);
        assert!(!state.contains_filename("a.pdf"));
    }

    #[test]
    fn remove_by_filename_only_removes_match() {
        let state = FileState::new();
        state.replace_page(vec![meta("a.pdf"), meta("b.pdf")], 2);
        state.remove_by_filename("a.pdf");
        assert!(!state.contains_filename("a.pdf"));
        assert!(state.contains_filename("b.pdf"));
    }

    #[test]
    fn notice_slot_last_write_wins() {
        let state = FileState::new();
        state.set_success("subido".to_string());
        state.set_error("fallo".to_string());
        assert_eq!(state.notice(), Some(Notice::Error("fallo".to_string())));
    }

    #[test]
    fn stale_dismiss_does_not_clear_newer_notice() {
        let state = FileState::new();
        let first = state.set_success("primero".to_string());
        let _second = state.set_success("segundo".to_string());

        // El timer del primer aviso expira después de publicarse el segundo
        state.clear_notice_if(first);
        assert_eq!(state.notice(), Some(Notice::Success("segundo".to_string())));
    }

    #[test]
    fn matching_dismiss_clears_notice() {
        let state = FileState::new();
        let seq = state.set_error("fallo".to_string());
        state.clear_notice_if(seq);
        assert!(state.notice().is_none());
    }

    #[test]
    fn search_resets_page() {
        let state = FileState::new();
        state.set_page(3);
        state.set_search(Some("informe".to_string()));
        let query = state.query();
        assert_eq!(query.page, 0);
        assert_eq!(query.search.as_deref(), Some("informe"));
    }

    #[test]
    fn total_pages_rounds_up() {
        let state = FileState::new();
        let mut query = state.query();
        query.size = 10;
        state.set_query(query);

        state.replace_page(Vec::new(), 25);
        assert_eq!(state.total_pages(), 3);
        state.replace_page(Vec::new(), 30);
        assert_eq!(state.total_pages(), 3);
        state.replace_page(Vec::new(), 0);
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn upload_progress_roundtrip() {
        let state = FileState::new();
        assert!(state.upload_progress().is_none());
        state.set_upload_progress(Some(UploadProgress {
            loaded: 50.0,
            total: 100.0,
            progress: 50,
        }));
        assert_eq!(state.upload_progress().unwrap().progress, 50);
        state.set_upload_progress(None);
        assert!(state.upload_progress().is_none());
    }
}
