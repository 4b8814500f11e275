// ============================================================================
// MODELS - Estructuras compartidas con el backend
// ============================================================================

pub mod auth;
pub mod file;

pub use auth::*;
pub use file::*;
