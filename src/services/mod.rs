// ============================================================================
// SERVICES - SOLO comunicación HTTP y persistencia (stateless)
// ============================================================================

pub mod api_client;
pub mod auth_service;
pub mod download;
pub mod upload_service;

pub use api_client::{ApiClient, ApiError};
pub use auth_service::*;
pub use download::*;
pub use upload_service::*;
