use thiserror::Error;

/// Ошибки загрузки каталога меню
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("HTTP {0}")]
    Http(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed JSON: {0}")]
    Json(String),

    #[error("El archivo JSON no tiene la estructura esperada")]
    InvalidShape,
}
