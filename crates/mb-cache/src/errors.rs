//! Errores de la capa de cache de experimentos.

use mb_managed::ManagedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    /// Clave de configuración ausente o par de credenciales parcial. El
    /// mensaje nombra exactamente qué falta.
    #[error("missing config key: {0}")]
    MissingConfigKey(String),

    /// Publicación solicitada sin credenciales válidas; falla antes de tocar
    /// la red.
    #[error("upload credentials are not configured - cannot publish cached results")]
    PublishUnauthorized,

    #[error(transparent)]
    Managed(#[from] ManagedError),

    /// Payload remoto presente pero malformado (gzip o JSON inválido).
    #[error("malformed cached payload: {0}")]
    Payload(String),

    #[error("http error: {0}")]
    Http(String),
}

impl From<std::io::Error> for CacheError {
    fn from(err: std::io::Error) -> Self {
        Self::Managed(ManagedError::Io(err))
    }
}
