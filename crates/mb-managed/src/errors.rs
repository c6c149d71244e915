//! Errores de la capa de assets gestionados.
//! Las capas bajas (checksum, extracción, descarga) producen errores tipados;
//! `retrieve` los traduce a esta taxonomía y ejecuta el único reintento
//! automático por checksum inválido.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagedError {
    /// El objeto remoto no existe o no es alcanzable. Recuperable como cache
    /// miss sólo para lookups de experimentos; fatal para datasets/métodos.
    #[error("asset '{name}' is not available from its remote source")]
    AssetNotAvailable { name: String },

    /// Segundo mismatch consecutivo tras el reintento único.
    #[error("archive for '{name}' failed checksum validation (expected {expected}, actual {actual})")]
    ChecksumValidation {
        name: String,
        expected: String,
        actual: String,
    },

    /// Sufijo de archivo no reconocido: bug de registración.
    #[error("unsupported archive suffix '{suffix}' for {}", path.display())]
    UnsupportedArchive { path: PathBuf, suffix: String },

    /// Nombre ausente del registry.
    #[error("'{name}' is not a managed asset")]
    UnknownAsset { name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(String),
}
