//! mb-cache: lookup y publicación de resultados de experimentos por
//! identidad de run.
//!
//! Dada la identidad canónica de un run (ver `mb-core`), este crate resuelve
//! si existe un resultado ya computado en el store remoto, lo trae validado,
//! y opcionalmente publica resultados nuevos bajo la misma clave. Un miss no
//! es un error: es el camino común que dispara la computación.
//!
//! Módulos:
//! - `config`: configuración de usuario (dotenvy + env).
//! - `credentials`: resolución del par de claves de subida.
//! - `version`: tag de versión que particiona el namespace de la cache.
//! - `store`: seam de almacenamiento (`ExperimentStore`) con impl CDN e
//!   in-memory.
//! - `cache`: el orquestador `ExperimentCache`.

pub mod cache;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod store;
pub mod version;

pub use cache::{ExperimentCache, ItemResult, RunResults, ShapeResult};
pub use config::Config;
pub use credentials::{can_upload, resolve_upload_credentials, Credentials};
pub use errors::CacheError;
pub use store::{CdnExperimentStore, ExperimentStore, MemExperimentStore};
pub use version::{cache_version, tool_cache_version};
