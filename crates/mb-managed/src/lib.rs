//! mb-managed: assets gestionados (datasets, métodos, entradas de cache de
//! experimentos) y su protocolo de obtención.
//!
//! Un asset gestionado es un artefacto remoto con nombre, URL y checksum
//! esperado. El protocolo `download_if_needed`/`managed_asset` lo descarga si
//! hace falta, valida su integridad con un único reintento acotado, lo
//! desempaqueta y garantiza la limpieza de la copia desempaquetada.
//!
//! Módulos:
//! - `checksum`: SHA-1 por bloques de archivos en disco.
//! - `archive`: extracción por cadena de sufijos (`.tar.gz`, `.zip`).
//! - `download`: descarga bloqueante (http/https y `file://`).
//! - `source`: descripción inmutable de un asset remoto.
//! - `context`: directorios de cache locales, como objeto explícito.
//! - `retrieve`: la máquina de estados de obtención.
//! - `registry`: tablas estáticas de datasets/métodos gestionados.

pub mod archive;
pub mod checksum;
pub mod context;
pub mod download;
pub mod errors;
pub mod registry;
pub mod retrieve;
pub mod source;

pub use archive::extract;
pub use checksum::checksum;
pub use context::CacheDirs;
pub use errors::ManagedError;
pub use registry::{get_asset, MANAGED_DATASETS, MANAGED_METHODS};
pub use retrieve::{download_if_needed, managed_asset, UnpackedAsset};
pub use source::{AssetClass, AssetSource, MENPO_CDN_URL};
