//! Directorios de cache locales como objeto de contexto explícito.
//!
//! En lugar de estado global memoizado, el caller construye un `CacheDirs`
//! con la raíz configurada y lo pasa a cada operación que necesita disco.
//! Los directorios son process-local y single-writer: correr dos procesos
//! contra la misma raíz no está soportado (no hay file locking).

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CacheDirs {
    root: PathBuf,
}

impl CacheDirs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `datasets/dlcache` - archives de datasets descargados.
    pub fn dataset_dlcache(&self) -> PathBuf {
        self.root.join("datasets").join("dlcache")
    }

    /// `datasets/unpacked` - destino transitorio de desempaquetado.
    pub fn dataset_unpacked(&self) -> PathBuf {
        self.root.join("datasets").join("unpacked")
    }

    /// `methods/dlcache` - archives de métodos descargados.
    pub fn method_dlcache(&self) -> PathBuf {
        self.root.join("methods").join("dlcache")
    }

    /// `methods/unpacked` - destino transitorio de desempaquetado.
    pub fn method_unpacked(&self) -> PathBuf {
        self.root.join("methods").join("unpacked")
    }

    /// `experiments/{version}` - payloads de la cache de experimentos.
    pub fn experiment_cache(&self, version: &str) -> PathBuf {
        self.root.join("experiments").join(version)
    }
}
