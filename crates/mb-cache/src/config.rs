//! Carga de configuración de usuario desde variables de entorno.
//! Usa `.env` vía dotenvy (cargado una sola vez) y lookups explícitos.

use crate::errors::CacheError;
use dotenvy::dotenv;
use mb_managed::CacheDirs;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Clave del directorio raíz de la cache local. Requerida para cualquier
/// operación de cache.
pub const CACHE_DIR_KEY: &str = "MENPOBENCH_CACHE_DIR";
/// Claves del par de credenciales de subida al CDN. Requeridas sólo para
/// publicar; se mantienen los nombres originales por interoperabilidad.
pub const S3_ACCESS_KEY: &str = "MENPO_CDN_S3_ACCESS_KEY";
pub const S3_SECRET_KEY: &str = "MENPO_CDN_S3_SECRET_KEY";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub cache_dir: Option<PathBuf>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self { cache_dir: env::var(CACHE_DIR_KEY).ok().map(PathBuf::from),
               s3_access_key: env::var(S3_ACCESS_KEY).ok(),
               s3_secret_key: env::var(S3_SECRET_KEY).ok() }
    }

    /// Directorio de cache como contexto explícito; su ausencia es fatal para
    /// la operación que lo requiere, no para el resto del run.
    pub fn resolve_cache_dir(&self) -> Result<CacheDirs, CacheError> {
        self.cache_dir
            .clone()
            .map(CacheDirs::new)
            .ok_or_else(|| CacheError::MissingConfigKey(CACHE_DIR_KEY.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cache_dir_names_the_key() {
        let config = Config::default();
        let err = config.resolve_cache_dir().unwrap_err();
        match err {
            CacheError::MissingConfigKey(key) => assert_eq!(key, CACHE_DIR_KEY),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cache_dir_resolves_to_the_configured_root() {
        let config = Config { cache_dir: Some(PathBuf::from("/var/mb")),
                              ..Config::default() };
        let dirs = config.resolve_cache_dir().unwrap();
        assert_eq!(dirs.root(), std::path::Path::new("/var/mb"));
    }
}
