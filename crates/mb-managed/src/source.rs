//! Descripción inmutable de un asset remoto.
//!
//! Un `AssetSource` nombra un artefacto descargable con su URL y checksum
//! esperado. Las rutas locales (`archive_path`, `unpacked_path`) son
//! derivadas, nunca almacenadas. Las entradas de cache de experimentos no
//! tienen checksum conocido de antemano: su nombre ya codifica un hash.

use crate::archive::suffix_chain;
use crate::context::CacheDirs;
use std::path::{Path, PathBuf};
use url::Url;

/// URL raíz del CDN de Menpo para assets gestionados.
pub const MENPO_CDN_URL: &str = "http://cdn.menpo.org.s3.amazonaws.com/";

/// Clase del asset; determina la política de directorios locales y si un
/// fallo de red es recuperable como cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    Dataset,
    Method,
    Experiment,
}

#[derive(Debug, Clone)]
pub struct AssetSource {
    class: AssetClass,
    name: String,
    url: String,
    expected_sha1: Option<String>,
    /// Sólo para la clase Experiment: versión de cache que particiona el
    /// directorio local y la clave remota.
    version: Option<String>,
}

impl AssetSource {
    pub fn new(class: AssetClass,
               name: impl Into<String>,
               url: impl Into<String>,
               expected_sha1: Option<String>)
               -> Self {
        Self { class,
               name: name.into(),
               url: url.into(),
               expected_sha1,
               version: None }
    }

    /// Dataset publicado en el CDN de Menpo (siempre `.tar.gz`).
    pub fn cdn_dataset(name: &str, sha1: &str) -> Self {
        Self::new(AssetClass::Dataset,
                  name,
                  format!("{MENPO_CDN_URL}{name}.tar.gz"),
                  Some(sha1.to_string()))
    }

    /// Método publicado en el CDN de Menpo (siempre `.tar.gz`).
    pub fn cdn_method(name: &str, sha1: &str) -> Self {
        Self::new(AssetClass::Method,
                  name,
                  format!("{MENPO_CDN_URL}methods/{name}.tar.gz"),
                  Some(sha1.to_string()))
    }

    /// Entrada de la cache de experimentos: `{version}/{hash}.json.gz`.
    /// Sin checksum esperado - el nombre ya es un hash del contenido lógico.
    pub fn experiment_entry(version: &str, hash: &str) -> Self {
        Self { class: AssetClass::Experiment,
               name: hash.to_string(),
               url: format!("{MENPO_CDN_URL}experiments/{version}/{hash}.json.gz"),
               expected_sha1: None,
               version: Some(version.to_string()) }
    }

    pub fn class(&self) -> AssetClass {
        self.class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn expected_sha1(&self) -> Option<&str> {
        self.expected_sha1.as_deref()
    }

    /// Cadena de sufijos del path de la URL ("...lfpw.tar.gz" → ".tar.gz").
    pub fn archive_suffix(&self) -> String {
        match Url::parse(&self.url) {
            Ok(u) => suffix_chain(Path::new(u.path())),
            Err(_) => String::new(),
        }
    }

    fn dlcache_dir(&self, dirs: &CacheDirs) -> PathBuf {
        match self.class {
            AssetClass::Dataset => dirs.dataset_dlcache(),
            AssetClass::Method => dirs.method_dlcache(),
            AssetClass::Experiment => {
                dirs.experiment_cache(self.version.as_deref().unwrap_or("unversioned"))
            }
        }
    }

    fn unpack_dir(&self, dirs: &CacheDirs) -> PathBuf {
        match self.class {
            AssetClass::Dataset => dirs.dataset_unpacked(),
            AssetClass::Method => dirs.method_unpacked(),
            // las entradas de experimentos nunca se desempaquetan
            AssetClass::Experiment => dirs.experiment_cache(self.version
                                                                .as_deref()
                                                                .unwrap_or("unversioned")),
        }
    }

    /// Ruta local determinista del archivo descargado.
    pub fn archive_path(&self, dirs: &CacheDirs) -> PathBuf {
        self.dlcache_dir(dirs)
            .join(format!("{}{}", self.name, self.archive_suffix()))
    }

    /// Ruta local determinista de la copia desempaquetada.
    pub fn unpacked_path(&self, dirs: &CacheDirs) -> PathBuf {
        self.unpack_dir(dirs).join(&self.name)
    }

    /// Directorio donde se extrae el archivo (el padre de `unpacked_path`:
    /// los archives contienen su propia carpeta de primer nivel).
    pub fn unpack_root(&self, dirs: &CacheDirs) -> PathBuf {
        self.unpack_dir(dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdn_dataset_paths_follow_the_layout() {
        let dirs = CacheDirs::new("/cache");
        let src = AssetSource::cdn_dataset("lfpw", "5859560f8fc7de412d44619aeaba1d1287e5ede6");
        assert_eq!(src.archive_suffix(), ".tar.gz");
        assert_eq!(src.archive_path(&dirs),
                   PathBuf::from("/cache/datasets/dlcache/lfpw.tar.gz"));
        assert_eq!(src.unpacked_path(&dirs),
                   PathBuf::from("/cache/datasets/unpacked/lfpw"));
    }

    #[test]
    fn experiment_entry_is_versioned_and_unchecksummed() {
        let dirs = CacheDirs::new("/cache");
        let src = AssetSource::experiment_entry("v0.1.0", "abc123");
        assert!(src.expected_sha1().is_none());
        assert_eq!(src.url(),
                   "http://cdn.menpo.org.s3.amazonaws.com/experiments/v0.1.0/abc123.json.gz");
        assert_eq!(src.archive_path(&dirs),
                   PathBuf::from("/cache/experiments/v0.1.0/abc123.json.gz"));
    }

    #[test]
    fn zip_method_keeps_its_suffix() {
        let dirs = CacheDirs::new("/cache");
        let src = AssetSource::new(AssetClass::Method,
                                   "yzt_iccv_2013",
                                   "http://example.org/files/tzimiro_ICCV2013_code.zip",
                                   None);
        assert_eq!(src.archive_path(&dirs),
                   PathBuf::from("/cache/methods/dlcache/yzt_iccv_2013.zip"));
    }
}
