//! Seam de almacenamiento de la cache de experimentos.
//!
//! `ExperimentStore` abstrae de dónde vienen y a dónde van los payloads
//! comprimidos: la impl CDN habla con el bucket público por HTTP, y la impl
//! in-memory sirve a los tests del orquestador sin red ni disco.

use crate::credentials::Credentials;
use crate::errors::CacheError;
use base64::prelude::{Engine, BASE64_STANDARD};
use hmac::{Hmac, Mac};
use mb_managed::{download_if_needed, AssetSource, CacheDirs, ManagedError};
use sha1::Sha1;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;

/// Bucket y endpoint regional de subida. Las lecturas van por la URL pública
/// del CDN (ver `mb_managed::MENPO_CDN_URL`).
const S3_BUCKET: &str = "cdn.menpo.org";
const S3_ENDPOINT: &str = "s3-eu-west-1.amazonaws.com";

pub trait ExperimentStore {
    /// Trae el payload gzip de la entrada `{version}/{hash}`, o `None` si la
    /// entrada no existe (miss).
    fn fetch(&self, version: &str, hash: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Publica el payload gzip bajo `{version}/{hash}`. Sobrescribe cualquier
    /// entrada previa (last writer wins).
    fn upload(&self,
              version: &str,
              hash: &str,
              gz_bytes: &[u8],
              creds: &Credentials)
              -> Result<(), CacheError>;
}

/// Store respaldado por el CDN de Menpo. Los fetches reutilizan el protocolo
/// de assets gestionados, así las entradas traídas quedan cacheadas en disco.
#[derive(Debug, Clone)]
pub struct CdnExperimentStore {
    dirs: CacheDirs,
}

impl CdnExperimentStore {
    pub fn new(dirs: CacheDirs) -> Self {
        Self { dirs }
    }
}

impl ExperimentStore for CdnExperimentStore {
    fn fetch(&self, version: &str, hash: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entry = AssetSource::experiment_entry(version, hash);
        match download_if_needed(&self.dirs, &entry) {
            Ok(path) => Ok(Some(fs::read(path).map_err(ManagedError::Io)?)),
            Err(ManagedError::AssetNotAvailable { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn upload(&self,
              version: &str,
              hash: &str,
              gz_bytes: &[u8],
              creds: &Credentials)
              -> Result<(), CacheError> {
        let key = format!("experiments/{version}/{hash}.json.gz");
        let date = chrono::Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let content_type = "application/gzip";

        // Firma AWS V2: la única que el bucket legacy acepta para PUTs.
        let string_to_sign = format!("PUT\n\n{content_type}\n{date}\n/{S3_BUCKET}/{key}");
        let mut mac = Hmac::<Sha1>::new_from_slice(creds.secret_key.as_bytes())
            .map_err(|err| CacheError::Http(format!("invalid secret key: {err}")))?;
        mac.update(string_to_sign.as_bytes());
        let signature = BASE64_STANDARD.encode(mac.finalize().into_bytes());

        let url = format!("https://{S3_BUCKET}.{S3_ENDPOINT}/{key}");
        log::info!("uploading cached experiment '{hash}' ({} bytes gz)", gz_bytes.len());
        let response = reqwest::blocking::Client::new()
            .put(&url)
            .header("Date", &date)
            .header("Content-Type", content_type)
            .header("Authorization",
                    format!("AWS {}:{signature}", creds.access_key))
            .body(gz_bytes.to_vec())
            .send()
            .map_err(|err| CacheError::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(CacheError::Http(format!("upload of '{key}' failed with status {}",
                                                response.status())));
        }
        Ok(())
    }
}

/// Store in-memory para tests: un mapa (version, hash) → payload gzip.
#[derive(Debug, Default)]
pub struct MemExperimentStore {
    entries: RefCell<BTreeMap<(String, String), Vec<u8>>>,
}

impl MemExperimentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Siembra una entrada con bytes gzip ya formados.
    pub fn seed(&self, version: &str, hash: &str, gz_bytes: Vec<u8>) {
        self.entries
            .borrow_mut()
            .insert((version.to_string(), hash.to_string()), gz_bytes);
    }
}

impl ExperimentStore for MemExperimentStore {
    fn fetch(&self, version: &str, hash: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries
               .borrow()
               .get(&(version.to_string(), hash.to_string()))
               .cloned())
    }

    fn upload(&self,
              version: &str,
              hash: &str,
              gz_bytes: &[u8],
              _creds: &Credentials)
              -> Result<(), CacheError> {
        self.seed(version, hash, gz_bytes.to_vec());
        Ok(())
    }
}
