//! Orquestador de la cache de experimentos.
//!
//! Dada la identidad de un run, `ExperimentCache` resuelve la clave
//! (hash SHA-1 del JSON canónico), consulta el store y decodifica el payload,
//! o publica resultados nuevos bajo la misma clave. Un miss devuelve
//! `Ok(None)` y nunca un error: es el camino que dispara la computación.

use crate::config::Config;
use crate::credentials::resolve_upload_credentials;
use crate::errors::CacheError;
use crate::store::ExperimentStore;
use crate::version::tool_cache_version;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use mb_core::RunIdentity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};

/// Forma alineada de un item: la forma final ajustada y, si el método la
/// reporta, la inicialización desde la que partió.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeResult {
    #[serde(rename = "final")]
    pub final_shape: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<Vec<Vec<f64>>>,
}

/// Resultado por item de test: ground truth + forma ajustada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResult {
    pub gt: Vec<Vec<f64>>,
    pub result: ShapeResult,
}

/// Payload completo de un run, indexado por identificador de item. BTreeMap
/// para que la serialización sea estable entre ejecuciones.
pub type RunResults = BTreeMap<String, ItemResult>;

pub struct ExperimentCache<S: ExperimentStore> {
    store: S,
    version: String,
}

impl<S: ExperimentStore> ExperimentCache<S> {
    /// Cache bajo el namespace de la versión de esta herramienta.
    pub fn new(store: S) -> Self {
        Self::with_version(store, tool_cache_version())
    }

    /// Cache bajo un tag de versión explícito (tests, herramientas de
    /// migración).
    pub fn with_version(store: S, version: impl Into<String>) -> Self {
        Self { store,
               version: version.into() }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Busca resultados ya computados para la identidad dada. `Ok(None)` es
    /// un miss; un payload presente pero malformado sí es un error.
    pub fn try_retrieve(&self, identity: &RunIdentity) -> Result<Option<RunResults>, CacheError> {
        let hash = identity.hash();
        match self.store.fetch(&self.version, &hash)? {
            None => {
                log::info!("no cached result for run {} - it will be computed",
                           identity.short_hash());
                Ok(None)
            }
            Some(gz_bytes) => {
                log::info!("cached result found for run {}", identity.short_hash());
                let mut json = Vec::new();
                GzDecoder::new(gz_bytes.as_slice())
                    .read_to_end(&mut json)
                    .map_err(|err| CacheError::Payload(format!("gzip decode failed: {err}")))?;
                let results = serde_json::from_slice(&json)
                    .map_err(|err| CacheError::Payload(format!("json decode failed: {err}")))?;
                Ok(Some(results))
            }
        }
    }

    /// Publica los resultados de un run bajo su clave de identidad. Las
    /// credenciales se resuelven antes de serializar nada: sin par completo,
    /// la operación falla con `PublishUnauthorized` y el store no se toca.
    pub fn publish(&self,
                   config: &Config,
                   identity: &RunIdentity,
                   results: &RunResults)
                   -> Result<(), CacheError> {
        let creds = resolve_upload_credentials(config).map_err(|err| {
                        log::warn!("cannot publish run {}: {err}", identity.short_hash());
                        CacheError::PublishUnauthorized
                    })?;

        let json = serde_json::to_vec(results)
            .map_err(|err| CacheError::Payload(format!("json encode failed: {err}")))?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json)
               .map_err(|err| CacheError::Payload(format!("gzip encode failed: {err}")))?;
        let gz_bytes = encoder.finish()
                              .map_err(|err| CacheError::Payload(format!("gzip encode failed: {err}")))?;

        self.store.upload(&self.version, &identity.hash(), &gz_bytes, &creds)
    }
}
