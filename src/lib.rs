//! menpobench-rust: fachada del harness de benchmarking.
//!
//! Reexporta las piezas de los crates del workspace que un consumidor
//! necesita para describir un run, obtener sus assets y consultar/publicar la
//! cache de experimentos:
//! - `mb-core`: identidad canónica de runs y hashing.
//! - `mb-managed`: assets gestionados y su protocolo de obtención.
//! - `mb-cache`: lookup y publicación de resultados cacheados.

pub use mb_cache::{can_upload, cache_version, tool_cache_version, CacheError, CdnExperimentStore,
                   Config, Credentials, ExperimentCache, ExperimentStore, ItemResult,
                   MemExperimentStore, RunResults, ShapeResult};
pub use mb_core::{hash_str, hash_value, to_canonical_json, Origin, PartRef, RunIdentity, RunSpec};
pub use mb_managed::{get_asset, managed_asset, AssetClass, AssetSource, CacheDirs, ManagedError,
                     UnpackedAsset, MANAGED_DATASETS, MANAGED_METHODS, MENPO_CDN_URL};
