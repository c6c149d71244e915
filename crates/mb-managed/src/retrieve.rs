//! Protocolo de obtención de assets gestionados.
//!
//! Máquina de estados por asset: descargar si falta, validar checksum con un
//! único reintento acotado, desempaquetar sobre destino limpio y devolver la
//! copia desempaquetada como recurso con limpieza garantizada.
//!
//! El límite de reintentos es un loop explícito (máximo una re-descarga tras
//! un mismatch), no una propiedad emergente de recursión: un objeto remoto
//! permanentemente corrupto falla con `ChecksumValidation` en vez de ciclar.

use crate::archive::extract;
use crate::checksum::checksum;
use crate::context::CacheDirs;
use crate::download::download;
use crate::errors::ManagedError;
use crate::source::{AssetClass, AssetSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Fallos de validación permitidos antes de abortar (1 inicial + 1 reintento).
const MAX_CHECKSUM_FAILURES: u32 = 2;

/// Garantiza que el archive del asset está en disco y validado, y devuelve su
/// ruta local. No desempaqueta: las entradas de la cache de experimentos se
/// consumen directamente como archivo.
pub fn download_if_needed(dirs: &CacheDirs, asset: &AssetSource) -> Result<PathBuf, ManagedError> {
    let archive = asset.archive_path(dirs);
    if let Some(parent) = archive.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut failures = 0u32;
    loop {
        if !archive.is_file() {
            log::info!("'{}' is not cached - downloading", asset.name());
            if let Err(err) = download(asset.url(), &archive) {
                return Err(translate_fetch_failure(asset, err));
            }
        }

        let expected = match asset.expected_sha1() {
            // Sin checksum conocido (cache de experimentos): la presencia del
            // archivo es el éxito.
            None => return Ok(archive),
            Some(expected) => expected,
        };

        let actual = checksum(&archive)?;
        if actual == expected {
            return Ok(archive);
        }

        failures += 1;
        fs::remove_file(&archive)?;
        if failures >= MAX_CHECKSUM_FAILURES {
            return Err(ManagedError::ChecksumValidation { name: asset.name().to_string(),
                                                          expected: expected.to_string(),
                                                          actual });
        }
        log::warn!("cached archive for '{}' failed checksum - clearing and re-downloading",
                   asset.name());
    }
}

/// Un fallo de descarga sólo es recuperable como miss para la clase
/// Experiment; para datasets/métodos no hay fallback y el error es fatal.
fn translate_fetch_failure(asset: &AssetSource, err: ManagedError) -> ManagedError {
    if asset.class() == AssetClass::Experiment {
        log::debug!("experiment cache fetch failed for '{}': {err}", asset.name());
        ManagedError::AssetNotAvailable { name: asset.name().to_string() }
    } else {
        err
    }
}

/// Copia desempaquetada con limpieza garantizada: se borra al soltar el
/// guard, salvo que el caller opte por conservarla con [`UnpackedAsset::keep`]
/// (p.ej. un método que escribe un artefacto de entrenamiento junto al código
/// descargado).
#[derive(Debug)]
pub struct UnpackedAsset {
    path: PathBuf,
    keep: bool,
}

impl UnpackedAsset {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renuncia a la limpieza y devuelve la ruta persistente.
    pub fn keep(mut self) -> PathBuf {
        self.keep = true;
        self.path.clone()
    }
}

impl Drop for UnpackedAsset {
    fn drop(&mut self) {
        if !self.keep {
            if let Err(err) = fs::remove_dir_all(&self.path) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("failed to clean up unpacked asset at {}: {err}",
                               self.path.display());
                }
            }
        }
    }
}

/// Obtiene, valida y desempaqueta un asset, limpiando cualquier copia
/// desempaquetada previa antes de extraer.
pub fn managed_asset(dirs: &CacheDirs, asset: &AssetSource) -> Result<UnpackedAsset, ManagedError> {
    let archive = download_if_needed(dirs, asset)?;

    let unpacked = asset.unpacked_path(dirs);
    if unpacked.is_dir() {
        fs::remove_dir_all(&unpacked)?;
    }
    let unpack_root = asset.unpack_root(dirs);
    fs::create_dir_all(&unpack_root)?;

    log::info!("unpacking cached asset '{}'", asset.name());
    extract(&archive, &unpack_root)?;
    Ok(UnpackedAsset { path: unpacked,
                       keep: false })
}
