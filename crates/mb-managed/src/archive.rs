//! Extracción de archivos por cadena de sufijos.
//!
//! El despacho se hace sobre la cadena completa de sufijos (`.tar.gz`, no
//! `.gz`), igual que la derivación del nombre local del archivo descargado.
//! La extracción es idempotente desde la perspectiva del caller porque éste
//! siempre limpia el destino antes (ver `retrieve::managed_asset`).

use crate::errors::ManagedError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Cadena completa de sufijos de un nombre de archivo: "lfpw.tar.gz" →
/// ".tar.gz", "code.zip" → ".zip", "README" → "".
pub(crate) fn suffix_chain(path: &Path) -> String {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy().into_owned(),
        None => return String::new(),
    };
    if name.len() < 2 {
        return String::new();
    }
    // el primer carácter no cuenta: un nombre ".hidden" no tiene sufijo
    match name[1..].find('.') {
        Some(i) => name[i + 1..].to_string(),
        None => String::new(),
    }
}

/// Extrae `path` dentro de `dest_dir`, eligiendo el formato por sufijo.
pub fn extract(path: &Path, dest_dir: &Path) -> Result<(), ManagedError> {
    match suffix_chain(path).as_str() {
        ".tar.gz" => extract_tar_gz(path, dest_dir),
        ".zip" => extract_zip(path, dest_dir),
        suffix => Err(ManagedError::UnsupportedArchive { path: path.to_path_buf(),
                                                         suffix: suffix.to_string() }),
    }
}

fn extract_tar_gz(path: &Path, dest_dir: &Path) -> Result<(), ManagedError> {
    let file = File::open(path)?;
    let gz = GzDecoder::new(BufReader::new(file));
    let mut archive = tar::Archive::new(gz);
    archive.unpack(dest_dir)?;
    Ok(())
}

fn extract_zip(path: &Path, dest_dir: &Path) -> Result<(), ManagedError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(zip_to_io)?;
    archive.extract(dest_dir).map_err(zip_to_io)?;
    Ok(())
}

fn zip_to_io(err: zip::result::ZipError) -> ManagedError {
    ManagedError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}
