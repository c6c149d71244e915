//! Descarga bloqueante de un asset a una ruta local.
//!
//! La escritura es streamed pero no atómica: un crash a mitad de descarga
//! deja un archivo parcial que la pasada de checksum del siguiente run
//! detecta y repara.

use crate::errors::ManagedError;
use std::fs::File;
use std::io;
use std::path::Path;
use url::Url;

/// Descarga `url` a `dest`. Soporta http/https y `file://` (usado por los
/// tests y por mirrors locales).
pub fn download(url: &str, dest: &Path) -> Result<(), ManagedError> {
    let parsed = Url::parse(url).map_err(|e| ManagedError::Http(format!("invalid url '{url}': {e}")))?;
    match parsed.scheme() {
        "file" => {
            let src = parsed.to_file_path()
                            .map_err(|_| ManagedError::Http(format!("invalid host for file:// url '{url}'")))?;
            std::fs::copy(&src, dest)?;
            Ok(())
        }
        _ => {
            log::info!("downloading {url}");
            let mut resp = reqwest::blocking::get(parsed).map_err(|e| ManagedError::Http(e.to_string()))?;
            if !resp.status().is_success() {
                return Err(ManagedError::Http(format!("GET {url} returned {}", resp.status())));
            }
            let mut out = File::create(dest)?;
            io::copy(&mut resp, &mut out)?;
            Ok(())
        }
    }
}
