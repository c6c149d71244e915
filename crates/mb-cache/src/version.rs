//! Tag de versión que particiona el namespace de la cache remota.
//!
//! Releases estables comparten entradas bajo `v{version}`; snapshots de
//! desarrollo (con metadata de build tras `+`) van bajo `d{base}` para que
//! formatos de resultado incompatibles nunca se mezclen.

/// Deriva el tag de cache de un string de versión.
pub fn cache_version(version: &str) -> String {
    match version.split_once('+') {
        Some((base, _)) => format!("d{base}"),
        None => format!("v{version}"),
    }
}

/// Tag de la versión de esta herramienta.
pub fn tool_cache_version() -> String {
    cache_version(env!("CARGO_PKG_VERSION"))
}
