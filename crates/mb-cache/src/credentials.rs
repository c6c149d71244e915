//! Resolución de credenciales de subida.
//!
//! La ausencia de ambas claves no es un error en sí: sólo deshabilita la
//! capacidad de publicar. Un par parcial (una clave presente, la otra no) es
//! un error de schema de configuración y se reporta nombrando la clave que
//! falta.

use crate::config::{Config, S3_ACCESS_KEY, S3_SECRET_KEY};
use crate::errors::CacheError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

pub fn resolve_upload_credentials(config: &Config) -> Result<Credentials, CacheError> {
    match (&config.s3_access_key, &config.s3_secret_key) {
        (Some(access_key), Some(secret_key)) => Ok(Credentials { access_key: access_key.clone(),
                                                                 secret_key: secret_key.clone() }),
        (Some(_), None) => Err(CacheError::MissingConfigKey(format!(
            "{S3_SECRET_KEY} (set together with {S3_ACCESS_KEY})"
        ))),
        (None, Some(_)) => Err(CacheError::MissingConfigKey(format!(
            "{S3_ACCESS_KEY} (set together with {S3_SECRET_KEY})"
        ))),
        (None, None) => Err(CacheError::MissingConfigKey(format!(
            "{S3_ACCESS_KEY} and {S3_SECRET_KEY} are both needed to upload cached results"
        ))),
    }
}

/// `true` sii la resolución de credenciales tiene éxito; usada por la CLI
/// para decidir si la subida era siquiera solicitable.
pub fn can_upload(config: &Config) -> bool {
    resolve_upload_credentials(config).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(access: Option<&str>, secret: Option<&str>) -> Config {
        Config { cache_dir: None,
                 s3_access_key: access.map(String::from),
                 s3_secret_key: secret.map(String::from) }
    }

    #[test]
    fn both_keys_present_resolve() {
        let creds = resolve_upload_credentials(&config(Some("AK"), Some("SK"))).unwrap();
        assert_eq!(creds.access_key, "AK");
        assert_eq!(creds.secret_key, "SK");
        assert!(can_upload(&config(Some("AK"), Some("SK"))));
    }

    #[test]
    fn either_key_absent_disables_upload() {
        assert!(!can_upload(&config(None, None)));
        assert!(!can_upload(&config(Some("AK"), None)));
        assert!(!can_upload(&config(None, Some("SK"))));
    }

    #[test]
    fn partial_pair_names_the_missing_key() {
        let err = resolve_upload_credentials(&config(Some("AK"), None)).unwrap_err();
        match err {
            CacheError::MissingConfigKey(msg) => assert!(msg.contains(S3_SECRET_KEY)),
            other => panic!("unexpected error: {other:?}"),
        }
        let err = resolve_upload_credentials(&config(None, Some("SK"))).unwrap_err();
        match err {
            CacheError::MissingConfigKey(msg) => assert!(msg.contains(S3_ACCESS_KEY)),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
