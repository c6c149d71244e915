//! Identidad canónica de un run cacheable.
//!
//! Un `RunIdentity` describe la computación completa: método, datasets de
//! entrenamiento/testing y las cadenas de landmark-processing aplicadas en
//! cada punto del pipeline (pre-train, pre-test, post-test). Se representa
//! sólo con primitivas (strings y secuencias de strings) para que su forma
//! canónica sea determinista byte a byte.
//!
//! Reglas de serialización:
//! - runs no entrenables omiten por completo las claves de entrenamiento
//!   (omitidas, nunca `null`), así un run entrenable y uno no entrenable del
//!   mismo método jamás coinciden;
//! - una cadena de cero pasos se serializa como `[]`, nunca se omite.

use crate::hashing::hash_value;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunIdentity {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_data: Option<Vec<String>>,
    pub testing_data: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lm_pre_train: Option<Vec<String>>,
    pub lm_pre_test: Vec<String>,
    pub lm_post_test: Vec<String>,
}

impl RunIdentity {
    /// Identidad de un método entrenable (requiere datos de entrenamiento).
    pub fn trainable(method: impl Into<String>,
                     training_data: Vec<String>,
                     testing_data: Vec<String>,
                     lm_pre_train: Vec<String>,
                     lm_pre_test: Vec<String>,
                     lm_post_test: Vec<String>)
                     -> Self {
        Self { method: method.into(),
               training_data: Some(training_data),
               testing_data,
               lm_pre_train: Some(lm_pre_train),
               lm_pre_test,
               lm_post_test }
    }

    /// Identidad de un método no entrenable (sin fase de entrenamiento).
    pub fn untrainable(method: impl Into<String>,
                       testing_data: Vec<String>,
                       lm_pre_test: Vec<String>,
                       lm_post_test: Vec<String>)
                       -> Self {
        Self { method: method.into(),
               training_data: None,
               testing_data,
               lm_pre_train: None,
               lm_pre_test,
               lm_post_test }
    }

    /// Mapping de primitivas listo para canonicalizar.
    pub fn to_value(&self) -> Value {
        // La identidad sólo contiene strings y vectores de strings.
        serde_json::to_value(self).unwrap()
    }

    /// Clave de cache: SHA-1 de la forma canónica.
    pub fn hash(&self) -> String {
        hash_value(&self.to_value())
    }

    /// Prefijo corto del hash, para logs y mensajes de la CLI.
    pub fn short_hash(&self) -> String {
        self.hash()[..5].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sdm_crop() -> RunIdentity {
        RunIdentity::untrainable("sdm",
                                 vec!["lfpw".into()],
                                 vec!["crop".into()],
                                 vec![])
    }

    #[test]
    fn identical_identities_hash_identically() {
        assert_eq!(sdm_crop().hash(), sdm_crop().hash());
    }

    #[test]
    fn step_order_changes_the_hash() {
        let a = RunIdentity::untrainable("sdm",
                                         vec!["lfpw".into()],
                                         vec!["crop".into(), "flip".into()],
                                         vec![]);
        let b = RunIdentity::untrainable("sdm",
                                         vec!["lfpw".into()],
                                         vec!["flip".into(), "crop".into()],
                                         vec![]);
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn extra_step_changes_the_hash() {
        let a = sdm_crop();
        let b = RunIdentity::untrainable("sdm",
                                         vec!["lfpw".into()],
                                         vec!["crop".into(), "flip".into()],
                                         vec![]);
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn untrainable_omits_training_keys() {
        let v = sdm_crop().to_value();
        let map = v.as_object().unwrap();
        assert!(!map.contains_key("training_data"));
        assert!(!map.contains_key("lm_pre_train"));
        // la cadena vacía sí está presente, como secuencia vacía
        assert_eq!(map["lm_post_test"], serde_json::json!([]));
    }

    #[test]
    fn trainable_and_untrainable_never_collide() {
        let t = RunIdentity::trainable("sdm",
                                       vec![],
                                       vec!["lfpw".into()],
                                       vec![],
                                       vec!["crop".into()],
                                       vec![]);
        assert_ne!(t.hash(), sdm_crop().hash());
    }

    #[test]
    fn short_hash_is_a_prefix() {
        let id = sdm_crop();
        assert!(id.hash().starts_with(&id.short_hash()));
        assert_eq!(id.short_hash().len(), 5);
    }
}
