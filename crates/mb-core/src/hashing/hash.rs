//! Ayudantes de hash. El algoritmo queda aislado en este módulo: el namespace
//! de la cache remota existente está direccionado por SHA-1, así que migrar a
//! otro digest implica un plan de migración del namespace completo.

use crate::hashing::to_canonical_json;
use serde_json::Value;
use sha1::{Digest, Sha1};
use std::fmt::Write;

/// Hex en minúsculas de un slice de bytes.
pub fn hex_digest(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// Hashea un string y devuelve hex (40 caracteres).
pub fn hash_str(input: &str) -> String {
    let mut h = Sha1::new();
    h.update(input.as_bytes());
    hex_digest(&h.finalize())
}

/// Hashea la forma canónica de un valor JSON.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hash_str_matches_known_sha1_vectors() {
        // Vectores conocidos de SHA-1.
        assert_eq!(hash_str(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(
            hash_str("The quick brown fox jumps over the lazy dog"),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );
    }

    #[test]
    fn hash_value_is_insensitive_to_key_order() {
        let h1 = hash_value(&json!({"b": 2, "a": 1}));
        let h2 = hash_value(&json!({"a": 1, "b": 2}));
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 40);
    }

    #[test]
    fn hash_value_is_sensitive_to_sequence_order() {
        let h1 = hash_value(&json!({"steps": ["a", "b"]}));
        let h2 = hash_value(&json!({"steps": ["b", "a"]}));
        assert_ne!(h1, h2);
    }
}
