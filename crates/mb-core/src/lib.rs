//! mb-core: identidad canónica de runs y hashing determinista.
//!
//! Este crate no hace IO: modela la identidad de un run cacheable (método +
//! cadenas de procesamiento de landmarks + datasets) y su serialización
//! canónica, de la cual se deriva la clave de cache.
pub mod hashing;
pub mod identity;
pub mod plan;

pub use hashing::{hash_str, hash_value, to_canonical_json};
pub use identity::RunIdentity;
pub use plan::{Origin, PartRef, RunSpec};
