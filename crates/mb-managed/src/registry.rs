//! Registry estático de assets gestionados.
//!
//! Las tablas se construyen una sola vez; dos entradas con el mismo nombre
//! dentro de una clase son un error fatal de registración (panic), no un
//! error de runtime: indican un bug en esta lista, no una condición del
//! entorno.
//!
//! Para publicar un nuevo asset gestionado en el CDN:
//! 1. preparar la carpeta del asset (nombre único, snake_case),
//! 2. `tar -zcvf nombre.tar.gz ./nombre/`,
//! 3. registrar el SHA-1 del archive (`shasum nombre.tar.gz`),
//! 4. subir el archive al CDN y añadir la entrada a la lista de abajo.

use crate::errors::ManagedError;
use crate::source::{AssetClass, AssetSource};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

fn build_registry(entries: Vec<AssetSource>) -> BTreeMap<String, AssetSource> {
    let mut map = BTreeMap::new();
    for entry in entries {
        let name = entry.name().to_string();
        if map.insert(name.clone(), entry).is_some() {
            panic!("two managed assets share the name '{name}'");
        }
    }
    map
}

/// Datasets gestionados que menpobench conoce.
pub static MANAGED_DATASETS: Lazy<BTreeMap<String, AssetSource>> = Lazy::new(|| {
    build_registry(vec![AssetSource::cdn_dataset("lfpw",
                                                 "5859560f8fc7de412d44619aeaba1d1287e5ede6")])
});

/// Métodos gestionados (código de terceros empaquetado).
pub static MANAGED_METHODS: Lazy<BTreeMap<String, AssetSource>> = Lazy::new(|| {
    build_registry(vec![AssetSource::new(
        AssetClass::Method,
        "yzt_iccv_2013",
        "http://uk.mathworks.com/matlabcentral/fileexchange/downloads/19680/akamai/tzimiro_ICCV2013_code.zip",
        Some("29bc28a684c25c4f008d79b35543ba04".to_string()),
    )])
});

/// Busca un asset por nombre en una tabla.
pub fn get_asset<'a>(set: &'a BTreeMap<String, AssetSource>,
                     name: &str)
                     -> Result<&'a AssetSource, ManagedError> {
    set.get(name)
       .ok_or_else(|| ManagedError::UnknownAsset { name: name.to_string() })
}
