//! Plan de run y cacheabilidad.
//!
//! Cada componente de un run (método, datasets, pasos de landmark-processing)
//! puede ser `Predefined` (residente en el registry, identificado por nombre)
//! o `AdHoc` (una ruta suministrada por el usuario). Un run es cacheable sólo
//! si *todos* sus componentes son predefined: la conjunción completa, porque
//! una ruta ad hoc no tiene identidad estable entre máquinas.

use crate::identity::RunIdentity;
use std::path::{Path, PathBuf};

/// Procedencia de un componente del run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Residente en el registry, direccionado por nombre.
    Predefined,
    /// Ruta ad hoc suministrada por el usuario.
    AdHoc(PathBuf),
}

/// Referencia con nombre a un componente del run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRef {
    pub name: String,
    pub origin: Origin,
}

impl PartRef {
    pub fn predefined(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               origin: Origin::Predefined }
    }

    pub fn ad_hoc(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.file_stem()
                       .map(|s| s.to_string_lossy().into_owned())
                       .unwrap_or_default();
        Self { name,
               origin: Origin::AdHoc(path) }
    }

    /// Interpreta un string de configuración: algo con pinta de ruta
    /// (sufijo de módulo/config o separador de directorios) es ad hoc.
    pub fn parse(spec: &str) -> Self {
        let looks_like_path = spec.ends_with(".py")
                              || spec.ends_with(".yaml")
                              || spec.ends_with(".yml")
                              || spec.contains(std::path::MAIN_SEPARATOR)
                              || spec.contains('/');
        if looks_like_path {
            Self::ad_hoc(Path::new(spec))
        } else {
            Self::predefined(spec)
        }
    }

    pub fn is_predefined(&self) -> bool {
        matches!(self.origin, Origin::Predefined)
    }
}

/// Descripción completa de un run método/datasets, previa a la identidad.
#[derive(Debug, Clone)]
pub struct RunSpec {
    pub method: PartRef,
    pub training_data: Option<Vec<PartRef>>,
    pub testing_data: Vec<PartRef>,
    pub lm_pre_train: Option<Vec<PartRef>>,
    pub lm_pre_test: Vec<PartRef>,
    pub lm_post_test: Vec<PartRef>,
}

impl RunSpec {
    pub fn trainable(method: PartRef,
                     training_data: Vec<PartRef>,
                     testing_data: Vec<PartRef>,
                     lm_pre_train: Vec<PartRef>,
                     lm_pre_test: Vec<PartRef>,
                     lm_post_test: Vec<PartRef>)
                     -> Self {
        Self { method,
               training_data: Some(training_data),
               testing_data,
               lm_pre_train: Some(lm_pre_train),
               lm_pre_test,
               lm_post_test }
    }

    pub fn untrainable(method: PartRef,
                       testing_data: Vec<PartRef>,
                       lm_pre_test: Vec<PartRef>,
                       lm_post_test: Vec<PartRef>)
                       -> Self {
        Self { method,
               training_data: None,
               testing_data,
               lm_pre_train: None,
               lm_pre_test,
               lm_post_test }
    }

    fn parts(&self) -> impl Iterator<Item = &PartRef> {
        std::iter::once(&self.method).chain(self.training_data.iter().flatten())
                                     .chain(self.testing_data.iter())
                                     .chain(self.lm_pre_train.iter().flatten())
                                     .chain(self.lm_pre_test.iter())
                                     .chain(self.lm_post_test.iter())
    }

    /// Conjunción: cacheable sii cada componente es predefined.
    pub fn is_cacheable(&self) -> bool {
        self.parts().all(PartRef::is_predefined)
    }

    /// Identidad canónica del run, sólo si es cacheable.
    pub fn identity(&self) -> Option<RunIdentity> {
        if !self.is_cacheable() {
            return None;
        }
        let names = |parts: &[PartRef]| parts.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        Some(RunIdentity { method: self.method.name.clone(),
                           training_data: self.training_data.as_deref().map(names),
                           testing_data: names(&self.testing_data),
                           lm_pre_train: self.lm_pre_train.as_deref().map(names),
                           lm_pre_test: names(&self.lm_pre_test),
                           lm_post_test: names(&self.lm_post_test) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_predefined() -> RunSpec {
        RunSpec::trainable(PartRef::predefined("sdm"),
                           vec![PartRef::predefined("lfpw")],
                           vec![PartRef::predefined("lfpw_test")],
                           vec![],
                           vec![PartRef::predefined("crop")],
                           vec![PartRef::predefined("to_68")])
    }

    #[test]
    fn fully_predefined_run_is_cacheable() {
        let spec = all_predefined();
        assert!(spec.is_cacheable());
        assert!(spec.identity().is_some());
    }

    #[test]
    fn any_ad_hoc_part_makes_the_run_uncacheable() {
        // Cambiar un único componente a ad hoc voltea la conjunción completa.
        let mut m = all_predefined();
        m.method = PartRef::ad_hoc("/tmp/my_method.py");
        assert!(!m.is_cacheable());
        assert!(m.identity().is_none());

        let mut d = all_predefined();
        d.testing_data[0] = PartRef::ad_hoc("/tmp/faces.py");
        assert!(!d.is_cacheable());

        let mut t = all_predefined();
        t.training_data.as_mut().unwrap()[0] = PartRef::ad_hoc("/tmp/train.py");
        assert!(!t.is_cacheable());

        let mut l = all_predefined();
        l.lm_post_test[0] = PartRef::ad_hoc("/tmp/to_68.py");
        assert!(!l.is_cacheable());
    }

    #[test]
    fn parse_distinguishes_names_from_paths() {
        assert!(PartRef::parse("lfpw").is_predefined());
        assert!(!PartRef::parse("my_dataset.py").is_predefined());
        assert!(!PartRef::parse("conf/exp.yaml").is_predefined());
        assert_eq!(PartRef::parse("dir/my_method.py").name, "my_method");
    }

    #[test]
    fn identity_preserves_step_order() {
        let spec = RunSpec::untrainable(PartRef::predefined("sdm"),
                                        vec![PartRef::predefined("lfpw")],
                                        vec![PartRef::predefined("crop"),
                                             PartRef::predefined("flip")],
                                        vec![]);
        let id = spec.identity().unwrap();
        assert_eq!(id.lm_pre_test, vec!["crop".to_string(), "flip".to_string()]);
    }
}
