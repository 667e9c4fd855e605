//! In-memory trigger menu
//!
//! Registries of algorithms, cuts, objects, externals and scales, plus the
//! editing operations that keep them consistent. Snapshots load from TOML.

use crate::config::defaults;
use crate::context::MenuContext;
use crate::error::{Error, ModelError, Result};
use crate::model::{Algorithm, Cut, External, Object, Scale};
use crate::rules::AlgorithmSyntaxValidator;
use crate::types::{ObjectType, ScaleType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

fn default_max_algorithms() -> u32 {
    defaults::MAX_ALGORITHMS
}

/// A trigger menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Menu name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    algorithms: Vec<Algorithm>,
    #[serde(default)]
    cuts: Vec<Cut>,
    #[serde(default)]
    objects: Vec<Object>,
    #[serde(default)]
    externals: Vec<External>,
    #[serde(default)]
    scales: Vec<Scale>,
    #[serde(skip, default = "default_max_algorithms")]
    max_algorithms: u32,
}

/// Algorithm renamed during import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renamed {
    pub from: String,
    pub to: String,
}

/// Algorithm moved to a free index during import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relocated {
    pub name: String,
    pub from: u32,
    pub to: u32,
}

/// Outcome of [`Menu::import_algorithms`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Names of imported algorithms, after renaming
    pub imported: Vec<String>,
    pub renamed: Vec<Renamed>,
    pub relocated: Vec<Relocated>,
}

/// Validation outcome of one algorithm
#[derive(Debug, Clone)]
pub struct AlgorithmReport {
    pub index: u32,
    pub name: String,
    pub result: Result<()>,
}

impl AlgorithmReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new("")
    }
}

impl Menu {
    /// Create an empty menu
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            algorithms: Vec::new(),
            cuts: Vec::new(),
            objects: Vec::new(),
            externals: Vec::new(),
            scales: Vec::new(),
            max_algorithms: defaults::MAX_ALGORITHMS,
        }
    }

    /// Load a menu snapshot from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let menu: Menu = toml::from_str(text)
            .map_err(|e| Error::Configuration(format!("invalid menu snapshot: {e}")))?;
        menu.check_cut_values()?;
        menu.warn_duplicate_scales();
        log::info!(
            "loaded menu `{}`: {} algorithms, {} cuts, {} scales",
            menu.name,
            menu.algorithms.len(),
            menu.cuts.len(),
            menu.scales.len()
        );
        Ok(menu)
    }

    /// Load a menu snapshot from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the number of algorithm slots
    pub fn with_max_algorithms(mut self, max_algorithms: u32) -> Self {
        self.max_algorithms = max_algorithms;
        self
    }

    pub fn max_algorithms(&self) -> u32 {
        self.max_algorithms
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn externals(&self) -> &[External] {
        &self.externals
    }

    pub fn scales(&self) -> &[Scale] {
        &self.scales
    }

    /// Data cut types carry `data`, every other type a range.
    fn check_cut_values(&self) -> Result<()> {
        for cut in &self.cuts {
            let is_data = cut.cut_type.is_data();
            if is_data != cut.data_value().is_some() {
                let expected = if is_data { "data" } else { "minimum and maximum" };
                return Err(Error::Configuration(format!(
                    "cut {} of type {} requires {expected}",
                    cut.name, cut.cut_type
                )));
            }
        }
        Ok(())
    }

    fn warn_duplicate_scales(&self) {
        let mut seen = HashSet::new();
        for scale in &self.scales {
            if !seen.insert((scale.object, scale.kind)) {
                log::warn!(
                    "duplicate {} scale for {}, the first registered one is used",
                    scale.kind,
                    scale.object
                );
            }
        }
    }

    /// Register a scale. Lookups return the first scale registered for an
    /// (object, kind) pair.
    pub fn add_scale(&mut self, scale: Scale) {
        if self.scale_for(scale.object, scale.kind).is_some() {
            log::warn!(
                "duplicate {} scale for {}, the first registered one is used",
                scale.kind,
                scale.object
            );
        }
        self.scales.push(scale);
    }

    pub fn algorithm_by_name(&self, name: &str) -> Option<&Algorithm> {
        self.algorithms.iter().find(|algorithm| algorithm.name == name)
    }

    pub fn algorithm_by_index(&self, index: u32) -> Option<&Algorithm> {
        self.algorithms.iter().find(|algorithm| algorithm.index == index)
    }

    /// Free algorithm indices below the maximum, ascending
    pub fn unused_algorithm_indices(&self) -> Vec<u32> {
        let used: HashSet<u32> = self.algorithms.iter().map(|a| a.index).collect();
        (0..self.max_algorithms)
            .filter(|index| !used.contains(index))
            .collect()
    }

    /// `base` if unused, else the first unused `base_import<n>`.
    pub fn unique_algorithm_name(&self, base: &str) -> String {
        if self.algorithm_by_name(base).is_none() {
            return base.to_string();
        }
        (0..)
            .map(|n| format!("{base}_import{n}"))
            .find(|name| self.algorithm_by_name(name).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    /// Register the objects and externals an algorithm references.
    pub fn extend_referenced(&mut self, algorithm: &Algorithm) -> Result<()> {
        for object in algorithm.objects()? {
            if !self.objects.contains(&object) {
                log::debug!("registering object {object}");
                self.objects.push(object);
            }
        }
        for external in algorithm.externals()? {
            if !self.externals.contains(&external) {
                log::debug!("registering external {external}");
                self.externals.push(external);
            }
        }
        Ok(())
    }

    fn require_cuts(&self, algorithm: &Algorithm) -> Result<()> {
        for cut in algorithm.cuts()? {
            if self.cut_by_name(&cut).is_none() {
                return Err(ModelError::MissingCut {
                    cut,
                    algorithm: algorithm.name.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Add an algorithm. Name and index must be unused and every cut it
    /// references must exist.
    pub fn add_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        algorithm.validate(self.max_algorithms)?;
        if self.algorithm_by_name(&algorithm.name).is_some() {
            return Err(ModelError::DuplicateName(algorithm.name).into());
        }
        if self.algorithm_by_index(algorithm.index).is_some() {
            return Err(ModelError::DuplicateIndex(algorithm.index).into());
        }
        self.require_cuts(&algorithm)?;
        self.extend_referenced(&algorithm)?;
        log::info!("added algorithm {} : {}", algorithm.index, algorithm.name);
        self.algorithms.push(algorithm);
        Ok(())
    }

    /// Add the cuts not yet present by name; returns how many were added.
    pub fn import_cuts(&mut self, cuts: impl IntoIterator<Item = Cut>) -> usize {
        let mut added = 0;
        for cut in cuts {
            if self.cut_by_name(&cut.name).is_some() {
                log::debug!("cut {} already present, skipped", cut.name);
                continue;
            }
            self.cuts.push(cut);
            added += 1;
        }
        added
    }

    /// Import algorithms from another menu.
    ///
    /// Colliding names get an `_import<n>` suffix, colliding indices move
    /// to the first free index. An algorithm referencing an unknown cut
    /// stops the import; algorithms imported before it are kept.
    pub fn import_algorithms(
        &mut self,
        algorithms: impl IntoIterator<Item = Algorithm>,
    ) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        for mut algorithm in algorithms {
            self.require_cuts(&algorithm)?;

            let name = self.unique_algorithm_name(&algorithm.name);
            if name != algorithm.name {
                log::info!("renamed algorithm {} to {}", algorithm.name, name);
                report.renamed.push(Renamed {
                    from: std::mem::replace(&mut algorithm.name, name.clone()),
                    to: name,
                });
            }

            if self.algorithm_by_index(algorithm.index).is_some() {
                let index = self
                    .unused_algorithm_indices()
                    .first()
                    .copied()
                    .ok_or(ModelError::NoFreeIndex)?;
                log::info!(
                    "moving algorithm {} from used index {} to free index {}",
                    algorithm.name,
                    algorithm.index,
                    index
                );
                report.relocated.push(Relocated {
                    name: algorithm.name.clone(),
                    from: algorithm.index,
                    to: index,
                });
                algorithm.index = index;
            }

            report.imported.push(algorithm.name.clone());
            self.add_algorithm(algorithm)?;
        }
        Ok(report)
    }

    /// Whether any algorithm references the cut. An algorithm whose
    /// expression does not parse fails the lookup.
    pub fn cut_in_use(&self, name: &str) -> Result<bool> {
        Ok(self.first_algorithm_using(name)?.is_some())
    }

    fn first_algorithm_using(&self, name: &str) -> Result<Option<&Algorithm>> {
        for algorithm in &self.algorithms {
            if algorithm.cuts()?.iter().any(|cut| cut == name) {
                return Ok(Some(algorithm));
            }
        }
        Ok(None)
    }

    /// Remove a cut no algorithm references.
    pub fn remove_cut(&mut self, name: &str) -> Result<Cut> {
        if let Some(algorithm) = self.first_algorithm_using(name)? {
            return Err(ModelError::CutInUse {
                cut: name.to_string(),
                algorithm: algorithm.name.clone(),
            }
            .into());
        }
        let position = self
            .cuts
            .iter()
            .position(|cut| cut.name == name)
            .ok_or_else(|| ModelError::UnknownCut(name.to_string()))?;
        Ok(self.cuts.remove(position))
    }

    /// Full check of one algorithm: index and name, expression rules,
    /// referenced cuts and external names.
    pub fn check_algorithm(
        &self,
        algorithm: &Algorithm,
        validator: &AlgorithmSyntaxValidator,
    ) -> Result<()> {
        algorithm.validate(self.max_algorithms)?;
        validator.validate(&algorithm.expression, self)?;
        self.require_cuts(algorithm)?;
        for external in algorithm.externals()? {
            external.validate()?;
        }
        Ok(())
    }

    /// Check every algorithm, in menu order.
    pub fn validate_algorithms(&self, validator: &AlgorithmSyntaxValidator) -> Vec<AlgorithmReport> {
        let report = |algorithm: &Algorithm| AlgorithmReport {
            index: algorithm.index,
            name: algorithm.name.clone(),
            result: self.check_algorithm(algorithm, validator),
        };

        #[cfg(feature = "parallel")]
        let reports = {
            use rayon::prelude::*;
            self.algorithms.par_iter().map(report).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let reports = self.algorithms.iter().map(report).collect();

        reports
    }
}

impl MenuContext for Menu {
    fn cut_by_name(&self, name: &str) -> Option<&Cut> {
        self.cuts.iter().find(|cut| cut.name == name)
    }

    fn scale_for(&self, object: ObjectType, kind: ScaleType) -> Option<&Scale> {
        self.scales.iter().find(|scale| scale.describes(object, kind))
    }
}
