//! Side subset lookup.
//!
//! Block types may restrict which edges of padding, margin, or gap are set
//! independently, e.g. `["top", "horizontal"]`. Without a configured subset
//! every edge is independent.

use std::collections::HashMap;

use blockstyle_values::SideSubset;

use crate::capability::{Entity, EntityType, Feature};
use crate::error::ConfigError;

/// Source of side subsets, read-only from the panels' point of view.
pub trait SideSubsetProvider {
    /// Subset configured for `feature` on blocks of `kind`, if any.
    fn side_subset(&self, kind: &EntityType, feature: Feature) -> Option<SideSubset>;
}

/// The subset in effect for one panel cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSubset {
    /// Configurable edges; `None` means all edges, ungrouped.
    pub subset: Option<SideSubset>,
    /// True when the subset groups at least one pair of edges into an axis.
    pub is_axial: bool,
}

/// Look up the subset for a feature on an entity.
#[must_use]
pub fn resolve_side_subset(
    provider: &dyn SideSubsetProvider,
    entity: &Entity,
    feature: Feature,
) -> ResolvedSubset {
    let subset = provider.side_subset(&entity.kind, feature);
    let is_axial = subset.as_ref().is_some_and(SideSubset::is_axial);
    ResolvedSubset { subset, is_axial }
}

/// In-memory side subsets keyed by block type and feature.
#[derive(Debug, Clone, Default)]
pub struct MemorySideSubsets {
    by_type: HashMap<(EntityType, Feature), SideSubset>,
}

impl MemorySideSubsets {
    /// Create an empty table; every lookup yields no subset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the subset for a feature on a block type.
    pub fn insert(&mut self, kind: impl Into<String>, feature: Feature, subset: SideSubset) {
        let _ = self.by_type.insert((EntityType(kind.into()), feature), subset);
    }

    /// Load subsets from JSON of the form
    /// `{"core/group": {"padding": ["top", "horizontal"]}}`.
    ///
    /// Unknown side tokens are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document does not have that shape
    /// or names an unknown feature.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, HashMap<Feature, Vec<String>>> = serde_json::from_str(json)?;
        let mut subsets = Self::new();
        for (kind, features) in raw {
            for (feature, tokens) in features {
                subsets.insert(kind.clone(), feature, SideSubset::from_tokens(tokens));
            }
        }
        Ok(subsets)
    }
}

impl SideSubsetProvider for MemorySideSubsets {
    fn side_subset(&self, kind: &EntityType, feature: Feature) -> Option<SideSubset> {
        self.by_type.get(&(kind.clone(), feature)).cloned()
    }
}
