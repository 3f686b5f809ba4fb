//! Block capabilities and feature tokens.
//!
//! Each block type declares the style features it supports. Panels check
//! membership before reading or writing anything.

use std::collections::{BTreeSet, HashMap};

use blockstyle_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ConfigError;
use crate::settings::SettingPath;

/// Identifier of an editable block instance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

/// Name of a block type, e.g. `core/group`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(pub String);

/// A block instance together with its type.
///
/// Stores are keyed by id; capabilities, settings overrides, and side subsets
/// are keyed by type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Instance identifier.
    pub id: EntityId,
    /// Block type.
    pub kind: EntityType,
}

impl Entity {
    /// Create an entity from its id and type name.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: EntityId(id.into()),
            kind: EntityType(kind.into()),
        }
    }
}

/// A style feature a block type can support.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Feature {
    /// Per-edge padding.
    Padding,
    /// Per-edge margin.
    Margin,
    /// Row/column gap between inner blocks.
    BlockGap,
    /// Border color.
    BorderColor,
    /// Border corner radius.
    BorderRadius,
    /// Border line style.
    BorderStyle,
    /// Border line width.
    BorderWidth,
}

impl Feature {
    /// Setting that switches the feature on for the editor.
    #[must_use]
    pub const fn setting_path(self) -> SettingPath {
        match self {
            Self::Padding => SettingPath::SpacingPadding,
            Self::Margin => SettingPath::SpacingMargin,
            Self::BlockGap => SettingPath::SpacingBlockGap,
            Self::BorderColor => SettingPath::BorderColor,
            Self::BorderRadius => SettingPath::BorderRadius,
            Self::BorderStyle => SettingPath::BorderStyle,
            Self::BorderWidth => SettingPath::BorderWidth,
        }
    }
}

/// Features supported by one block type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<Feature>);

impl CapabilitySet {
    /// Build a set from typed features.
    #[must_use]
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        Self(features.into_iter().collect())
    }

    /// Every known feature.
    #[must_use]
    pub fn all() -> Self {
        Self::new(Feature::iter())
    }

    /// Build a set from raw tokens, skipping unknown ones with a warning.
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let features = tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref();
                let parsed = token.parse::<Feature>().ok();
                if parsed.is_none() {
                    warn_once("Capability", &format!("unknown feature token '{token}'"));
                }
                parsed
            })
            .collect();
        Self(features)
    }

    /// Returns true if the feature is in the set.
    #[must_use]
    pub fn supports(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    /// Add a feature to the set.
    pub fn insert(&mut self, feature: Feature) {
        let _ = self.0.insert(feature);
    }
}

/// Capability sets for every known block type.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    by_type: HashMap<EntityType, CapabilitySet>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the capabilities of a block type.
    pub fn register(&mut self, kind: impl Into<String>, capabilities: CapabilitySet) {
        let _ = self.by_type.insert(EntityType(kind.into()), capabilities);
    }

    /// Load a registry from JSON of the form
    /// `{"core/group": ["padding", "blockGap"]}`.
    ///
    /// Unknown feature tokens are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document does not have that shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let by_type = raw
            .into_iter()
            .map(|(kind, tokens)| (EntityType(kind), CapabilitySet::from_tokens(tokens)))
            .collect();
        Ok(Self { by_type })
    }

    /// Returns true if blocks of `kind` support `feature`.
    ///
    /// Unknown block types support nothing.
    #[must_use]
    pub fn supports(&self, kind: &EntityType, feature: Feature) -> bool {
        self.by_type
            .get(kind)
            .is_some_and(|capabilities| capabilities.supports(feature))
    }
}
