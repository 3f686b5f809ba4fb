//! Style storage interface.
//!
//! The panels treat storage as a key/value surface: one [`StyleValue`] per
//! (block, property path). Absence is `None` in both directions; writing
//! `None` removes the key.

use std::collections::BTreeMap;

use blockstyle_values::StyleValue;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::capability::EntityId;
use crate::error::ConfigError;

/// Path of a style attribute within a block's style object.
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
    AsRefStr,
)]
pub enum PropertyPath {
    /// `style.spacing.padding`
    #[serde(rename = "spacing.padding")]
    #[strum(serialize = "spacing.padding")]
    Padding,
    /// `style.spacing.margin`
    #[serde(rename = "spacing.margin")]
    #[strum(serialize = "spacing.margin")]
    Margin,
    /// `style.spacing.blockGap`
    #[serde(rename = "spacing.blockGap")]
    #[strum(serialize = "spacing.blockGap")]
    BlockGap,
    /// `style.border.width`
    #[serde(rename = "border.width")]
    #[strum(serialize = "border.width")]
    BorderWidth,
    /// `style.border.style`
    #[serde(rename = "border.style")]
    #[strum(serialize = "border.style")]
    BorderStyle,
    /// `style.border.color`
    #[serde(rename = "border.color")]
    #[strum(serialize = "border.color")]
    BorderColor,
    /// `style.border.radius`
    #[serde(rename = "border.radius")]
    #[strum(serialize = "border.radius")]
    BorderRadius,
}

/// Read/write access to stored block styles.
pub trait StyleStore {
    /// Current value at `path` on `entity`.
    fn get(&self, entity: &EntityId, path: PropertyPath) -> Option<StyleValue>;

    /// Replace the value at `path` on `entity`; `None` unsets it.
    fn set(&mut self, entity: &EntityId, path: PropertyPath, value: Option<StyleValue>);
}

/// In-memory style store.
///
/// Writes replace the stored value wholesale; a narrowed per-side write does
/// not merge with the edges it leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStyleStore {
    styles: BTreeMap<EntityId, BTreeMap<PropertyPath, StyleValue>>,
}

impl MemoryStyleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a store from its JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the snapshot is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON snapshot of every stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// All stored properties of one entity.
    #[must_use]
    pub fn properties(&self, entity: &EntityId) -> Option<&BTreeMap<PropertyPath, StyleValue>> {
        self.styles.get(entity)
    }
}

impl StyleStore for MemoryStyleStore {
    fn get(&self, entity: &EntityId, path: PropertyPath) -> Option<StyleValue> {
        self.styles.get(entity)?.get(&path).cloned()
    }

    fn set(&mut self, entity: &EntityId, path: PropertyPath, value: Option<StyleValue>) {
        match value {
            Some(value) => {
                let _ = self
                    .styles
                    .entry(entity.clone())
                    .or_default()
                    .insert(path, value);
            }
            None => {
                if let Some(properties) = self.styles.get_mut(entity) {
                    let _ = properties.remove(&path);
                    if properties.is_empty() {
                        let _ = self.styles.remove(entity);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockstyle_values::{Side, SideMap};

    fn block() -> EntityId {
        EntityId("block-1".to_string())
    }

    #[test]
    fn test_set_none_removes_key() {
        let mut store = MemoryStyleStore::new();
        store.set(&block(), PropertyPath::Padding, Some(StyleValue::uniform("4px")));
        assert_eq!(
            store.get(&block(), PropertyPath::Padding),
            Some(StyleValue::uniform("4px"))
        );
        store.set(&block(), PropertyPath::Padding, None);
        assert_eq!(store.get(&block(), PropertyPath::Padding), None);
        assert!(store.properties(&block()).is_none());
    }

    #[test]
    fn test_json_snapshot_restores() {
        let mut store = MemoryStyleStore::new();
        store.set(
            &block(),
            PropertyPath::Margin,
            Some(StyleValue::PerSide(SideMap::from([(
                Side::Top,
                Some("1em".to_string()),
            )]))),
        );
        store.set(&block(), PropertyPath::BorderStyle, Some(StyleValue::uniform("dashed")));

        let json = store.to_json().unwrap();
        assert!(json.contains(r#""spacing.margin":{"top":"1em"}"#));
        assert_eq!(MemoryStyleStore::from_json(&json).unwrap(), store);
    }
}
