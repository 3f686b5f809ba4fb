//! Editor settings consumed by the panels.
//!
//! Settings are addressed by dotted paths (`spacing.padding`,
//! `color.palette.theme`, ...) and may be overridden per block type. Values
//! are handed out behind `Rc` so consumers can tell an unchanged value from a
//! replaced one by identity alone.

use std::collections::HashMap;
use std::rc::Rc;
use std::str::FromStr;

use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::capability::{Entity, EntityType, Feature};
use crate::error::ConfigError;

/// Units offered when `spacing.units` is not configured.
pub const DEFAULT_UNITS: [&str; 6] = ["px", "em", "rem", "vh", "vw", "%"];

/// Key under which per-block-type overrides live in a settings document.
const BLOCKS_KEY: &str = "blocks";

/// A dotted settings path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum SettingPath {
    /// Padding controls enabled.
    #[strum(serialize = "spacing.padding")]
    SpacingPadding,
    /// Margin controls enabled.
    #[strum(serialize = "spacing.margin")]
    SpacingMargin,
    /// Gap controls enabled.
    #[strum(serialize = "spacing.blockGap")]
    SpacingBlockGap,
    /// Units offered by spacing and border-width inputs.
    #[strum(serialize = "spacing.units")]
    SpacingUnits,
    /// Free-form spacing sizes allowed.
    #[strum(serialize = "spacing.customSpacingSize")]
    SpacingCustomSize,
    /// Border color controls enabled.
    #[strum(serialize = "border.color")]
    BorderColor,
    /// Border radius controls enabled.
    #[strum(serialize = "border.radius")]
    BorderRadius,
    /// Border style controls enabled.
    #[strum(serialize = "border.style")]
    BorderStyle,
    /// Border width controls enabled.
    #[strum(serialize = "border.width")]
    BorderWidth,
    /// Free-form colors allowed.
    #[strum(serialize = "color.custom")]
    ColorCustom,
    /// Colors defined by the theme.
    #[strum(serialize = "color.palette.theme")]
    PaletteTheme,
    /// Colors shipped with the editor.
    #[strum(serialize = "color.palette.default")]
    PaletteDefault,
    /// Colors added by the user.
    #[strum(serialize = "color.palette.custom")]
    PaletteCustom,
    /// Whether the editor's default palette is offered.
    #[strum(serialize = "color.defaultPalette")]
    DefaultPaletteEnabled,
}

/// Source of editor settings.
pub trait SettingsProvider {
    /// Raw value at `path` for `entity`, or `None` when unset.
    fn get(&self, path: SettingPath, entity: &Entity) -> Option<Rc<Value>>;

    /// Returns true if the setting is exactly `true`.
    fn is_enabled(&self, path: SettingPath, entity: &Entity) -> bool {
        self.get(path, entity)
            .is_some_and(|value| value.as_bool() == Some(true))
    }

    /// Units offered by length inputs, falling back to [`DEFAULT_UNITS`].
    fn available_units(&self, entity: &Entity) -> Vec<String> {
        let configured = self.get(SettingPath::SpacingUnits, entity).and_then(|value| {
            value.as_array().map(|units| {
                units
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
        });
        configured.unwrap_or_else(|| DEFAULT_UNITS.iter().map(|unit| (*unit).to_string()).collect())
    }

    /// Returns true if the feature's input accepts values outside its presets.
    ///
    /// Defaults to allowed when the toggle is unset; features without a toggle
    /// always allow custom values.
    fn allows_custom_values(&self, feature: Feature, entity: &Entity) -> bool {
        let toggle = match feature {
            Feature::Padding | Feature::Margin | Feature::BlockGap => SettingPath::SpacingCustomSize,
            Feature::BorderColor => SettingPath::ColorCustom,
            Feature::BorderRadius | Feature::BorderStyle | Feature::BorderWidth => return true,
        };
        self.get(toggle, entity)
            .and_then(|value| value.as_bool())
            .unwrap_or(true)
    }
}

/// In-memory settings with per-block-type overrides.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    global: HashMap<SettingPath, Rc<Value>>,
    per_type: HashMap<(EntityType, SettingPath), Rc<Value>>,
}

impl MemorySettings {
    /// Create an empty settings set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a global value. Always produces a new identity, even when the
    /// value is equal to the previous one.
    pub fn set(&mut self, path: SettingPath, value: Value) {
        let _ = self.global.insert(path, Rc::new(value));
    }

    /// Set a value for one block type only.
    pub fn set_for_type(&mut self, kind: impl Into<String>, path: SettingPath, value: Value) {
        let _ = self
            .per_type
            .insert((EntityType(kind.into()), path), Rc::new(value));
    }

    /// Remove a global value.
    pub fn unset(&mut self, path: SettingPath) {
        let _ = self.global.remove(&path);
    }

    /// Load settings from a JSON document of the form
    ///
    /// ```json
    /// {
    ///   "spacing.padding": true,
    ///   "blocks": { "core/group": { "spacing.units": ["px"] } }
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for invalid JSON,
    /// [`ConfigError::ExpectedObject`] when the root or a block section is
    /// not an object, and [`ConfigError::UnknownSetting`] for unknown keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = root else {
            return Err(ConfigError::ExpectedObject("$".to_string()));
        };

        let mut settings = Self::new();
        for (key, value) in entries {
            if key == BLOCKS_KEY {
                let Value::Object(blocks) = value else {
                    return Err(ConfigError::ExpectedObject(BLOCKS_KEY.to_string()));
                };
                for (kind, section) in blocks {
                    let Value::Object(overrides) = section else {
                        return Err(ConfigError::ExpectedObject(format!("{BLOCKS_KEY}.{kind}")));
                    };
                    for (path, value) in overrides {
                        settings.set_for_type(kind.clone(), parse_path(&path)?, value);
                    }
                }
            } else {
                settings.set(parse_path(&key)?, value);
            }
        }
        Ok(settings)
    }
}

fn parse_path(key: &str) -> Result<SettingPath, ConfigError> {
    SettingPath::from_str(key).map_err(|_| ConfigError::UnknownSetting(key.to_string()))
}

impl SettingsProvider for MemorySettings {
    fn get(&self, path: SettingPath, entity: &Entity) -> Option<Rc<Value>> {
        self.per_type
            .get(&(entity.kind.clone(), path))
            .or_else(|| self.global.get(&path))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn group() -> Entity {
        Entity::new("block-1", "core/group")
    }

    #[test]
    fn test_per_type_override_wins() {
        let settings = MemorySettings::from_json(
            r#"{
                "spacing.units": ["px", "em"],
                "blocks": { "core/group": { "spacing.units": ["rem"] } }
            }"#,
        )
        .unwrap();
        assert_eq!(settings.available_units(&group()), vec!["rem".to_string()]);
        let other = Entity::new("block-2", "core/columns");
        assert_eq!(
            settings.available_units(&other),
            vec!["px".to_string(), "em".to_string()]
        );
    }

    #[test]
    fn test_default_units_when_unset() {
        let settings = MemorySettings::new();
        assert_eq!(settings.available_units(&group()).len(), DEFAULT_UNITS.len());
    }

    #[test]
    fn test_is_enabled_requires_true() {
        let mut settings = MemorySettings::new();
        assert!(!settings.is_enabled(SettingPath::SpacingPadding, &group()));
        settings.set(SettingPath::SpacingPadding, json!("yes"));
        assert!(!settings.is_enabled(SettingPath::SpacingPadding, &group()));
        settings.set(SettingPath::SpacingPadding, json!(true));
        assert!(settings.is_enabled(SettingPath::SpacingPadding, &group()));
    }

    #[test]
    fn test_custom_value_toggles() {
        let mut settings = MemorySettings::new();
        assert!(settings.allows_custom_values(Feature::Padding, &group()));
        settings.set(SettingPath::SpacingCustomSize, json!(false));
        assert!(!settings.allows_custom_values(Feature::Margin, &group()));
        assert!(settings.allows_custom_values(Feature::BorderColor, &group()));
    }

    #[test]
    fn test_from_json_rejects_unknown_paths() {
        let err = MemorySettings::from_json(r#"{"spacing.paddings": true}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSetting(key) if key == "spacing.paddings"));
        assert!(matches!(
            MemorySettings::from_json("[]"),
            Err(ConfigError::ExpectedObject(_))
        ));
    }
}
