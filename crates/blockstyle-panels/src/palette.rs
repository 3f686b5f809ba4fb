//! Color palettes offered by the border color control.
//!
//! The palette list is derived from three settings lists (theme, default,
//! custom) plus the default-palette flag. [`PaletteCache`] keeps the last
//! derivation and only redoes it when one of those inputs changes identity.

use std::rc::Rc;

use blockstyle_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capability::Entity;
use crate::settings::{SettingPath, SettingsProvider};

/// One named color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Display name.
    pub name: String,
    /// Stable identifier used in stored values.
    pub slug: String,
    /// CSS color value.
    pub color: String,
}

/// Where a palette group comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteOrigin {
    /// Defined by the active theme.
    Theme,
    /// Shipped with the editor.
    Default,
    /// Added by the user.
    Custom,
}

/// A non-empty group of colors from one origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteGroup {
    /// Origin of the colors.
    pub origin: PaletteOrigin,
    /// Colors in settings order.
    pub colors: Vec<PaletteColor>,
}

fn decode_colors(origin: PaletteOrigin, source: Option<&Value>) -> Vec<PaletteColor> {
    let Some(source) = source else {
        return Vec::new();
    };
    match Vec::<PaletteColor>::deserialize(source) {
        Ok(colors) => colors,
        Err(err) => {
            warn_once("Palette", &format!("ignoring malformed {origin:?} palette: {err}"));
            Vec::new()
        }
    }
}

/// Build the palette groups offered to the color control.
///
/// Order is theme, default (only when `default_enabled`), custom. Groups with
/// no colors are left out.
#[must_use]
pub fn derive_palettes(
    theme: Option<&Value>,
    default: Option<&Value>,
    custom: Option<&Value>,
    default_enabled: bool,
) -> Vec<PaletteGroup> {
    let default = if default_enabled { default } else { None };
    [
        (PaletteOrigin::Theme, theme),
        (PaletteOrigin::Default, default),
        (PaletteOrigin::Custom, custom),
    ]
    .into_iter()
    .map(|(origin, source)| PaletteGroup {
        origin,
        colors: decode_colors(origin, source),
    })
    .filter(|group| !group.colors.is_empty())
    .collect()
}

/// Inputs of one derivation, compared by identity.
#[derive(Debug, Clone)]
struct PaletteInputs {
    theme: Option<Rc<Value>>,
    default: Option<Rc<Value>>,
    custom: Option<Rc<Value>>,
    default_enabled: bool,
}

fn same_source(a: Option<&Rc<Value>>, b: Option<&Rc<Value>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

impl PaletteInputs {
    fn read(settings: &dyn SettingsProvider, entity: &Entity) -> Self {
        Self {
            theme: settings.get(SettingPath::PaletteTheme, entity),
            default: settings.get(SettingPath::PaletteDefault, entity),
            custom: settings.get(SettingPath::PaletteCustom, entity),
            default_enabled: settings.is_enabled(SettingPath::DefaultPaletteEnabled, entity),
        }
    }

    fn same_as(&self, other: &Self) -> bool {
        same_source(self.theme.as_ref(), other.theme.as_ref())
            && same_source(self.default.as_ref(), other.default.as_ref())
            && same_source(self.custom.as_ref(), other.custom.as_ref())
            && self.default_enabled == other.default_enabled
    }
}

/// Memoized palette derivation.
#[derive(Debug, Clone, Default)]
pub struct PaletteCache {
    last: Option<(PaletteInputs, Rc<[PaletteGroup]>)>,
    derivations: usize,
}

impl PaletteCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette groups for `entity`, reusing the previous result when none of
    /// the inputs changed identity.
    pub fn palettes(
        &mut self,
        settings: &dyn SettingsProvider,
        entity: &Entity,
    ) -> Rc<[PaletteGroup]> {
        let inputs = PaletteInputs::read(settings, entity);
        if let Some((previous, groups)) = &self.last
            && previous.same_as(&inputs)
        {
            return Rc::clone(groups);
        }

        let groups: Rc<[PaletteGroup]> = derive_palettes(
            inputs.theme.as_deref(),
            inputs.default.as_deref(),
            inputs.custom.as_deref(),
            inputs.default_enabled,
        )
        .into();
        self.derivations += 1;
        self.last = Some((inputs, Rc::clone(&groups)));
        groups
    }

    /// Number of times the palettes have been derived.
    #[must_use]
    pub const fn derivations(&self) -> usize {
        self.derivations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettings;
    use serde_json::json;

    fn red() -> Value {
        json!([{ "name": "Red", "slug": "red", "color": "#f00" }])
    }

    #[test]
    fn test_derive_skips_disabled_default_and_empty_groups() {
        let blue = json!([{ "name": "Blue", "slug": "blue", "color": "#00f" }]);
        let groups = derive_palettes(Some(&red()), Some(&blue), Some(&json!([])), false);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].origin, PaletteOrigin::Theme);

        let groups = derive_palettes(Some(&red()), Some(&blue), None, true);
        let origins: Vec<_> = groups.iter().map(|group| group.origin).collect();
        assert_eq!(origins, vec![PaletteOrigin::Theme, PaletteOrigin::Default]);
    }

    #[test]
    fn test_malformed_palette_is_ignored() {
        let groups = derive_palettes(Some(&json!({"red": "#f00"})), None, None, false);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_cache_recomputes_on_identity_change_only() {
        let entity = Entity::new("b1", "core/group");
        let mut settings = MemorySettings::new();
        settings.set(SettingPath::PaletteTheme, red());

        let mut cache = PaletteCache::new();
        let first = cache.palettes(&settings, &entity);
        let second = cache.palettes(&settings, &entity);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.derivations(), 1);

        // Equal content, new identity.
        settings.set(SettingPath::PaletteTheme, red());
        let third = cache.palettes(&settings, &entity);
        assert_eq!(cache.derivations(), 2);
        assert_eq!(first, third);

        settings.set(SettingPath::DefaultPaletteEnabled, json!(true));
        let _ = cache.palettes(&settings, &entity);
        assert_eq!(cache.derivations(), 3);
    }
}
