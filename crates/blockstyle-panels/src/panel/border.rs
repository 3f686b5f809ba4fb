//! Border width, style, color, and radius controller.
//!
//! [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
//!
//! Width, style, and color are single scalars shared by every edge, so they
//! skip splitting and filtering. Radius widens to four corners with the same
//! uniform-vs-mapping rule as padding; side subsets do not apply to it.

use std::rc::Rc;

use blockstyle_common::warning::warn_once;
use blockstyle_values::{CornerValues, StyleValue, TokenError, expand_corners, split_radius};

use super::{PanelContext, PanelState};
use crate::capability::{EntityId, Feature};
use crate::palette::{PaletteCache, PaletteGroup};
use crate::store::{PropertyPath, StyleStore};

/// Style written alongside a width or color when no style is set yet.
///
/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
/// "Initial: none" would hide the border the user just gave a width to.
pub const DEFAULT_BORDER_STYLE: &str = "solid";

/// What the border controls show for one cycle.
///
/// Components whose feature is hidden stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderView {
    /// Line width.
    pub width: Option<String>,
    /// Line style keyword.
    pub style: Option<String>,
    /// Line color.
    pub color: Option<String>,
    /// Corner radii.
    pub radius: CornerValues,
    /// Units offered by the width and radius inputs.
    pub units: Vec<String>,
    /// Whether colors outside the palettes are accepted.
    pub allows_custom_color: bool,
}

/// Read a scalar border component.
fn read_scalar(store: &dyn StyleStore, entity: &EntityId, path: PropertyPath) -> Option<String> {
    match store.get(entity, path)? {
        StyleValue::Uniform(value) => Some(value),
        other => {
            warn_once(
                "Border",
                &format!("{} value stored at {path} is not a scalar", other.shape_name()),
            );
            None
        }
    }
}

/// Compact write form of a corner mapping.
///
/// No corners → absent; four equal corners → uniform; otherwise every corner.
fn narrow_radius(corners: &CornerValues) -> Option<StyleValue> {
    if !corners.has_value() {
        return None;
    }
    Some(corners.uniform_value().map_or_else(
        || StyleValue::PerCorner(corners.to_corner_map()),
        StyleValue::uniform,
    ))
}

/// Controller for the border controls of one block.
#[derive(Debug, Clone, Default)]
pub struct BorderPanel {
    state: PanelState,
    view: Option<BorderView>,
    palettes: PaletteCache,
}

impl BorderPanel {
    /// Create a controller that has not read anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cycle state.
    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    /// View from the last cycle; `None` before the first read or while hidden.
    #[must_use]
    pub const fn view(&self) -> Option<&BorderView> {
        self.view.as_ref()
    }

    /// Palette groups for the color control, derived once per change of the
    /// palette settings. Empty while border color is hidden.
    pub fn color_palettes(&mut self, ctx: &PanelContext<'_>) -> Rc<[PaletteGroup]> {
        if !ctx.feature_visible(Feature::BorderColor) {
            return Rc::from([]);
        }
        self.palettes.palettes(ctx.settings, ctx.entity)
    }

    /// Returns true if any border feature is visible.
    #[must_use]
    pub fn is_visible(&self, ctx: &PanelContext<'_>) -> bool {
        [
            Feature::BorderWidth,
            Feature::BorderStyle,
            Feature::BorderColor,
            Feature::BorderRadius,
        ]
        .into_iter()
        .any(|feature| ctx.feature_visible(feature))
    }

    /// Run the read half of a cycle. Only visible components are read.
    pub fn refresh(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &dyn StyleStore,
    ) -> Option<&BorderView> {
        self.state = PanelState::Idle;
        if !self.is_visible(ctx) {
            self.view = None;
            return None;
        }

        let entity = &ctx.entity.id;
        let scalar = |feature: Feature, path: PropertyPath| {
            ctx.feature_visible(feature)
                .then(|| read_scalar(store, entity, path))
                .flatten()
        };
        let radius = if ctx.feature_visible(Feature::BorderRadius) {
            split_radius(store.get(entity, PropertyPath::BorderRadius).as_ref())
        } else {
            CornerValues::default()
        };

        self.view = Some(BorderView {
            width: scalar(Feature::BorderWidth, PropertyPath::BorderWidth),
            style: scalar(Feature::BorderStyle, PropertyPath::BorderStyle),
            color: scalar(Feature::BorderColor, PropertyPath::BorderColor),
            radius,
            units: ctx.settings.available_units(ctx.entity),
            allows_custom_color: ctx
                .settings
                .allows_custom_values(Feature::BorderColor, ctx.entity),
        });
        self.view.as_ref()
    }

    /// Write a scalar component, then read the panel back.
    ///
    /// Width and color writes with a value first give the border the default
    /// style when none is stored; clearing them leaves style untouched. A
    /// style stored in a non-scalar shape counts as none and is replaced by
    /// the default (after the one-time read warning).
    ///
    /// Like [`SpacingPanel::on_change`](super::SpacingPanel::on_change), the
    /// panel is back to idle when this returns.
    fn write_scalar(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        feature: Feature,
        path: PropertyPath,
        value: Option<&str>,
    ) {
        if !ctx.feature_visible(feature) {
            return;
        }

        self.state = PanelState::Editing;
        let entity = &ctx.entity.id;
        if path != PropertyPath::BorderStyle
            && value.is_some()
            && read_scalar(store, entity, PropertyPath::BorderStyle).is_none()
        {
            store.set(
                entity,
                PropertyPath::BorderStyle,
                Some(StyleValue::uniform(DEFAULT_BORDER_STYLE)),
            );
        }
        store.set(entity, path, value.map(StyleValue::uniform));
        let _ = self.refresh(ctx, store);
    }

    /// Set or clear the border width.
    pub fn set_width(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        width: Option<&str>,
    ) {
        self.write_scalar(ctx, store, Feature::BorderWidth, PropertyPath::BorderWidth, width);
    }

    /// Set or clear the border color.
    pub fn set_color(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        color: Option<&str>,
    ) {
        self.write_scalar(ctx, store, Feature::BorderColor, PropertyPath::BorderColor, color);
    }

    /// Set or clear the border style.
    pub fn set_style(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        style: Option<&str>,
    ) {
        self.write_scalar(ctx, store, Feature::BorderStyle, PropertyPath::BorderStyle, style);
    }

    /// Write edited corner radii.
    pub fn set_radius(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        corners: &CornerValues,
    ) {
        if !ctx.feature_visible(Feature::BorderRadius) {
            return;
        }

        self.state = PanelState::Editing;
        store.set(&ctx.entity.id, PropertyPath::BorderRadius, narrow_radius(corners));
        let _ = self.refresh(ctx, store);
    }

    /// Apply a typed `border-radius` shorthand (`"4px 0"`).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::ShorthandArity`] if the shorthand does not have
    /// one to four components; nothing is written in that case.
    pub fn set_radius_shorthand(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        shorthand: &str,
    ) -> Result<(), TokenError> {
        let corners = expand_corners(shorthand)?;
        self.set_radius(ctx, store, &corners);
        Ok(())
    }

    /// Returns true if any visible component holds a value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.view.as_ref().is_some_and(|view| {
            view.width.is_some()
                || view.style.is_some()
                || view.color.is_some()
                || view.radius.has_value()
        })
    }

    /// Clear every visible component.
    pub fn reset(&mut self, ctx: &PanelContext<'_>, store: &mut dyn StyleStore) {
        self.set_width(ctx, store, None);
        self.set_color(ctx, store, None);
        self.set_style(ctx, store, None);
        self.set_radius(ctx, store, &CornerValues::default());
    }
}
