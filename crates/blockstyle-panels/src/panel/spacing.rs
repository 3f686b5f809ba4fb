//! Padding, margin, and gap controllers.

use blockstyle_values::{
    SideSubset, SideValues, StyleValue, TokenError, expand_sides, filter, filter_gap, split,
    split_gap,
};

use super::{PanelContext, PanelState};
use crate::capability::Feature;
use crate::store::{PropertyPath, StyleStore};
use crate::subset::resolve_side_subset;

/// Which spacing property a [`SpacingPanel`] edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingProperty {
    /// Space inside the border.
    Padding,
    /// Space outside the border.
    Margin,
    /// Space between inner blocks, stored as row/column.
    Gap,
}

impl SpacingProperty {
    /// Capability and settings feature gating this property.
    #[must_use]
    pub const fn feature(self) -> Feature {
        match self {
            Self::Padding => Feature::Padding,
            Self::Margin => Feature::Margin,
            Self::Gap => Feature::BlockGap,
        }
    }

    /// Store key the property is written under.
    #[must_use]
    pub const fn path(self) -> PropertyPath {
        match self {
            Self::Padding => PropertyPath::Padding,
            Self::Margin => PropertyPath::Margin,
            Self::Gap => PropertyPath::BlockGap,
        }
    }

    fn widen(self, stored: Option<&StyleValue>) -> SideValues {
        match self {
            Self::Padding | Self::Margin => split(stored),
            Self::Gap => split_gap(stored),
        }
    }

    /// Write form of an edit. A subset that leaves nothing configurable
    /// unsets the key, since an empty object cannot name its own shape.
    fn narrow(self, edited: &SideValues, subset: Option<&SideSubset>) -> Option<StyleValue> {
        match self {
            Self::Padding | Self::Margin => {
                let sides = filter(edited, subset);
                (!sides.is_empty()).then_some(StyleValue::PerSide(sides))
            }
            Self::Gap => {
                let axes = filter_gap(edited, subset);
                (!axes.is_empty()).then_some(StyleValue::PerAxis(axes))
            }
        }
    }
}

/// What a spacing control shows for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingView {
    /// All four edges, widened from the stored value.
    pub values: SideValues,
    /// Edges the block lets the user set; `None` means all of them.
    pub subset: Option<SideSubset>,
    /// Lay the control out by axis instead of by edge.
    pub is_axial: bool,
    /// Units offered by the length inputs.
    pub units: Vec<String>,
    /// Whether values outside the spacing presets are accepted.
    pub allows_custom_values: bool,
}

/// Controller for one spacing property of one block.
#[derive(Debug, Clone)]
pub struct SpacingPanel {
    property: SpacingProperty,
    state: PanelState,
    view: Option<SpacingView>,
}

impl SpacingPanel {
    /// Create a controller that has not read anything yet.
    #[must_use]
    pub const fn new(property: SpacingProperty) -> Self {
        Self {
            property,
            state: PanelState::Idle,
            view: None,
        }
    }

    /// Property this controller edits.
    #[must_use]
    pub const fn property(&self) -> SpacingProperty {
        self.property
    }

    /// Current cycle state.
    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    /// View from the last cycle; `None` before the first read or while hidden.
    #[must_use]
    pub const fn view(&self) -> Option<&SpacingView> {
        self.view.as_ref()
    }

    /// Returns true if the feature is enabled and the block supports it.
    #[must_use]
    pub fn is_visible(&self, ctx: &PanelContext<'_>) -> bool {
        ctx.feature_visible(self.property.feature())
    }

    /// Run the read half of a cycle.
    ///
    /// A hidden property reads nothing and drops any previous view.
    pub fn refresh(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &dyn StyleStore,
    ) -> Option<&SpacingView> {
        self.state = PanelState::Idle;
        if !self.is_visible(ctx) {
            self.view = None;
            return None;
        }

        let feature = self.property.feature();
        let resolved = resolve_side_subset(ctx.subsets, ctx.entity, feature);
        let stored = store.get(&ctx.entity.id, self.property.path());
        self.view = Some(SpacingView {
            values: self.property.widen(stored.as_ref()),
            subset: resolved.subset,
            is_axial: resolved.is_axial,
            units: ctx.settings.available_units(ctx.entity),
            allows_custom_values: ctx.settings.allows_custom_values(feature, ctx.entity),
        });
        self.view.as_ref()
    }

    /// Narrow an edited mapping with the current subset, write it, and read
    /// the stored result back.
    ///
    /// The panel is [`PanelState::Editing`] only between the write and the
    /// read back, so callers always observe [`PanelState::Idle`] once this
    /// returns. Does nothing while the property is hidden.
    pub fn on_change(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        edited: &SideValues,
    ) {
        if !self.is_visible(ctx) {
            return;
        }

        self.state = PanelState::Editing;
        let resolved = resolve_side_subset(ctx.subsets, ctx.entity, self.property.feature());
        let narrowed = self.property.narrow(edited, resolved.subset.as_ref());
        store.set(&ctx.entity.id, self.property.path(), narrowed);
        let _ = self.refresh(ctx, store);
    }

    /// Apply a typed CSS shorthand (`"4px 8px"`) as an edit.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::ShorthandArity`] if the shorthand does not have
    /// one to four components; nothing is written in that case.
    pub fn set_shorthand(
        &mut self,
        ctx: &PanelContext<'_>,
        store: &mut dyn StyleStore,
        shorthand: &str,
    ) -> Result<(), TokenError> {
        let edited = expand_sides(shorthand)?;
        self.on_change(ctx, store, &edited);
        Ok(())
    }

    /// Returns true if the last read produced any value.
    ///
    /// Gap counts the logical axes that survive narrowing with the current
    /// subset rather than the four widened edges.
    #[must_use]
    pub fn has_value(&self) -> bool {
        let Some(view) = &self.view else {
            return false;
        };
        match self.property {
            SpacingProperty::Padding | SpacingProperty::Margin => view.values.has_value(),
            SpacingProperty::Gap => filter_gap(&view.values, view.subset.as_ref())
                .values()
                .any(Option::is_some),
        }
    }

    /// Clear every configurable edge.
    pub fn reset(&mut self, ctx: &PanelContext<'_>, store: &mut dyn StyleStore) {
        self.on_change(ctx, store, &SideValues::default());
    }
}
