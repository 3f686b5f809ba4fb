//! Panel controllers.
//!
//! A controller runs once per render cycle of the hosting panel: it checks
//! visibility, reads the stored value, widens it for the controls, and on
//! edit narrows the result and writes it back.

mod border;
mod spacing;

pub use border::{BorderPanel, BorderView, DEFAULT_BORDER_STYLE};
pub use spacing::{SpacingPanel, SpacingProperty, SpacingView};

use crate::capability::{CapabilityRegistry, Entity, Feature};
use crate::settings::SettingsProvider;
use crate::subset::SideSubsetProvider;

/// Read-only collaborators shared by every controller of one panel.
#[derive(Clone, Copy)]
pub struct PanelContext<'a> {
    /// Block being edited.
    pub entity: &'a Entity,
    /// Editor settings.
    pub settings: &'a dyn SettingsProvider,
    /// Side subset configuration.
    pub subsets: &'a dyn SideSubsetProvider,
    /// Block type capabilities.
    pub capabilities: &'a CapabilityRegistry,
}

impl PanelContext<'_> {
    /// Returns true if the feature is switched on in settings and the block
    /// type supports it.
    #[must_use]
    pub fn feature_visible(&self, feature: Feature) -> bool {
        self.settings
            .is_enabled(feature.setting_path(), self.entity)
            && self.capabilities.supports(&self.entity.kind, feature)
    }
}

/// Where a controller is in the render/edit cycle.
///
/// `Editing` is transient: it is entered when an edit is written and left by
/// the read back that follows in the same call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Holding the last value read from the store.
    #[default]
    Idle,
    /// A narrowed edit is being written back.
    Editing,
}
