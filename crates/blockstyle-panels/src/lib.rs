//! Box-model settings panel controllers for block style editing.
//!
//! # Scope
//!
//! This crate implements the controllers behind the padding, margin, gap,
//! and border panels of a block style editor, and the collaborators they
//! consult each render cycle:
//! - **Capabilities** - enum-backed feature tokens per block type
//! - **Settings** - dotted-path editor settings with per-type overrides
//! - **Side subsets** - which edges a block type exposes per property
//! - **Style store** - key/value access to a block's stored style
//! - **Palettes** - memoized derivation of the border color palettes
//! - **Panels** - read, widen, narrow, and write per property family
//!
//! The value transforms themselves live in `blockstyle-values`.

/// Block identity, block types, and feature capabilities.
pub mod capability;
/// Configuration decoding errors.
pub mod error;
/// Color palette derivation and memoization.
pub mod palette;
/// Spacing and border panel controllers.
pub mod panel;
/// Editor settings.
pub mod settings;
/// Style storage interface and in-memory store.
pub mod store;
/// Side subset lookup.
pub mod subset;

// Re-exports for convenience
pub use capability::{CapabilityRegistry, CapabilitySet, Entity, EntityId, EntityType, Feature};
pub use error::ConfigError;
pub use palette::{PaletteCache, PaletteColor, PaletteGroup, PaletteOrigin, derive_palettes};
pub use panel::{
    BorderPanel, BorderView, DEFAULT_BORDER_STYLE, PanelContext, PanelState, SpacingPanel,
    SpacingProperty, SpacingView,
};
pub use settings::{DEFAULT_UNITS, MemorySettings, SettingPath, SettingsProvider};
pub use store::{MemoryStyleStore, PropertyPath, StyleStore};
pub use subset::{MemorySideSubsets, ResolvedSubset, SideSubsetProvider, resolve_side_subset};
