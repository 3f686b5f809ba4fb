//! Box-model style value transforms for the blockstyle panels.
//!
//! # Scope
//!
//! This crate implements the layer between a block's stored style attributes
//! and the per-edge controls of a settings panel:
//! - **Sides and subsets** - edges, axis tokens, and the side subsets that
//!   decide which edges a block exposes
//! - **Splitting** - widening a uniform or partial stored value into a full
//!   four-edge (or four-corner) view
//! - **Filtering** - narrowing an edited view back down to the configurable
//!   edges, expanding axis tokens into their member edges
//! - **Gap** - the row/column variant of both directions
//! - **Shorthand** - CSS 1-4 value expansion for typed input
//!
//! Every transform is total: absent or partial input produces a complete
//! result and nothing here fails except parsing configuration text.

/// Errors for configuration tokens and shorthand text.
pub mod error;
/// Narrowing edited edge mappings.
pub mod filter;
/// Row/column adapter for the `gap` property.
pub mod gap;
/// CSS 1-4 value shorthand expansion.
pub mod shorthand;
/// Edges, corners, axis tokens, and side subsets.
pub mod side;
/// Widening stored values.
pub mod split;
/// Stored value shapes and full editing views.
pub mod value;

// Re-exports for convenience
pub use error::TokenError;
pub use filter::filter;
pub use gap::{filter_gap, split_gap};
pub use shorthand::{expand_corners, expand_sides};
pub use side::{AXIS_TOKENS, AxisToken, Corner, Side, SideSubset, SideSubsetEntry};
pub use split::{split, split_radius};
pub use value::{AxisMap, CornerMap, CornerValues, GapAxis, SideMap, SideValues, StyleValue};
