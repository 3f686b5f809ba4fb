//! Widening stored values into full editing views.

use blockstyle_common::warning::warn_once;

use crate::value::{CornerValues, SideValues, StyleValue};

/// Widen a stored padding/margin value into all four edges.
///
/// - absent: every edge `None`
/// - uniform: every edge set to the scalar
/// - per-side: passed through, missing keys become `None`
///
/// A shape that belongs to another family (per-axis, per-corner) cannot be
/// read as edges and widens to all `None`.
#[must_use]
pub fn split(value: Option<&StyleValue>) -> SideValues {
    match value {
        None => SideValues::default(),
        Some(StyleValue::Uniform(scalar)) => SideValues::uniform(scalar),
        Some(StyleValue::PerSide(map)) => SideValues::from_side_map(map),
        Some(other) => {
            warn_once(
                "Split",
                &format!("{} value cannot be read as box edges", other.shape_name()),
            );
            SideValues::default()
        }
    }
}

/// Widen a stored `border-radius` value into all four corners.
///
/// Same uniform-vs-mapping rule as [`split`], keyed by corner.
#[must_use]
pub fn split_radius(value: Option<&StyleValue>) -> CornerValues {
    match value {
        None => CornerValues::default(),
        Some(StyleValue::Uniform(scalar)) => CornerValues::uniform(scalar),
        Some(StyleValue::PerCorner(map)) => CornerValues::from_corner_map(map),
        Some(other) => {
            warn_once(
                "Split",
                &format!("{} value cannot be read as corners", other.shape_name()),
            );
            CornerValues::default()
        }
    }
}
