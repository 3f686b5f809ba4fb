//! Stored style values and the full per-edge editing views.
//!
//! A stored value is compact: one scalar for every edge, or a mapping that may
//! omit keys. The editing surface always sees [`SideValues`] (or
//! [`CornerValues`] for radius), which carries every key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::side::{Corner, Side};

/// Logical axis of the `gap` property.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GapAxis {
    /// Spacing between rows, edited through the top/bottom edges.
    Row,
    /// Spacing between columns, edited through the left/right edges.
    Column,
}

/// Partial per-edge mapping.
///
/// A missing key means "not written"; a key mapped to `None` means "unset".
/// Stores that merge partial writes treat the two differently.
pub type SideMap = BTreeMap<Side, Option<String>>;

/// Partial per-axis mapping for `gap`.
pub type AxisMap = BTreeMap<GapAxis, Option<String>>;

/// Partial per-corner mapping for `border-radius`.
pub type CornerMap = BTreeMap<Corner, Option<String>>;

/// A box-model value as it sits in the style store.
///
/// Absence is expressed as `Option::<StyleValue>::None` at every store
/// boundary. Serializes as the untagged JSON a block attribute carries: a
/// string, or an object keyed by side, axis, or corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// One scalar applied to every edge (or corner).
    Uniform(String),
    /// Independent per-edge values.
    PerSide(SideMap),
    /// Logical `{row, column}` pair used by `gap`.
    PerAxis(AxisMap),
    /// Independent per-corner values used by `border-radius`.
    PerCorner(CornerMap),
}

impl StyleValue {
    /// Convenience constructor for a uniform value.
    #[must_use]
    pub fn uniform(value: impl Into<String>) -> Self {
        Self::Uniform(value.into())
    }

    /// Short name of the stored shape, for diagnostics.
    #[must_use]
    pub const fn shape_name(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::PerSide(_) => "per-side",
            Self::PerAxis(_) => "per-axis",
            Self::PerCorner(_) => "per-corner",
        }
    }

    /// The scalar of a uniform value.
    #[must_use]
    pub fn as_uniform(&self) -> Option<&str> {
        match self {
            Self::Uniform(value) => Some(value),
            _ => None,
        }
    }
}

/// Full four-edge mapping exposed to the editing surface.
///
/// Every edge is always present; an edge with no value holds `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideValues {
    /// Top edge value.
    pub top: Option<String>,
    /// Right edge value.
    pub right: Option<String>,
    /// Bottom edge value.
    pub bottom: Option<String>,
    /// Left edge value.
    pub left: Option<String>,
}

impl SideValues {
    /// Every edge set to the same scalar.
    #[must_use]
    pub fn uniform(value: &str) -> Self {
        Self {
            top: Some(value.to_string()),
            right: Some(value.to_string()),
            bottom: Some(value.to_string()),
            left: Some(value.to_string()),
        }
    }

    /// Widen a partial mapping. Missing keys become `None`; nothing is
    /// inferred from the other edges.
    #[must_use]
    pub fn from_side_map(map: &SideMap) -> Self {
        let value = |side: Side| map.get(&side).cloned().flatten();
        Self {
            top: value(Side::Top),
            right: value(Side::Right),
            bottom: value(Side::Bottom),
            left: value(Side::Left),
        }
    }

    /// The mapping with all four keys present.
    #[must_use]
    pub fn to_side_map(&self) -> SideMap {
        Side::ALL
            .into_iter()
            .map(|side| (side, self.get(side).map(str::to_string)))
            .collect()
    }

    /// Value of one edge.
    #[must_use]
    pub fn get(&self, side: Side) -> Option<&str> {
        match side {
            Side::Top => self.top.as_deref(),
            Side::Right => self.right.as_deref(),
            Side::Bottom => self.bottom.as_deref(),
            Side::Left => self.left.as_deref(),
        }
    }

    /// Replace the value of one edge.
    pub fn set(&mut self, side: Side, value: Option<String>) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// Builder form of [`SideValues::set`].
    #[must_use]
    pub fn with(mut self, side: Side, value: Option<&str>) -> Self {
        self.set(side, value.map(str::to_string));
        self
    }

    /// Returns true if at least one edge has a value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        Side::ALL.into_iter().any(|side| self.get(side).is_some())
    }

    /// The shared scalar when all four edges hold the same value.
    #[must_use]
    pub fn uniform_value(&self) -> Option<&str> {
        let top = self.top.as_deref()?;
        Side::ALL
            .into_iter()
            .all(|side| self.get(side) == Some(top))
            .then_some(top)
    }
}

/// Full four-corner mapping for `border-radius`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerValues {
    /// Top-left corner radius.
    pub top_left: Option<String>,
    /// Top-right corner radius.
    pub top_right: Option<String>,
    /// Bottom-right corner radius.
    pub bottom_right: Option<String>,
    /// Bottom-left corner radius.
    pub bottom_left: Option<String>,
}

impl CornerValues {
    /// Every corner set to the same scalar.
    #[must_use]
    pub fn uniform(value: &str) -> Self {
        Self {
            top_left: Some(value.to_string()),
            top_right: Some(value.to_string()),
            bottom_right: Some(value.to_string()),
            bottom_left: Some(value.to_string()),
        }
    }

    /// Widen a partial corner mapping; missing keys become `None`.
    #[must_use]
    pub fn from_corner_map(map: &CornerMap) -> Self {
        let value = |corner: Corner| map.get(&corner).cloned().flatten();
        Self {
            top_left: value(Corner::TopLeft),
            top_right: value(Corner::TopRight),
            bottom_right: value(Corner::BottomRight),
            bottom_left: value(Corner::BottomLeft),
        }
    }

    /// The mapping with all four keys present.
    #[must_use]
    pub fn to_corner_map(&self) -> CornerMap {
        Corner::ALL
            .into_iter()
            .map(|corner| (corner, self.get(corner).map(str::to_string)))
            .collect()
    }

    /// Value of one corner.
    #[must_use]
    pub fn get(&self, corner: Corner) -> Option<&str> {
        match corner {
            Corner::TopLeft => self.top_left.as_deref(),
            Corner::TopRight => self.top_right.as_deref(),
            Corner::BottomRight => self.bottom_right.as_deref(),
            Corner::BottomLeft => self.bottom_left.as_deref(),
        }
    }

    /// Replace the value of one corner.
    pub fn set(&mut self, corner: Corner, value: Option<String>) {
        match corner {
            Corner::TopLeft => self.top_left = value,
            Corner::TopRight => self.top_right = value,
            Corner::BottomRight => self.bottom_right = value,
            Corner::BottomLeft => self.bottom_left = value,
        }
    }

    /// Returns true if at least one corner has a value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        Corner::ALL.into_iter().any(|corner| self.get(corner).is_some())
    }

    /// The shared scalar when all four corners hold the same value.
    #[must_use]
    pub fn uniform_value(&self) -> Option<&str> {
        let top_left = self.top_left.as_deref()?;
        Corner::ALL
            .into_iter()
            .all(|corner| self.get(corner) == Some(top_left))
            .then_some(top_left)
    }
}
