//! The `gap` adapter.
//!
//! Gap is stored by logical axis (`row`, `column`) but edited through the
//! same four-edge surface as padding and margin. Rows map onto the vertical
//! edges and columns onto the horizontal edges; top and left are the
//! representatives read back when narrowing.

use blockstyle_common::warning::warn_once;

use crate::side::{AxisToken, SideSubset, SideSubsetEntry};
use crate::value::{AxisMap, GapAxis, SideValues, StyleValue};

/// Widen a stored gap value into all four edges.
///
/// `row` fills top and bottom, `column` fills left and right.
#[must_use]
pub fn split_gap(value: Option<&StyleValue>) -> SideValues {
    match value {
        None => SideValues::default(),
        Some(StyleValue::Uniform(scalar)) => SideValues::uniform(scalar),
        Some(StyleValue::PerAxis(map)) => {
            let row = map.get(&GapAxis::Row).cloned().flatten();
            let column = map.get(&GapAxis::Column).cloned().flatten();
            SideValues {
                top: row.clone(),
                right: column.clone(),
                bottom: row,
                left: column,
            }
        }
        Some(other) => {
            warn_once(
                "Gap",
                &format!("{} value cannot be read as a gap", other.shape_name()),
            );
            SideValues::default()
        }
    }
}

/// Collapse an edited edge mapping back to logical axes.
///
/// Without a subset both axes are produced from `top` and `left`. With a
/// subset, `vertical` yields `row` and `horizontal` yields `column`; discrete
/// sides carry no meaning for gap and produce nothing. `bottom` and `right`
/// are never consulted.
#[must_use]
pub fn filter_gap(edited: &SideValues, subset: Option<&SideSubset>) -> AxisMap {
    let Some(subset) = subset else {
        return AxisMap::from([
            (GapAxis::Row, edited.top.clone()),
            (GapAxis::Column, edited.left.clone()),
        ]);
    };

    let mut narrowed = AxisMap::new();
    for entry in subset.entries() {
        match entry {
            SideSubsetEntry::Axis(AxisToken::Vertical) => {
                let _ = narrowed.insert(GapAxis::Row, edited.top.clone());
            }
            SideSubsetEntry::Axis(AxisToken::Horizontal) => {
                let _ = narrowed.insert(GapAxis::Column, edited.left.clone());
            }
            SideSubsetEntry::Side(_) => {}
        }
    }
    narrowed
}
