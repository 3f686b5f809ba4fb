//! Narrowing edited views back down to the configurable edges.

use crate::side::SideSubset;
use crate::value::{SideMap, SideValues};

/// Narrow a full edge mapping to the edges named by `subset`.
///
/// With no subset every edge is written, including `None` edges, which tell
/// the store to unset them. With a subset, each entry copies its edges in
/// order (an axis copies both members) and edges no entry names are left out
/// of the result entirely.
#[must_use]
pub fn filter(edited: &SideValues, subset: Option<&SideSubset>) -> SideMap {
    let Some(subset) = subset else {
        return edited.to_side_map();
    };

    let mut narrowed = SideMap::new();
    for entry in subset.entries() {
        for &side in entry.sides() {
            let _ = narrowed.insert(side, edited.get(side).map(str::to_string));
        }
    }
    narrowed
}
