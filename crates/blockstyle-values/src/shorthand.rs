//! CSS 1-4 value shorthand expansion.
//!
//! [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
//! [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
//!
//! Lets a panel accept a typed shorthand such as `"4px 8px"` and feed it
//! through the same narrowing path as an edge-by-edge edit.

use crate::error::TokenError;
use crate::value::{CornerValues, SideValues};

/// Split a shorthand into its 1-4 whitespace separated components.
fn components(shorthand: &str) -> Result<Vec<&str>, TokenError> {
    let parts: Vec<&str> = shorthand.split_whitespace().collect();
    if (1..=4).contains(&parts.len()) {
        Ok(parts)
    } else {
        Err(TokenError::ShorthandArity(shorthand.to_string()))
    }
}

/// Expand a box shorthand into four edges.
///
/// "If there is only one component value, it applies to all sides.
/// If there are two values, the top and bottom margins are set to the
/// first value and the right and left margins are set to the second.
/// If there are three values, the top is set to the first value, the
/// left and right are set to the second, and the bottom is set to the
/// third. If there are four values, they apply to the top, right,
/// bottom, and left, respectively."
///
/// # Errors
///
/// Returns [`TokenError::ShorthandArity`] for an empty shorthand or one with
/// more than four components.
pub fn expand_sides(shorthand: &str) -> Result<SideValues, TokenError> {
    let parts = components(shorthand)?;
    let [top, right, bottom, left] = match parts.as_slice() {
        [all] => [*all; 4],
        [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
        [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
        [top, right, bottom, left] => [*top, *right, *bottom, *left],
        _ => return Err(TokenError::ShorthandArity(shorthand.to_string())),
    };
    Ok(SideValues {
        top: Some(top.to_string()),
        right: Some(right.to_string()),
        bottom: Some(bottom.to_string()),
        left: Some(left.to_string()),
    })
}

/// Expand a `border-radius` shorthand into four corners.
///
/// "If bottom-left is omitted it is the same as top-right. If bottom-right is
/// omitted it is the same as top-left. If top-right is omitted it is the same
/// as top-left."
///
/// # Errors
///
/// Returns [`TokenError::ShorthandArity`] for an empty shorthand or one with
/// more than four components.
pub fn expand_corners(shorthand: &str) -> Result<CornerValues, TokenError> {
    let parts = components(shorthand)?;
    let [top_left, top_right, bottom_right, bottom_left] = match parts.as_slice() {
        [all] => [*all; 4],
        [first, second] => [*first, *second, *first, *second],
        [first, second, third] => [*first, *second, *third, *second],
        [first, second, third, fourth] => [*first, *second, *third, *fourth],
        _ => return Err(TokenError::ShorthandArity(shorthand.to_string())),
    };
    Ok(CornerValues {
        top_left: Some(top_left.to_string()),
        top_right: Some(top_right.to_string()),
        bottom_right: Some(bottom_right.to_string()),
        bottom_left: Some(bottom_left.to_string()),
    })
}
