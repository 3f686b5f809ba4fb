//! Box edges, axis groupings, and side subsets.
//!
//! A side subset names which edges of a box-model property a block lets the
//! user configure independently. Entries are either a single physical edge or
//! an axis token that groups two opposite edges.

use std::fmt;
use std::str::FromStr;

use blockstyle_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::TokenError;

/// Physical edge of a box.
///
/// Declaration order is the canonical iteration order: top, right, bottom,
/// left (the same order the CSS 1-4 value shorthand uses).
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
pub enum Side {
    /// Top edge of the box
    Top,
    /// Right edge of the box
    Right,
    /// Bottom edge of the box
    Bottom,
    /// Left edge of the box
    Left,
}

impl Side {
    /// All four edges in canonical order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The axis this edge belongs to.
    #[must_use]
    pub const fn axis(self) -> AxisToken {
        match self {
            Self::Top | Self::Bottom => AxisToken::Vertical,
            Self::Left | Self::Right => AxisToken::Horizontal,
        }
    }
}

/// A named pairing of two opposite edges.
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
pub enum AxisToken {
    /// Left and right edges.
    Horizontal,
    /// Top and bottom edges.
    Vertical,
}

impl AxisToken {
    /// The two member edges of this axis.
    #[must_use]
    pub const fn sides(self) -> &'static [Side; 2] {
        match self {
            Self::Horizontal => &[Side::Left, Side::Right],
            Self::Vertical => &[Side::Top, Side::Bottom],
        }
    }
}

/// The complete set of axis tokens.
pub const AXIS_TOKENS: [AxisToken; 2] = [AxisToken::Horizontal, AxisToken::Vertical];

/// Corner of a box, used by `border-radius`.
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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Corner {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-right corner
    BottomRight,
    /// Bottom-left corner
    BottomLeft,
}

impl Corner {
    /// All four corners in `border-radius` shorthand order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];
}

/// One entry of a side subset: a discrete edge or an axis group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SideSubsetEntry {
    /// A single edge configured on its own.
    Side(Side),
    /// Two opposite edges configured together.
    Axis(AxisToken),
}

impl SideSubsetEntry {
    /// The edges this entry covers when narrowing.
    ///
    /// An axis always yields exactly its two member edges.
    #[must_use]
    pub const fn sides(self) -> &'static [Side] {
        match self {
            Self::Axis(axis) => axis.sides(),
            Self::Side(Side::Top) => &[Side::Top],
            Self::Side(Side::Right) => &[Side::Right],
            Self::Side(Side::Bottom) => &[Side::Bottom],
            Self::Side(Side::Left) => &[Side::Left],
        }
    }
}

impl fmt::Display for SideSubsetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Side(side) => f.write_str(side.as_ref()),
            Self::Axis(axis) => f.write_str(axis.as_ref()),
        }
    }
}

impl FromStr for SideSubsetEntry {
    type Err = TokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Ok(axis) = AxisToken::from_str(token) {
            return Ok(Self::Axis(axis));
        }
        Side::from_str(token)
            .map(Self::Side)
            .map_err(|_: strum::ParseError| TokenError::UnknownSideToken(token.to_string()))
    }
}

impl TryFrom<String> for SideSubsetEntry {
    type Error = TokenError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<SideSubsetEntry> for String {
    fn from(entry: SideSubsetEntry) -> Self {
        entry.to_string()
    }
}

impl From<Side> for SideSubsetEntry {
    fn from(side: Side) -> Self {
        Self::Side(side)
    }
}

impl From<AxisToken> for SideSubsetEntry {
    fn from(axis: AxisToken) -> Self {
        Self::Axis(axis)
    }
}

/// Ordered list of the edges (or edge groups) a block lets the user set.
///
/// The absence of a subset (`Option::None` wherever one is accepted) means
/// every edge is configurable on its own.
///
/// Deserializing goes through [`SideSubset::from_tokens`], so unknown tokens
/// are skipped rather than failing the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct SideSubset(Vec<SideSubsetEntry>);

impl SideSubset {
    /// Create a subset from already-typed entries.
    #[must_use]
    pub const fn new(entries: Vec<SideSubsetEntry>) -> Self {
        Self(entries)
    }

    /// Build a subset from raw configuration tokens.
    ///
    /// Tokens that name neither an edge nor an axis are skipped with a
    /// one-time warning; the remaining entries keep their relative order.
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = tokens
            .into_iter()
            .filter_map(|token| match token.as_ref().parse::<SideSubsetEntry>() {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn_once("Subset", &err.to_string());
                    None
                }
            })
            .collect();
        Self(entries)
    }

    /// The entries in configuration order.
    #[must_use]
    pub fn entries(&self) -> &[SideSubsetEntry] {
        &self.0
    }

    /// Returns true if the subset has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if at least one entry is an axis token.
    ///
    /// Purely presentational: panels use it to pick a split-by-axis layout.
    #[must_use]
    pub fn is_axial(&self) -> bool {
        self.0
            .iter()
            .any(|entry| matches!(entry, SideSubsetEntry::Axis(_)))
    }

    /// Returns true if narrowing with this subset keeps `side`.
    #[must_use]
    pub fn covers(&self, side: Side) -> bool {
        self.0.iter().any(|entry| entry.sides().contains(&side))
    }
}

impl From<Vec<String>> for SideSubset {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl FromIterator<SideSubsetEntry> for SideSubset {
    fn from_iter<T: IntoIterator<Item = SideSubsetEntry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
