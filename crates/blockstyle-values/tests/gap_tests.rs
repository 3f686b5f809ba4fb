//! Integration tests for the row/column gap adapter.

use blockstyle_values::{
    AxisMap, AxisToken, GapAxis, Side, SideSubset, SideSubsetEntry, SideValues, StyleValue,
    filter_gap, split_gap,
};

fn px(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn test_split_gap_per_axis() {
    let stored = StyleValue::PerAxis(AxisMap::from([
        (GapAxis::Row, px("10px")),
        (GapAxis::Column, px("5px")),
    ]));
    let sides = split_gap(Some(&stored));
    assert_eq!(
        sides,
        SideValues {
            top: px("10px"),
            right: px("5px"),
            bottom: px("10px"),
            left: px("5px"),
        }
    );
    assert_eq!(
        filter_gap(&sides, None),
        AxisMap::from([(GapAxis::Row, px("10px")), (GapAxis::Column, px("5px"))])
    );
}

#[test]
fn test_split_gap_uniform_and_absent() {
    assert_eq!(
        split_gap(Some(&StyleValue::uniform("2px"))),
        SideValues::uniform("2px")
    );
    assert_eq!(split_gap(None), SideValues::default());
}

#[test]
fn test_split_gap_missing_axis_is_none() {
    let stored = StyleValue::PerAxis(AxisMap::from([(GapAxis::Column, px("3px"))]));
    let sides = split_gap(Some(&stored));
    assert_eq!(sides.top, None);
    assert_eq!(sides.bottom, None);
    assert_eq!(sides.left, px("3px"));
}

#[test]
fn test_filter_gap_horizontal_only_yields_column() {
    let subset = SideSubset::new(vec![SideSubsetEntry::Axis(AxisToken::Horizontal)]);
    let narrowed = filter_gap(&split_gap(Some(&StyleValue::uniform("2px"))), Some(&subset));
    assert_eq!(narrowed, AxisMap::from([(GapAxis::Column, px("2px"))]));
    assert!(!narrowed.contains_key(&GapAxis::Row));
}

#[test]
fn test_filter_gap_reads_top_and_left_only() {
    let edited = SideValues {
        top: px("1px"),
        right: px("99px"),
        bottom: px("99px"),
        left: px("2px"),
    };
    assert_eq!(
        filter_gap(&edited, None),
        AxisMap::from([(GapAxis::Row, px("1px")), (GapAxis::Column, px("2px"))])
    );
}

#[test]
fn test_filter_gap_ignores_discrete_sides() {
    let subset = SideSubset::new(vec![
        SideSubsetEntry::Side(Side::Top),
        SideSubsetEntry::Axis(AxisToken::Vertical),
        SideSubsetEntry::Side(Side::Left),
    ]);
    let narrowed = filter_gap(&SideValues::uniform("6px"), Some(&subset));
    assert_eq!(narrowed, AxisMap::from([(GapAxis::Row, px("6px"))]));
}
