//! Integration tests for the border controller.

use blockstyle_panels::{
    BorderPanel, CapabilityRegistry, CapabilitySet, DEFAULT_BORDER_STYLE, Entity, EntityId,
    Feature, MemorySettings, MemorySideSubsets, MemoryStyleStore, PanelContext, PropertyPath,
    SettingPath, StyleStore,
};
use blockstyle_values::{Corner, CornerMap, CornerValues, StyleValue};
use serde_json::json;

const GROUP: &str = "core/group";

struct Fixture {
    entity: Entity,
    settings: MemorySettings,
    subsets: MemorySideSubsets,
    capabilities: CapabilityRegistry,
}

impl Fixture {
    fn new() -> Self {
        let mut settings = MemorySettings::new();
        for path in [
            SettingPath::BorderWidth,
            SettingPath::BorderStyle,
            SettingPath::BorderColor,
            SettingPath::BorderRadius,
        ] {
            settings.set(path, json!(true));
        }

        let mut capabilities = CapabilityRegistry::new();
        capabilities.register(GROUP, CapabilitySet::all());

        Self {
            entity: Entity::new("block-1", GROUP),
            settings,
            subsets: MemorySideSubsets::new(),
            capabilities,
        }
    }

    fn ctx(&self) -> PanelContext<'_> {
        PanelContext {
            entity: &self.entity,
            settings: &self.settings,
            subsets: &self.subsets,
            capabilities: &self.capabilities,
        }
    }

    fn id(&self) -> EntityId {
        self.entity.id.clone()
    }
}

#[test]
fn test_width_without_style_sets_default_style() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    let mut panel = BorderPanel::new();

    panel.set_width(&ctx, &mut store, Some("2px"));
    assert_eq!(
        store.get(&fixture.id(), PropertyPath::BorderStyle),
        Some(StyleValue::uniform(DEFAULT_BORDER_STYLE))
    );
    assert_eq!(
        store.get(&fixture.id(), PropertyPath::BorderWidth),
        Some(StyleValue::uniform("2px"))
    );
    let view = panel.view().unwrap();
    assert_eq!(view.style.as_deref(), Some("solid"));
    assert_eq!(view.width.as_deref(), Some("2px"));
}

#[test]
fn test_color_keeps_existing_style() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    store.set(&fixture.id(), PropertyPath::BorderStyle, Some(StyleValue::uniform("dashed")));
    let mut panel = BorderPanel::new();

    panel.set_color(&ctx, &mut store, Some("#333"));
    assert_eq!(
        store.get(&fixture.id(), PropertyPath::BorderStyle),
        Some(StyleValue::uniform("dashed"))
    );
}

#[test]
fn test_color_without_style_sets_default_style() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    let mut panel = BorderPanel::new();

    panel.set_color(&ctx, &mut store, Some("#333"));
    assert_eq!(
        store.get(&fixture.id(), PropertyPath::BorderStyle),
        Some(StyleValue::uniform(DEFAULT_BORDER_STYLE))
    );
    assert_eq!(store.get(&fixture.id(), PropertyPath::BorderWidth), None);
    let view = panel.view().unwrap();
    assert_eq!(view.style.as_deref(), Some("solid"));
    assert_eq!(view.color.as_deref(), Some("#333"));
}

#[test]
fn test_non_scalar_style_is_replaced_by_default() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    store.set(
        &fixture.id(),
        PropertyPath::BorderStyle,
        Some(StyleValue::PerCorner(CornerMap::from([(
            Corner::TopLeft,
            Some("dashed".to_string()),
        )]))),
    );
    let mut panel = BorderPanel::new();

    panel.set_width(&ctx, &mut store, Some("1px"));
    assert_eq!(
        store.get(&fixture.id(), PropertyPath::BorderStyle),
        Some(StyleValue::uniform(DEFAULT_BORDER_STYLE))
    );
}

#[test]
fn test_clearing_width_leaves_style() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    let mut panel = BorderPanel::new();

    panel.set_width(&ctx, &mut store, Some("1px"));
    panel.set_style(&ctx, &mut store, Some("dotted"));
    panel.set_width(&ctx, &mut store, None);

    assert_eq!(store.get(&fixture.id(), PropertyPath::BorderWidth), None);
    assert_eq!(
        store.get(&fixture.id(), PropertyPath::BorderStyle),
        Some(StyleValue::uniform("dotted"))
    );
}

#[test]
fn test_clearing_width_with_no_style_writes_no_style() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    let mut panel = BorderPanel::new();

    panel.set_width(&ctx, &mut store, None);
    assert_eq!(store.get(&fixture.id(), PropertyPath::BorderStyle), None);
}

#[test]
fn test_radius_collapses_to_uniform() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    let mut panel = BorderPanel::new();

    panel.set_radius(&ctx, &mut store, &CornerValues::uniform("6px"));
    assert_eq!(
        store.get(&fixture.id(), PropertyPath::BorderRadius),
        Some(StyleValue::uniform("6px"))
    );
    assert_eq!(panel.view().unwrap().radius, CornerValues::uniform("6px"));

    panel.set_radius_shorthand(&ctx, &mut store, "4px 0").unwrap();
    let Some(StyleValue::PerCorner(corners)) = store.get(&fixture.id(), PropertyPath::BorderRadius)
    else {
        panic!("mixed radii should be stored per corner");
    };
    assert_eq!(corners[&Corner::TopLeft].as_deref(), Some("4px"));
    assert_eq!(corners[&Corner::TopRight].as_deref(), Some("0"));
    assert_eq!(corners[&Corner::BottomRight].as_deref(), Some("4px"));
}

#[test]
fn test_partial_radius_mapping_widens_missing_corners_to_none() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    store.set(
        &fixture.id(),
        PropertyPath::BorderRadius,
        Some(StyleValue::PerCorner(CornerMap::from([(
            Corner::BottomLeft,
            Some("9px".to_string()),
        )]))),
    );

    let mut panel = BorderPanel::new();
    let view = panel.refresh(&ctx, &store).unwrap();
    assert_eq!(view.radius.bottom_left.as_deref(), Some("9px"));
    assert_eq!(view.radius.top_left, None);
}

#[test]
fn test_reset_clears_everything() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    let mut panel = BorderPanel::new();

    panel.set_color(&ctx, &mut store, Some("red"));
    panel.set_radius(&ctx, &mut store, &CornerValues::uniform("3px"));
    assert!(panel.has_value());

    panel.reset(&ctx, &mut store);
    assert!(!panel.has_value());
    assert!(store.properties(&fixture.id()).is_none());
}

#[test]
fn test_hidden_components_are_not_read_or_written() {
    let mut fixture = Fixture::new();
    fixture
        .capabilities
        .register(GROUP, CapabilitySet::new([Feature::BorderRadius]));
    let ctx = fixture.ctx();
    let mut store = MemoryStyleStore::new();
    store.set(&fixture.id(), PropertyPath::BorderColor, Some(StyleValue::uniform("blue")));

    let mut panel = BorderPanel::new();
    assert!(panel.is_visible(&ctx));
    assert_eq!(panel.refresh(&ctx, &store).unwrap().color, None);

    panel.set_width(&ctx, &mut store, Some("5px"));
    assert_eq!(store.get(&fixture.id(), PropertyPath::BorderWidth), None);
    assert_eq!(store.get(&fixture.id(), PropertyPath::BorderStyle), None);
}

#[test]
fn test_nothing_visible_hides_panel() {
    let mut fixture = Fixture::new();
    fixture.settings.set(SettingPath::BorderRadius, json!(false));
    fixture
        .capabilities
        .register(GROUP, CapabilitySet::new([Feature::BorderRadius]));
    let ctx = fixture.ctx();
    let store = MemoryStyleStore::new();

    let mut panel = BorderPanel::new();
    assert!(!panel.is_visible(&ctx));
    assert!(panel.refresh(&ctx, &store).is_none());
}

#[test]
fn test_color_palettes_are_memoized() {
    let mut fixture = Fixture::new();
    fixture.settings.set(
        SettingPath::PaletteTheme,
        json!([{ "name": "Ink", "slug": "ink", "color": "#111" }]),
    );
    let ctx = fixture.ctx();
    let mut panel = BorderPanel::new();

    let first = panel.color_palettes(&ctx);
    let second = panel.color_palettes(&ctx);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].colors[0].slug, "ink");
    assert!(std::rc::Rc::ptr_eq(&first, &second));
}
