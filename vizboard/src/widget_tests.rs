// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use chrono::NaiveDate;
use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vizboard_core::{MarkId, MarkPayload};

use crate::{ChartKind, ChartWidget, Record, Theme, WheelDeltaMode, WidgetConfig, WidgetError};

fn two_records() -> Vec<Record> {
    vec![
        Record::new(0, "Item 1", 50.0, "Product A", "2025-01-01"),
        Record::new(1, "Item 2", 30.0, "Product B", "2025-01-02"),
    ]
}

fn loaded(kind: ChartKind) -> ChartWidget {
    let mut widget = ChartWidget::new(WidgetConfig::default()).unwrap();
    widget.load(two_records()).unwrap();
    widget.set_chart_kind(kind);
    widget
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

fn hit_center(widget: &ChartWidget, i: usize) -> Point {
    widget.hits()[i].shape.center()
}

fn scene_opacity(widget: &ChartWidget, id: MarkId) -> f64 {
    widget.scene().get(id).unwrap().payload.opacity()
}

#[test]
fn starts_as_an_empty_light_bar_chart() {
    let widget = ChartWidget::new(WidgetConfig::default()).unwrap();
    assert_eq!(widget.chart_kind(), ChartKind::Bar);
    assert_eq!(widget.theme(), Theme::Light);
    assert!(widget.marks().is_empty());
    assert!(widget.scene().is_empty());
    assert!(!widget.is_animating());
    let svg = widget.svg();
    assert!(svg.contains(r#"class="chart light" width="800" height="500""#), "{svg}");
}

#[test]
fn invalid_config_is_rejected() {
    let config = WidgetConfig::default().with_zoom_extent(2.0, 1.0);
    assert!(matches!(
        ChartWidget::new(config),
        Err(WidgetError::Config(_))
    ));
}

#[test]
fn duplicate_ids_leave_the_widget_unchanged() {
    let mut widget = loaded(ChartKind::Bar);
    let before = widget.marks().to_vec();
    let mut dup = two_records();
    dup[1].id = 0;
    assert!(matches!(widget.load(dup), Err(WidgetError::Data(_))));
    assert_eq!(widget.dataset().len(), 2);
    assert_eq!(widget.marks(), before.as_slice());
}

#[test]
fn added_points_take_the_next_id() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut widget = ChartWidget::new(WidgetConfig::default()).unwrap();
    assert_eq!(widget.add_point_on(day(), &mut rng).unwrap(), 0);
    assert_eq!(widget.add_point_on(day(), &mut rng).unwrap(), 1);
    assert_eq!(widget.dataset().len(), 2);
    let last = &widget.dataset().records()[1];
    assert_eq!(last.name, "Item 2");
    assert_eq!(last.date, "2025-01-10");
}

#[test]
fn categories_are_frozen_at_load() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut widget = loaded(ChartKind::Bar);
    for _ in 0..20 {
        widget.add_point_on(day(), &mut rng).unwrap();
    }
    assert_eq!(widget.dataset().len(), 22);
    assert_eq!(widget.categories().as_slice(), ["Product A", "Product B"]);
    assert!(
        widget
            .dataset()
            .iter()
            .any(|r| r.category != "Product A" && r.category != "Product B"),
        "seed 5 should produce an unseen category"
    );
}

#[test]
fn mock_load_replaces_the_category_list() {
    let mut widget = loaded(ChartKind::Bar);
    widget
        .load_mock(10, day(), &mut StdRng::seed_from_u64(2))
        .unwrap();
    assert_eq!(widget.dataset().len(), 10);
    assert_eq!(widget.categories(), &widget.dataset().categories());
}

#[test]
fn filtering_selects_matching_records() {
    let mut widget = loaded(ChartKind::Bar);
    assert!(widget.toggle_category_filter("Product A"));
    let ids: Vec<u64> = widget.displayed_records().iter().map(|r| r.id).collect();
    assert_eq!(ids, [0]);
    assert_eq!(widget.hits().len(), 1);

    let panel = widget.control_panel();
    let checked: Vec<(&str, bool)> = panel
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.checked))
        .collect();
    assert_eq!(checked, [("Product A", true), ("Product B", false)]);

    assert!(!widget.toggle_category_filter("Product A"));
    assert_eq!(widget.displayed_records().len(), 2);
}

#[test]
fn control_panel_marks_the_active_kind() {
    let mut widget = loaded(ChartKind::Line);
    let panel = widget.control_panel();
    let active: Vec<&str> = panel
        .chart_kinds
        .iter()
        .filter(|k| k.active)
        .map(|k| k.label)
        .collect();
    assert_eq!(active, ["Line Chart"]);
    assert_eq!(panel.theme_toggle, "Dark Mode");
    widget.toggle_theme();
    assert_eq!(widget.control_panel().theme_toggle, "Light Mode");
}

#[test]
fn theme_toggle_keeps_geometry_and_zoom() {
    let mut widget = loaded(ChartKind::Bar);
    assert!(widget.wheel(Point::new(400.0, 250.0), -500.0, WheelDeltaMode::Pixel));
    let zoom = widget.zoom_transform();
    let before: Vec<(MarkId, Option<kurbo::Rect>)> =
        widget.marks().iter().map(|m| (m.id, m.bounds())).collect();

    assert_eq!(widget.toggle_theme(), Theme::Dark);
    let after: Vec<(MarkId, Option<kurbo::Rect>)> =
        widget.marks().iter().map(|m| (m.id, m.bounds())).collect();
    assert_eq!(before, after);
    assert_eq!(widget.zoom_transform(), zoom, "theme changes keep the zoom");
    assert!(widget.svg().contains(r#"class="chart dark""#));
}

#[test]
fn chart_kind_names() {
    let mut widget = loaded(ChartKind::Line);
    assert_eq!(widget.select_chart_kind("scatter"), ChartKind::Bar);
    assert_eq!(widget.chart_kind(), ChartKind::Bar);

    widget.try_set_chart_kind("pie").unwrap();
    assert_eq!(widget.chart_kind(), ChartKind::Pie);
    let err = widget.try_set_chart_kind("donut").unwrap_err();
    assert!(matches!(err, WidgetError::UnknownChartKind(ref s) if s == "donut"));
    assert_eq!(widget.chart_kind(), ChartKind::Pie);

    assert!(matches!(
        widget.set_theme_str("sepia"),
        Err(WidgetError::UnknownTheme(_))
    ));
    widget.set_theme_str("dark").unwrap();
    assert_eq!(widget.theme(), Theme::Dark);
}

#[test]
fn resize_floors_the_width() {
    let mut widget = loaded(ChartKind::Bar);
    assert!(widget.resize(500.0));
    assert_eq!(widget.size().width, 600.0);
    assert_eq!(widget.layout().plot.x1, 550.0);
    assert!(!widget.resize(320.0), "still floored at 600");
    assert!(widget.svg().contains(r#"width="600" height="500""#));
    assert!(widget.resize(1000.0));
    assert_eq!(widget.size().height, 500.0);
}

#[test]
fn hovering_a_bar_shows_its_tooltip() {
    let mut widget = loaded(ChartKind::Bar);
    // Bars are value-ascending: Item 2, then Item 1.
    let pointer = hit_center(&widget, 1);
    let bar = widget.hits()[1].mark;

    assert!(widget.pointer_move(pointer));
    assert!(!widget.pointer_move(pointer + kurbo::Vec2::new(1.0, 0.0)), "same bar");
    let tooltip = widget.tooltip().unwrap();
    assert_eq!(tooltip.name, "Item 1");
    assert_eq!(tooltip.value, 50.0);
    assert_eq!(tooltip.screen, pointer);
    assert_eq!(widget.hovered(), Some(bar));
    assert_eq!(scene_opacity(&widget, bar), 0.8);

    let svg = widget.svg();
    assert!(svg.contains(r#"<g class="tooltip">"#), "{svg}");
    assert!(svg.contains("Category: <tspan"), "{svg}");

    assert!(widget.pointer_leave());
    assert!(widget.tooltip().is_none());
    assert_eq!(scene_opacity(&widget, bar), 1.0);
    assert!(!widget.svg().contains("class=\"tooltip\""));
}

#[test]
fn hover_keeps_entry_transitions_running() {
    let mut widget = loaded(ChartKind::Bar);
    widget.advance(Duration::from_millis(200));
    widget.pointer_move(hit_center(&widget, 0));
    assert!(widget.is_animating());
    widget.advance(Duration::from_millis(1000));
    assert!(!widget.is_animating());
}

#[test]
fn hover_maps_the_pointer_through_the_zoom() {
    let mut widget = loaded(ChartKind::Bar);
    let chart_point = hit_center(&widget, 0);
    assert!(widget.wheel(Point::new(400.0, 250.0), -500.0, WheelDeltaMode::Pixel));
    let zoom = widget.zoom_transform();
    assert!((zoom.k - 2.0).abs() < 1e-9);

    let screen = zoom.apply(chart_point);
    assert!(widget.pointer_move(screen));
    assert_eq!(widget.tooltip().unwrap().name, "Item 2");
    assert!(widget.svg().contains("matrix(2 0 0 2"));
}

#[test]
fn hovering_a_marker_grows_it() {
    let mut widget = loaded(ChartKind::Line);
    let marker = widget.hits()[0].mark;
    let resting = widget.scene().get(marker).unwrap().bounds().unwrap();
    assert!((resting.width() - 10.0).abs() < 0.5);

    assert!(widget.pointer_move(hit_center(&widget, 0)));
    let hovered = widget.scene().get(marker).unwrap().bounds().unwrap();
    assert!((hovered.width() - 16.0).abs() < 0.5, "{hovered:?}");
    let tooltip = widget.tooltip().unwrap();
    assert_eq!(tooltip.date, NaiveDate::from_ymd_opt(2025, 1, 1));
}

#[test]
fn pie_ignores_zoom_and_reports_percentages() {
    let mut widget = loaded(ChartKind::Pie);
    assert!(!widget.wheel(Point::new(400.0, 250.0), -500.0, WheelDeltaMode::Pixel));
    assert!(!widget.drag_start(Point::new(400.0, 250.0)));
    assert!(widget.zoom_transform().is_identity());

    assert!(widget.pointer_move(hit_center(&widget, 1)));
    let tooltip = widget.tooltip().unwrap();
    assert_eq!(tooltip.name, "Product B");
    assert_eq!(tooltip.percentage.as_deref(), Some("37.5"));
    let slice = widget.hits()[1].mark;
    assert_eq!(scene_opacity(&widget, slice), 1.0);
    assert_eq!(widget.marks().iter().find(|m| m.id == slice).unwrap().payload.opacity(), 0.7);
}

#[test]
fn zoom_resets_when_kind_or_data_change() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut widget = loaded(ChartKind::Bar);

    assert!(widget.drag_start(Point::new(100.0, 100.0)));
    assert!(widget.drag_move(Point::new(130.0, 90.0)));
    widget.drag_end();
    assert_eq!(widget.zoom_transform().x, 30.0);
    assert!(widget.resize(1000.0));
    assert_eq!(widget.zoom_transform().x, 30.0, "resizing keeps the zoom");

    widget.add_point_on(day(), &mut rng).unwrap();
    assert!(widget.zoom_transform().is_identity(), "new data resets the zoom");

    widget.wheel(Point::ZERO, -100.0, WheelDeltaMode::Line);
    assert!(!widget.zoom_transform().is_identity());
    widget.set_chart_kind(ChartKind::Line);
    assert!(widget.zoom_transform().is_identity(), "new kind resets the zoom");
}

#[test]
fn filter_toggle_reinstalls_zoom() {
    let mut widget = loaded(ChartKind::Bar);
    assert!(widget.wheel(Point::new(400.0, 250.0), -500.0, WheelDeltaMode::Pixel));
    assert!(!widget.zoom_transform().is_identity());

    widget.toggle_category_filter("Product A");
    assert_eq!(widget.displayed_records().len(), 1);
    assert!(
        widget.zoom_transform().is_identity(),
        "a new displayed set starts unzoomed"
    );

    assert!(widget.wheel(Point::new(400.0, 250.0), -500.0, WheelDeltaMode::Pixel));
    widget.toggle_category_filter("Product A");
    assert_eq!(widget.displayed_records().len(), 2);
    assert!(widget.zoom_transform().is_identity());
}

#[test]
fn empty_charts_ignore_zoom_input() {
    let mut widget = ChartWidget::new(WidgetConfig::default()).unwrap();
    assert!(!widget.wheel(Point::new(400.0, 250.0), -500.0, WheelDeltaMode::Pixel));
    assert!(!widget.drag_start(Point::new(400.0, 250.0)));
    assert!(!widget.drag_move(Point::new(450.0, 260.0)));
    assert!(widget.zoom_transform().is_identity());

    let mut widget = loaded(ChartKind::Line);
    widget.toggle_category_filter("Product C");
    assert!(widget.marks().is_empty());
    assert!(!widget.wheel(Point::new(400.0, 250.0), -500.0, WheelDeltaMode::Pixel));
    assert!(widget.zoom_transform().is_identity());
}

#[test]
fn frames_follow_the_clock() {
    let mut widget = loaded(ChartKind::Line);
    assert!(widget.is_animating());
    let first = widget.svg();
    assert!(first.contains("stroke-dashoffset"), "lines start hidden");

    widget.advance(Duration::from_millis(1999));
    assert!(widget.is_animating());
    widget.advance(Duration::from_millis(1));
    assert!(!widget.is_animating());
    let settled = widget.svg();
    assert!(!settled.contains("stroke-dashoffset"), "{settled}");
}

#[test]
fn bars_grow_from_the_baseline() {
    let widget = loaded(ChartKind::Bar);
    let bar = widget.hits()[0].mark;
    let svg = widget.svg();
    let settled = match &widget.marks().iter().find(|m| m.id == bar).unwrap().payload {
        MarkPayload::Rect(r) => r.rect,
        _ => panic!("bars are rects"),
    };
    assert!(
        svg.contains(&format!(r#"y="{}" width="{}" height="0""#, settled.y1, settled.width())),
        "{svg}"
    );
}

#[test]
fn re_rendering_drops_the_tooltip() {
    let mut widget = loaded(ChartKind::Bar);
    widget.pointer_move(hit_center(&widget, 0));
    assert!(widget.tooltip().is_some());
    widget.toggle_theme();
    assert!(widget.tooltip().is_none());
    assert_eq!(widget.hovered(), None);
}

#[test]
fn empty_filter_result_draws_nothing() {
    let mut widget = loaded(ChartKind::Pie);
    widget.toggle_category_filter("Product C");
    assert!(widget.displayed_records().is_empty());
    assert!(widget.marks().is_empty());
    assert!(!widget.svg().contains("<path"));
}
