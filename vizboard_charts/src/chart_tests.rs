// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use peniko::Brush;
use vizboard_core::{Mark, MarkDiff, MarkId, MarkPayload, Scene, TextAnchor, Timeline};
use vizboard_data::Record;

use crate::{
    ChartContext, ChartKind, ChartLayout, HitShape, HoverEffect, Margins, Size, Theme,
    X_AXIS_ID_BASE, bar_scales, hit_test, render,
};

fn two_records() -> Vec<Record> {
    vec![
        Record::new(0, "Item 1", 50.0, "Product A", "2025-01-01"),
        Record::new(1, "Item 2", 30.0, "Product B", "2025-01-02"),
    ]
}

fn ctx(theme: Theme) -> ChartContext {
    ChartContext::new(
        ChartLayout::arrange(Size::new(800.0, 500.0), Margins::default()),
        theme,
    )
}

fn texts(marks: &[Mark]) -> Vec<(MarkId, String)> {
    marks
        .iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Text(t) => Some((m.id, t.text.clone())),
            _ => None,
        })
        .collect()
}

fn without_colors(marks: &[Mark]) -> Vec<Mark> {
    marks
        .iter()
        .cloned()
        .map(|mut m| {
            match &mut m.payload {
                MarkPayload::Rect(r) => r.fill = Brush::default(),
                MarkPayload::Path(p) => {
                    p.fill = Brush::default();
                    p.stroke = Brush::default();
                }
                MarkPayload::Text(t) => t.fill = Brush::default(),
            }
            m
        })
        .collect()
}

#[test]
fn pie_of_two_records_splits_sixty_two_point_five() {
    let out = render(ChartKind::Pie, &two_records(), &ctx(Theme::Light));
    let values: Vec<f64> = out.hits.iter().map(|h| h.tooltip.value).collect();
    assert_eq!(values, [50.0, 30.0]);
    let percentages: Vec<&str> = out
        .hits
        .iter()
        .filter_map(|h| h.tooltip.percentage.as_deref())
        .collect();
    assert_eq!(percentages, ["62.5", "37.5"]);
    assert!(out.hits.iter().all(|h| h.hover == HoverEffect::Opacity(1.0)));
}

#[test]
fn bar_axis_lists_names_by_ascending_value() {
    let out = render(ChartKind::Bar, &two_records(), &ctx(Theme::Light));
    let axis_labels: Vec<String> = texts(&out.marks)
        .into_iter()
        .filter(|(id, _)| (X_AXIS_ID_BASE + 1000..X_AXIS_ID_BASE + 9000).contains(&id.0))
        .map(|(_, t)| t)
        .collect();
    assert_eq!(axis_labels, ["Item 2", "Item 1"]);

    let hovered: Vec<&str> = out.hits.iter().map(|h| h.tooltip.name.as_str()).collect();
    assert_eq!(hovered, ["Item 2", "Item 1"]);
}

#[test]
fn value_axis_tops_out_ten_percent_above_the_maximum() {
    let records = two_records();
    let (_, y) = bar_scales(&records, ctx(Theme::Light).plot());
    assert_eq!(y.domain(), (0.0, 50.0 * 1.1));
}

#[test]
fn theme_changes_only_colors() {
    for kind in ChartKind::ALL {
        let light = render(kind, &two_records(), &ctx(Theme::Light));
        let dark = render(kind, &two_records(), &ctx(Theme::Dark));
        assert_ne!(light.marks, dark.marks, "{kind}: colors should differ");
        assert_eq!(
            without_colors(&light.marks),
            without_colors(&dark.marks),
            "{kind}: geometry and text should match"
        );
        assert_eq!(light.hits, dark.hits, "{kind}: tooltips should match");
    }
}

#[test]
fn empty_records_render_nothing() {
    for kind in ChartKind::ALL {
        assert!(render(kind, &[], &ctx(Theme::Light)).is_empty());
    }
}

#[test]
fn bar_labels_and_bars_animate_independently() {
    let out = render(ChartKind::Bar, &two_records(), &ctx(Theme::Light));
    let mut timeline = Timeline::new();
    timeline.restart(&out.marks);
    timeline.advance(core::time::Duration::from_millis(800));

    let bar = out.marks.iter().find(|m| m.id == out.hits[0].mark).unwrap();
    assert_eq!(timeline.sample(bar), bar.payload, "bars settle at 800ms");

    let label = out
        .marks
        .iter()
        .find(|m| m.transition.is_some() && matches!(&m.payload, MarkPayload::Text(t) if t.text == "30"))
        .unwrap();
    let sampled = timeline.sample(label).opacity();
    assert!(sampled > 0.0 && sampled < 1.0, "labels still fading: {sampled}");
}

#[test]
fn line_chart_skips_bad_dates_and_draws_one_line_per_category() {
    let mut records = two_records();
    records.push(Record::new(2, "Item 3", 40.0, "Product A", "2025-01-05"));
    records.push(Record::new(3, "Item 4", 20.0, "Product B", "not a date"));
    let out = render(ChartKind::Line, &records, &ctx(Theme::Light));

    assert_eq!(out.hits.len(), 3, "one marker per parseable record");
    let lines = out
        .marks
        .iter()
        .filter(|m| m.transition.is_some() && matches!(m.payload, MarkPayload::Path(_)))
        .count();
    assert_eq!(lines, 2);
    let dated = out.hits.iter().filter(|h| h.tooltip.date.is_some()).count();
    assert_eq!(dated, 3);
    assert!(matches!(out.hits[0].hover, HoverEffect::Radius { radius, .. } if radius == 8.0));
}

#[test]
fn hovering_a_bar_reports_its_record() {
    let out = render(ChartKind::Bar, &two_records(), &ctx(Theme::Light));
    let HitShape::Rect(rect) = out.hits[1].shape else {
        panic!("bars hit as rects");
    };
    let hit = hit_test(&out.hits, rect.center()).unwrap();
    assert_eq!(hit.tooltip.name, "Item 1");
    assert_eq!(hit.tooltip.category.as_deref(), Some("Product A"));
    assert!(hit_test(&out.hits, Point::new(1.0, 1.0)).is_none());
}

#[test]
fn pie_labels_sit_on_the_side_of_their_slice() {
    let out = render(ChartKind::Pie, &two_records(), &ctx(Theme::Light));
    let anchors: Vec<(String, TextAnchor)> = out
        .marks
        .iter()
        .filter_map(|m| match &m.payload {
            MarkPayload::Text(t) if m.id.0 >= 1 << 63 => Some((t.text.clone(), t.anchor)),
            _ => None,
        })
        .collect();
    // Product A spans 0..225 degrees (mid 112.5), Product B 225..360 (mid 292.5).
    assert_eq!(
        anchors,
        [
            ("Product A".to_owned(), TextAnchor::Start),
            ("Product B".to_owned(), TextAnchor::End)
        ]
    );
}

#[test]
fn scene_enters_every_mark_once() {
    let out = render(ChartKind::Line, &two_records(), &ctx(Theme::Dark));
    let mut scene = Scene::new();
    let diffs = scene.rebuild(out.marks.clone());
    assert_eq!(diffs.len(), out.marks.len());
    assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));
}
