// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks a [`ChartWidget`] through loading, animation, hover, pan/zoom, theming, filtering,
//! appends, and resizing, and writes every interesting frame to `vizboard_demo.html`.
//!
//! Usage: `vizboard_demo [seed]`. Set `RUST_LOG=debug` to follow the widget's state changes.

mod html;

use core::time::Duration;
use std::error::Error;

use chrono::NaiveDate;
use kurbo::Point;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vizboard::{ChartKind, ChartWidget, WheelDeltaMode, WidgetConfig};

use crate::html::{HtmlFrame, HtmlSection};

const OUTPUT: &str = "vizboard_demo.html";
const SETTLE: Duration = Duration::from_secs(3);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 42,
    };
    let today = NaiveDate::from_ymd_opt(2025, 3, 15).ok_or("invalid demo date")?;
    let mut rng = StdRng::seed_from_u64(seed);
    info!("mock data seed {seed}");

    let mut widget = ChartWidget::new(WidgetConfig::default())?;
    widget.load_mock(10, today, &mut rng)?;

    let mut sections = vec![
        entry_section(&mut widget, ChartKind::Bar, &[0, 200, 400, 1000]),
        entry_section(&mut widget, ChartKind::Line, &[0, 500, 1000, 2000]),
        entry_section(&mut widget, ChartKind::Pie, &[0, 250, 500, 1000]),
    ];
    sections.push(hover_section(&mut widget));
    sections.push(zoom_section(&mut widget));
    sections.push(theme_section(&mut widget));
    sections.push(filter_section(&mut widget));
    sections.push(add_point_section(&mut widget, today, &mut rng)?);
    sections.push(resize_section(&mut widget));

    let html = html::render_report("vizboard demo", &sections);
    std::fs::write(OUTPUT, html)?;
    println!("wrote {OUTPUT}");
    Ok(())
}

fn settled(widget: &mut ChartWidget, caption: impl Into<String>) -> HtmlFrame {
    widget.advance(SETTLE);
    HtmlFrame::new(caption, widget.svg())
}

fn entry_section(widget: &mut ChartWidget, kind: ChartKind, times_ms: &[u64]) -> HtmlSection {
    widget.set_chart_kind(kind);
    let mut now = 0;
    let mut frames = Vec::with_capacity(times_ms.len());
    for &t in times_ms {
        widget.advance(Duration::from_millis(t.saturating_sub(now)));
        now = now.max(t);
        frames.push(HtmlFrame::new(format!("t = {t} ms"), widget.svg()));
    }
    HtmlSection {
        title: kind.label().to_owned(),
        description: format!(
            "Entry transition of the {kind} chart, sampled at fixed instants after the render pass."
        ),
        frames,
    }
}

fn hover_section(widget: &mut ChartWidget) -> HtmlSection {
    let mut frames = Vec::new();
    for kind in ChartKind::ALL {
        widget.set_chart_kind(kind);
        widget.advance(SETTLE);
        // The last region is the tallest bar, the latest marker, or the last slice.
        let Some(target) = widget.hits().last().map(|r| r.shape.center()) else {
            continue;
        };
        widget.pointer_move(target);
        frames.push(HtmlFrame::new(format!("{kind}: hovered"), widget.svg()));
        widget.pointer_leave();
    }
    HtmlSection {
        title: "Hover".to_owned(),
        description: "Hovering highlights the mark under the pointer and shows its tooltip."
            .to_owned(),
        frames,
    }
}

fn zoom_section(widget: &mut ChartWidget) -> HtmlSection {
    widget.set_chart_kind(ChartKind::Line);
    let mut frames = vec![settled(widget, "line: identity")];

    let center = widget.layout().plot.center();
    widget.wheel(center, -300.0, WheelDeltaMode::Pixel);
    frames.push(HtmlFrame::new("wheel zoom in at the plot center", widget.svg()));

    widget.drag_start(center);
    widget.drag_move(center + kurbo::Vec2::new(-120.0, 40.0));
    widget.drag_end();
    frames.push(HtmlFrame::new("dragged left and down", widget.svg()));

    // Pie charts ignore zoom input.
    widget.set_chart_kind(ChartKind::Pie);
    let zoomed = widget.wheel(Point::new(400.0, 250.0), -300.0, WheelDeltaMode::Pixel);
    frames.push(settled(
        widget,
        format!("pie after a wheel event (zoom changed: {zoomed})"),
    ));

    HtmlSection {
        title: "Pan and zoom".to_owned(),
        description: "Wheel zoom anchored at the pointer and drag panning on cartesian charts."
            .to_owned(),
        frames,
    }
}

fn theme_section(widget: &mut ChartWidget) -> HtmlSection {
    widget.set_chart_kind(ChartKind::Bar);
    let mut frames = Vec::new();
    for _ in 0..2 {
        let theme = widget.toggle_theme();
        frames.push(settled(widget, format!("{theme} theme")));
    }
    HtmlSection {
        title: "Themes".to_owned(),
        description: "Toggling the theme re-renders with new colors and the same geometry."
            .to_owned(),
        frames,
    }
}

fn filter_section(widget: &mut ChartWidget) -> HtmlSection {
    let mut frames = Vec::new();
    let first = widget.categories().iter().next().map(str::to_owned);
    if let Some(category) = first {
        widget.toggle_category_filter(&category);
        frames.push(settled(widget, format!("only {category}")));
        widget.set_chart_kind(ChartKind::Pie);
        frames.push(settled(widget, format!("pie of {category}")));
        widget.toggle_category_filter(&category);
        frames.push(settled(widget, "filter cleared"));
    }
    HtmlSection {
        title: "Category filter".to_owned(),
        description: "Checked categories restrict the chart; none checked shows everything."
            .to_owned(),
        frames,
    }
}

fn add_point_section(
    widget: &mut ChartWidget,
    today: NaiveDate,
    rng: &mut StdRng,
) -> Result<HtmlSection, Box<dyn Error>> {
    widget.set_chart_kind(ChartKind::Bar);
    let mut frames = Vec::new();
    for _ in 0..3 {
        let id = widget.add_point_on(today, rng)?;
        frames.push(settled(widget, format!("added id {id}")));
    }
    Ok(HtmlSection {
        title: "Adding points".to_owned(),
        description: "Each appended record takes the next id and today's date.".to_owned(),
        frames,
    })
}

fn resize_section(widget: &mut ChartWidget) -> HtmlSection {
    let mut frames = Vec::new();
    for container in [1000.0, 400.0, 800.0] {
        widget.resize(container);
        let width = widget.size().width;
        frames.push(settled(
            widget,
            format!("container {container}px, drawing {width}px"),
        ));
    }
    HtmlSection {
        title: "Resize".to_owned(),
        description: "The drawing follows the container width, never narrower than 600px."
            .to_owned(),
        frames,
    }
}
