// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG drawing surface.
//!
//! The surface retains payloads from scene diffs and serializes a frame on demand, sampling
//! running transitions and wrapping the chart in the current zoom transform.

use hashbrown::HashMap;
use kurbo::Size;
use peniko::{Brush, Color};
use vizboard_charts::{Theme, ZoomTransform};
use vizboard_core::{MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline, Timeline};

use crate::tooltip::{TOOLTIP_FONT_SIZE, TooltipView};

/// Everything besides the marks that goes into one frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SvgFrame<'a> {
    pub(crate) size: Size,
    pub(crate) theme: Theme,
    pub(crate) zoom: ZoomTransform,
    pub(crate) timeline: &'a Timeline,
    pub(crate) tooltip: Option<&'a TooltipView>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct SvgSurface {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl SvgSurface {
    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id, z_index, new, ..
                } => {
                    self.marks.insert(*id, (*z_index, (**new).clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    ..
                } => {
                    self.marks.insert(*id, (*new_z_index, (**new).clone()));
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    pub(crate) fn to_svg_string(&self, frame: &SvgFrame<'_>) -> String {
        let style = frame.theme.style();
        let (w, h) = (frame.size.width, frame.size.height);
        let mut out = String::new();

        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart {}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            frame.theme
        ));
        out.push('\n');
        out.push_str(&format!(r#"<rect width="{w}" height="{h}""#));
        write_paint_attr(&mut out, "fill", &Brush::Solid(style.background));
        out.push_str("/>\n");

        if frame.zoom.is_identity() {
            out.push_str("<g class=\"plot\">\n");
        } else {
            let z = frame.zoom;
            out.push_str(&format!(
                r#"<g class="plot" transform="matrix({} 0 0 {} {} {})">"#,
                z.k, z.k, z.x, z.y
            ));
            out.push('\n');
        }

        let mut ids: Vec<(i32, MarkId)> = self.marks.iter().map(|(id, (z, _))| (*z, *id)).collect();
        ids.sort();
        for (_, id) in ids {
            if let Some((_, settled)) = self.marks.get(&id) {
                let payload = frame.timeline.sample_payload(id, settled);
                write_mark(&mut out, &payload);
            }
        }
        out.push_str("</g>\n");

        if let Some(tooltip) = frame.tooltip {
            write_tooltip(&mut out, tooltip, style.tooltip_background, style.tooltip_border, style.text);
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_mark(out: &mut String, payload: &MarkPayload) {
    match payload {
        MarkPayload::Rect(r) => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            ));
            write_paint_attr(out, "fill", &r.fill);
            write_opacity(out, r.opacity);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            ));
            if t.angle != 0.0 {
                out.push_str(&format!(
                    r#" transform="rotate({} {} {})""#,
                    t.angle, t.pos.x, t.pos.y
                ));
            }
            out.push_str(anchor_attr(t.anchor));
            write_paint_attr(out, "fill", &t.fill);
            write_opacity(out, t.opacity);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
        MarkPayload::Path(p) => {
            let d = p.path.to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke);
                out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
            }
            if let Some(dash) = p.dash {
                out.push_str(&format!(
                    r#" stroke-dasharray="{} {}" stroke-dashoffset="{}""#,
                    dash.dash, dash.gap, dash.offset
                ));
            }
            write_opacity(out, p.opacity);
            out.push_str("/>\n");
        }
    }
}

fn write_tooltip(
    out: &mut String,
    tooltip: &TooltipView,
    background: Color,
    border: Color,
    text: Color,
) {
    let rect = tooltip.rect();
    out.push_str("<g class=\"tooltip\">\n");
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="4""#,
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    ));
    write_paint_attr(out, "fill", &Brush::Solid(background));
    write_paint_attr(out, "stroke", &Brush::Solid(border));
    out.push_str("/>\n");
    for (i, line) in tooltip.lines.iter().enumerate() {
        let pos = tooltip.line_pos(i);
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{TOOLTIP_FONT_SIZE}" dominant-baseline="middle""#,
            pos.x, pos.y
        ));
        write_paint_attr(out, "fill", &Brush::Solid(text));
        out.push('>');
        match line.label {
            Some(label) => {
                out.push_str(&format!(
                    "{}: <tspan font-weight=\"bold\">{}</tspan>",
                    escape_xml(label),
                    escape_xml(&line.value)
                ));
            }
            None => {
                out.push_str(&format!(
                    "<tspan font-weight=\"bold\">{}</tspan>",
                    escape_xml(&line.value)
                ));
            }
        }
        out.push_str("</text>\n");
    }
    out.push_str("</g>\n");
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => r#" text-anchor="start""#,
        TextAnchor::Middle => r#" text-anchor="middle""#,
        TextAnchor::End => r#" text-anchor="end""#,
    }
}

fn write_opacity(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        out.push_str(&format!(r#" opacity="{opacity}""#));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let alpha = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, alpha)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Rect, Shape};
    use peniko::color::palette::css;
    use vizboard_core::{Dash, Mark, Scene, Transition, Tween};

    use super::*;

    fn frame(timeline: &Timeline, zoom: ZoomTransform) -> SvgFrame<'_> {
        SvgFrame {
            size: Size::new(800.0, 500.0),
            theme: Theme::Dark,
            zoom,
            timeline,
            tooltip: None,
        }
    }

    #[test]
    fn serializes_marks_in_paint_order() {
        let marks = vec![
            Mark::builder(MarkId::from_raw(2))
                .text(kurbo::Point::new(5.0, 6.0), "a < b")
                .z_index(40)
                .build(),
            Mark::builder(MarkId::from_raw(1))
                .rect(Rect::new(0.0, 0.0, 10.0, 20.0))
                .fill(css::STEEL_BLUE)
                .opacity(0.8)
                .build(),
        ];
        let mut scene = Scene::new();
        let mut surface = SvgSurface::default();
        surface.apply_diffs(&scene.rebuild(marks));
        assert_eq!(surface.marks.len(), 2);

        let timeline = Timeline::new();
        let svg = surface.to_svg_string(&frame(&timeline, ZoomTransform::IDENTITY));
        assert!(svg.starts_with("<svg"), "{svg}");
        assert!(svg.contains(r#"class="chart dark""#), "{svg}");
        let rect = svg.find(r#"<rect x="0""#).unwrap();
        let text = svg.find("a &lt; b").unwrap();
        assert!(rect < text, "rect paints before text");
        assert!(svg.contains(r#"opacity="0.8""#), "{svg}");
        assert!(svg.contains(r#"dominant-baseline="alphabetic""#), "{svg}");
        assert!(svg.contains(r#"<g class="plot">"#), "{svg}");
    }

    #[test]
    fn samples_running_transitions() {
        let line = Mark::builder(MarkId::from_raw(7))
            .path(kurbo::Line::new((0.0, 0.0), (100.0, 0.0)).into_path(0.1))
            .stroke(css::RED, 2.0)
            .transition(Transition::new(
                Duration::from_millis(1000),
                Tween::DrawOn { length: 100.0 },
            ))
            .build();
        let mut scene = Scene::new();
        let mut surface = SvgSurface::default();
        surface.apply_diffs(&scene.rebuild(vec![line.clone()]));
        let mut timeline = Timeline::new();
        timeline.restart([&line]);

        let svg = surface.to_svg_string(&frame(&timeline, ZoomTransform::IDENTITY));
        let start = Dash::reveal(100.0, 100.0);
        assert!(
            svg.contains(&format!(r#"stroke-dashoffset="{}""#, start.offset)),
            "{svg}"
        );

        timeline.advance(Duration::from_millis(1000));
        let svg = surface.to_svg_string(&frame(&timeline, ZoomTransform::IDENTITY));
        assert!(!svg.contains("stroke-dashoffset"), "settled lines are solid: {svg}");
    }

    #[test]
    fn zoom_wraps_the_plot_group() {
        let timeline = Timeline::new();
        let zoom = ZoomTransform {
            k: 2.0,
            x: -10.0,
            y: 5.0,
        };
        let svg = SvgSurface::default().to_svg_string(&frame(&timeline, zoom));
        assert!(svg.contains(r#"transform="matrix(2 0 0 2 -10 5)""#), "{svg}");
    }
}
