// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use chrono::NaiveDate;
use kurbo::Point;
use log::{debug, trace, warn};
use rand::Rng;
use vizboard_charts::{
    ChartContext, ChartKind, ChartLayout, ChartRender, HeuristicTextMeasurer, HitRegion, Size,
    TextMeasurer, Theme, TooltipPayload, WheelDeltaMode, ZoomBehavior, ZoomTransform, hit_test,
    render,
};
use vizboard_core::{Mark, MarkId, Scene, Timeline};
use vizboard_data::{CategorySet, Dataset, FilterSet, Record, mock};

use crate::config::WidgetConfig;
use crate::control::{CategoryOption, ControlPanel};
use crate::error::Result;
use crate::svg::{SvgFrame, SvgSurface};
use crate::tooltip::TooltipView;

/// An interactive bar, line, or pie chart over a dataset.
///
/// The widget owns every piece of state: records, the category list frozen at load, the filter
/// set, theme, chart kind, drawing width, the zoom transform, and the hover state. Any change to
/// data, theme, kind, filter, or width runs a render pass that rebuilds every mark and restarts
/// entry transitions; hover and zoom only touch the current frame.
///
/// The host drives time with [`advance`](Self::advance) and reads frames with
/// [`svg`](Self::svg).
#[derive(Debug)]
pub struct ChartWidget {
    config: WidgetConfig,
    dataset: Dataset,
    categories: CategorySet,
    filter: FilterSet,
    // Bumped on every filter toggle.
    filter_generation: u64,
    theme: Theme,
    kind: ChartKind,
    width: f64,
    layout: ChartLayout,
    chart: ChartRender,
    scene: Scene,
    surface: SvgSurface,
    timeline: Timeline,
    zoom: ZoomBehavior,
    zoom_owner: Option<ZoomOwner>,
    hovered: Option<MarkId>,
    tooltip: Option<TooltipPayload>,
}

/// What the zoom handler was installed for: the chart kind and the displayed records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ZoomOwner {
    kind: ChartKind,
    version: u64,
    filter_generation: u64,
}

impl ChartWidget {
    /// Creates an empty light-theme bar chart.
    pub fn new(config: WidgetConfig) -> Result<Self> {
        config.validate()?;
        let width = config.clamp_width(config.width);
        let layout = ChartLayout::arrange(Size::new(width, config.height), config.margins);
        let mut widget = Self {
            config,
            dataset: Dataset::new(),
            categories: CategorySet::default(),
            filter: FilterSet::new(),
            filter_generation: 0,
            theme: Theme::default(),
            kind: ChartKind::default(),
            width,
            layout,
            chart: ChartRender::default(),
            scene: Scene::new(),
            surface: SvgSurface::default(),
            timeline: Timeline::new(),
            zoom: ZoomBehavior::new(config.zoom_extent),
            zoom_owner: None,
            hovered: None,
            tooltip: None,
        };
        widget.render_pass();
        Ok(widget)
    }

    /// Replaces every record and freezes the category list to the new records.
    ///
    /// On error (duplicate ids) nothing changes.
    pub fn load(&mut self, records: Vec<Record>) -> Result<()> {
        self.dataset.replace(records)?;
        self.categories = self.dataset.categories();
        debug!(
            "loaded {} records in {} categories",
            self.dataset.len(),
            self.categories.len()
        );
        self.render_pass();
        Ok(())
    }

    /// Loads `count` random records dated within the 30 days ending at `today`.
    pub fn load_mock(&mut self, count: usize, today: NaiveDate, rng: &mut impl Rng) -> Result<()> {
        let generated = mock::generate(count, today, rng);
        self.load(generated.records().to_vec())
    }

    /// Appends a random record dated today. Returns its id.
    pub fn add_point(&mut self, rng: &mut impl Rng) -> Result<u64> {
        self.add_point_on(mock::today(), rng)
    }

    /// Appends a random record dated `date`. Returns its id.
    ///
    /// The category list stays as loaded, even if the new record brings an unseen category.
    pub fn add_point_on(&mut self, date: NaiveDate, rng: &mut impl Rng) -> Result<u64> {
        let record = mock::next_point(&self.dataset, date, rng);
        let id = record.id;
        debug!(
            "adding {} ({}, {}) as id {id}",
            record.name, record.value, record.category
        );
        self.dataset.push(record)?;
        self.render_pass();
        Ok(id)
    }

    /// Switches between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        debug!("theme {} -> {theme}", self.theme);
        self.theme = theme;
        self.render_pass();
    }

    /// Sets the theme by name (`light` or `dark`).
    pub fn set_theme_str(&mut self, name: &str) -> Result<()> {
        self.set_theme(name.parse::<Theme>()?);
        Ok(())
    }

    /// Sets the chart kind.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        if kind == self.kind {
            return;
        }
        debug!("chart kind {} -> {kind}", self.kind);
        self.kind = kind;
        self.render_pass();
    }

    /// Sets the chart kind by name (`bar`, `line`, or `pie`).
    pub fn try_set_chart_kind(&mut self, name: &str) -> Result<()> {
        self.set_chart_kind(name.parse::<ChartKind>()?);
        Ok(())
    }

    /// Sets the chart kind by name, drawing a bar chart for unknown names.
    pub fn select_chart_kind(&mut self, name: &str) -> ChartKind {
        let kind = name.parse::<ChartKind>().unwrap_or_else(|err| {
            warn!("{err}; drawing a bar chart");
            ChartKind::Bar
        });
        self.set_chart_kind(kind);
        kind
    }

    /// Adds `category` to the filter set, or removes it if present. Returns whether it is now
    /// active.
    pub fn toggle_category_filter(&mut self, category: &str) -> bool {
        let active = self.filter.toggle(category);
        self.filter_generation += 1;
        debug!(
            "filter {category} {}",
            if active { "on" } else { "off" }
        );
        self.render_pass();
        active
    }

    /// Fits the drawing to a container `container_width` wide, never narrower than the
    /// configured minimum. Returns `true` if the drawing width changed.
    pub fn resize(&mut self, container_width: f64) -> bool {
        let width = self.config.clamp_width(container_width);
        if width == self.width {
            return false;
        }
        debug!("resize {} -> {width}", self.width);
        self.width = width;
        self.render_pass();
        true
    }

    /// Tracks the pointer at `pointer` (drawing coordinates). Returns `true` if the hovered mark
    /// changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let local = self.to_chart_space(pointer);
        let hit = hit_test(&self.chart.hits, local);
        let id = hit.map(|region| region.mark);
        if id == self.hovered {
            return false;
        }
        self.tooltip = hit.map(|region| region.tooltip.at(pointer));
        match &self.tooltip {
            Some(t) => trace!("hover enter {} at {pointer:?}", t.name),
            None => trace!("hover leave"),
        }
        self.hovered = id;
        self.sync_hover();
        true
    }

    /// The pointer left the drawing. Returns `true` if something was hovered.
    pub fn pointer_leave(&mut self) -> bool {
        if self.hovered.is_none() {
            return false;
        }
        trace!("hover leave");
        self.hovered = None;
        self.tooltip = None;
        self.sync_hover();
        true
    }

    /// Zooms around `pointer` by a wheel delta. Ignored for pie charts and empty charts.
    ///
    /// Returns `true` if the zoom transform changed.
    pub fn wheel(&mut self, pointer: Point, delta_y: f64, mode: WheelDeltaMode) -> bool {
        if self.zoom_owner.is_none() {
            return false;
        }
        let changed = self.zoom.wheel(pointer, delta_y, mode);
        if changed {
            trace!("zoom {:?}", self.zoom.transform());
        }
        changed
    }

    /// Starts a pan gesture. Returns `false` for pie charts and empty charts.
    pub fn drag_start(&mut self, pointer: Point) -> bool {
        if self.zoom_owner.is_none() {
            return false;
        }
        self.zoom.drag_start(pointer);
        true
    }

    /// Continues a pan gesture. Returns `true` if the zoom transform changed.
    pub fn drag_move(&mut self, pointer: Point) -> bool {
        let changed = self.zoom.drag_to(pointer);
        if changed {
            trace!("pan {:?}", self.zoom.transform());
        }
        changed
    }

    /// Ends a pan gesture.
    pub fn drag_end(&mut self) {
        self.zoom.drag_end();
    }

    /// Advances the animation clock.
    pub fn advance(&mut self, dt: Duration) {
        self.timeline.advance(dt);
    }

    /// Returns `true` while any entry transition is still running.
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_settled()
    }

    /// The current frame as an SVG document.
    pub fn svg(&self) -> String {
        self.svg_with(&HeuristicTextMeasurer)
    }

    /// The current frame as an SVG document, sizing the tooltip with `measurer`.
    pub fn svg_with(&self, measurer: &dyn TextMeasurer) -> String {
        let tooltip = self.tooltip_view(measurer);
        let frame = SvgFrame {
            size: kurbo::Size::new(self.width, self.config.height),
            theme: self.theme,
            zoom: self.zoom_transform(),
            timeline: &self.timeline,
            tooltip: tooltip.as_ref(),
        };
        self.surface.to_svg_string(&frame)
    }

    /// The hovered record's tooltip, if any.
    pub fn tooltip(&self) -> Option<&TooltipPayload> {
        self.tooltip.as_ref()
    }

    /// The tooltip laid out for display.
    pub fn tooltip_view(&self, measurer: &dyn TextMeasurer) -> Option<TooltipView> {
        self.tooltip
            .as_ref()
            .map(|t| TooltipView::present(t, self.config.tooltip_offset(), measurer))
    }

    /// The hovered mark, if any.
    pub fn hovered(&self) -> Option<MarkId> {
        self.hovered
    }

    /// What the surrounding controls show.
    pub fn control_panel(&self) -> ControlPanel {
        ControlPanel::new(
            self.kind,
            self.theme,
            self.categories.iter().map(|name| CategoryOption {
                name: name.to_owned(),
                checked: self.filter.contains(name),
            }),
        )
    }

    /// Configuration the widget was built with.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// All loaded records.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The records currently drawn.
    pub fn displayed_records(&self) -> Vec<Record> {
        self.dataset.filtered(&self.filter)
    }

    /// Categories seen at load time, in first-seen order.
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Active category filters.
    pub fn filter(&self) -> &FilterSet {
        &self.filter
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current chart kind.
    pub fn chart_kind(&self) -> ChartKind {
        self.kind
    }

    /// Drawing size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.config.height)
    }

    /// Drawing and plot rectangles.
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    /// Settled marks of the current chart, without hover styling.
    pub fn marks(&self) -> &[Mark] {
        &self.chart.marks
    }

    /// Hoverable regions of the current chart.
    pub fn hits(&self) -> &[HitRegion] {
        &self.chart.hits
    }

    /// The retained scene, with hover styling applied.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current pan/zoom transform; identity for pie charts.
    pub fn zoom_transform(&self) -> ZoomTransform {
        if self.kind.supports_zoom() {
            self.zoom.transform()
        } else {
            ZoomTransform::IDENTITY
        }
    }

    fn to_chart_space(&self, pointer: Point) -> Point {
        self.zoom_transform().invert(pointer)
    }

    fn render_pass(&mut self) {
        let records = self.dataset.filtered(&self.filter);
        self.layout = ChartLayout::arrange(
            Size::new(self.width, self.config.height),
            self.config.margins,
        );
        let ctx = ChartContext::new(self.layout, self.theme).with_timings(self.config.timings);
        self.chart = render(self.kind, &records, &ctx);
        self.hovered = None;
        self.tooltip = None;
        self.sync_zoom();

        let diffs = self.scene.rebuild(self.chart.marks.clone());
        self.surface.apply_diffs(&diffs);
        self.timeline.restart(&self.chart.marks);
        debug!(
            "rendered {} chart: {} records, {} marks",
            self.kind,
            records.len(),
            self.chart.marks.len()
        );
    }

    fn sync_zoom(&mut self) {
        let owner = (self.kind.supports_zoom() && !self.chart.is_empty()).then_some(ZoomOwner {
            kind: self.kind,
            version: self.dataset.version(),
            filter_generation: self.filter_generation,
        });
        if owner == self.zoom_owner {
            return;
        }
        if self.zoom_owner.is_some() {
            debug!("zoom handler removed");
        }
        self.zoom.reset();
        if let Some(owner) = owner {
            debug!(
                "zoom handler installed for {} chart, dataset version {}, filter generation {}",
                owner.kind, owner.version, owner.filter_generation
            );
        }
        self.zoom_owner = owner;
    }

    fn sync_hover(&mut self) {
        let effect = self
            .hovered
            .and_then(|id| self.chart.hits.iter().find(|r| r.mark == id))
            .map(|r| (r.mark, r.hover));
        let marks = self
            .chart
            .marks
            .iter()
            .map(|mark| {
                let mut mark = mark.clone();
                if let Some((id, hover)) = effect
                    && mark.id == id
                {
                    hover.apply(&mut mark.payload);
                }
                mark
            })
            .collect();
        let diffs = self.scene.tick(marks);
        self.surface.apply_diffs(&diffs);
    }
}
