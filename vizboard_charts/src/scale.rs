// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales: linear (values), band (names), and time (dates).
//!
//! Degenerate continuous domains map every input to the middle of the range, and tick
//! generation follows the familiar 1/2/5 × 10^k "nice step" rule, keeping ticks inside the
//! domain.

use chrono::NaiveDate;

use crate::time;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        let t = if denom == 0.0 { 0.5 } else { (x - d0) / denom };
        r0 + t * (r1 - r0)
    }

    /// Maps a range value back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        d0 + (y - r0) / denom * (d1 - d0)
    }

    /// The configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Tick values inside the domain, aiming for roughly `count` ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// The spacing of [`ScaleLinear::ticks`] for the same `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Tick values inside `[min, max]`, aiming for roughly `count` ticks.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    let (lo, hi) = if min < max { (min, max) } else { (max, min) };
    let Some(spec) = TickSpec::new(lo, hi, count) else {
        return Vec::new();
    };
    let mut out: Vec<f64> = (spec.i1..=spec.i2).map(|i| spec.value(i)).collect();
    if min > max {
        out.reverse();
    }
    out
}

/// The spacing of [`nice_ticks`] for the same arguments.
pub fn tick_step(min: f64, max: f64, count: usize) -> f64 {
    let (lo, hi) = if min < max { (min, max) } else { (max, min) };
    if count == 0 || lo == hi || !lo.is_finite() || !hi.is_finite() {
        return 0.0;
    }
    let step = (hi - lo) / count as f64;
    let (power, factor) = step_parts(step);
    factor * 10_f64.powi(power)
}

/// Decomposes a raw step into `(power, factor)` with `factor` in {1, 2, 5, 10}.
fn step_parts(step: f64) -> (i32, f64) {
    let power_f = step.log10().floor().clamp(-300.0, 300.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    let power = power_f as i32;
    let error = step / 10_f64.powi(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    (power, factor)
}

/// Integer tick indices `i1..=i2`; values are `i * inc`, or `i / inc` for sub-unit steps.
///
/// Keeping the step as an integer multiple (or divisor) avoids accumulating float error.
struct TickSpec {
    i1: i64,
    i2: i64,
    inc: f64,
    divide: bool,
}

impl TickSpec {
    fn new(lo: f64, hi: f64, count: usize) -> Option<Self> {
        let step = (hi - lo) / count as f64;
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let (power, factor) = step_parts(step);
        let (inc, divide) = if power < 0 {
            (10_f64.powi(-power) / factor, true)
        } else {
            (10_f64.powi(power) * factor, false)
        };
        let scaled = |v: f64| if divide { v * inc } else { v / inc };
        let unscaled = |i: f64| if divide { i / inc } else { i * inc };

        let mut i1 = scaled(lo).round();
        let mut i2 = scaled(hi).round();
        if unscaled(i1) < lo {
            i1 += 1.0;
        }
        if unscaled(i2) > hi {
            i2 -= 1.0;
        }
        if i2 < i1 || (i2 - i1) > 10_000.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "indices are bounded by the domain span over the step and capped at 10k"
        )]
        let (i1, i2) = (i1 as i64, i2 as i64);
        Some(Self {
            i1,
            i2,
            inc,
            divide,
        })
    }

    fn value(&self, i: i64) -> f64 {
        if self.divide {
            i as f64 / self.inc
        } else {
            i as f64 * self.inc
        }
    }
}

/// A discrete band scale over distinct names.
///
/// Padding is expressed as a fraction of the band step; leftover space is split evenly on both
/// sides (center alignment).
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBand {
    names: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale over the distinct `names` (first occurrence wins) with no padding.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>, range: (f64, f64)) -> Self {
        let mut distinct: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref();
            if !distinct.iter().any(|n| n == name) {
                distinct.push(name.to_owned());
            }
        }
        Self {
            names: distinct,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding to the same fraction.
    pub fn with_padding(self, padding: f64) -> Self {
        self.with_paddings(padding, padding)
    }

    /// Sets inner and outer padding separately. Inner padding is clamped to `[0, 1]`.
    pub fn with_paddings(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Distinct names in band order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of bands.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Index of `name`, if it is in the domain.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (lo, hi) = self.bounds();
        let n = self.count() as f64;
        (hi - lo) / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0)
    }

    /// Width of each band.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start coordinate of band `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (lo, hi) = self.bounds();
        let step = self.step();
        let n = self.count() as f64;
        let start = lo + (hi - lo - step * (n - self.padding_inner)) * 0.5;
        start + step * index as f64
    }

    /// Start coordinate of the band for `name`.
    pub fn position(&self, name: &str) -> Option<f64> {
        self.index_of(name).map(|i| self.x(i))
    }

    fn bounds(&self) -> (f64, f64) {
        let (r0, r1) = self.range;
        if r1 < r0 { (r1, r0) } else { (r0, r1) }
    }
}

/// A continuous time scale. Instants are UTC seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

impl ScaleTime {
    /// Creates a scale over a domain of UTC seconds.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }

    /// Creates a scale from the earliest to the latest date (UTC midnight).
    pub fn from_dates(min: NaiveDate, max: NaiveDate, range: (f64, f64)) -> Self {
        Self::new(
            (time::date_to_seconds(min), time::date_to_seconds(max)),
            range,
        )
    }

    /// Maps an instant (UTC seconds) into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Maps a date (UTC midnight) into range space.
    pub fn map_date(&self, date: NaiveDate) -> f64 {
        self.inner.map(time::date_to_seconds(date))
    }

    /// The configured domain in UTC seconds.
    pub fn domain(&self) -> (f64, f64) {
        self.inner.domain()
    }

    /// Calendar-aligned tick instants inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.inner.domain();
        time::time_ticks(d0, d1, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ticks_stay_inside_domain() {
        let s = ScaleLinear::new((0.0, 108.9), (400.0, 0.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&100.0));
        assert_eq!(ticks.len(), 11);
        assert_eq!(s.tick_step(10), 10.0);
    }

    #[test]
    fn fractional_ticks_are_exact() {
        let ticks = nice_ticks(0.0, 1.0, 10);
        assert_eq!(ticks[3], 0.3, "sub-unit steps divide rather than multiply");
        assert_eq!(tick_step(0.0, 1.0, 10), 0.1);
    }

    #[test]
    fn degenerate_domain_maps_to_middle() {
        let s = ScaleLinear::new((0.0, 0.0), (400.0, 0.0));
        assert_eq!(s.map(0.0), 200.0);
        assert_eq!(s.ticks(10), vec![0.0]);
    }

    #[test]
    fn linear_invert_round_trips() {
        let s = ScaleLinear::new((0.0, 110.0), (400.0, 0.0));
        assert!((s.invert(s.map(42.0)) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn band_matches_padded_layout() {
        // Three bands over 0..100 with 0.2 padding: step = 100 / (3 - 0.2 + 0.4) = 31.25.
        let band = ScaleBand::new(["a", "b", "c"], (0.0, 100.0)).with_padding(0.2);
        assert!((band.step() - 31.25).abs() < 1e-9);
        assert!((band.band_width() - 25.0).abs() < 1e-9);
        assert!((band.x(0) - 6.25).abs() < 1e-9);
        assert!((band.x(2) + band.band_width() - 93.75).abs() < 1e-9);
    }

    #[test]
    fn band_dedups_names_in_first_seen_order() {
        let band = ScaleBand::new(["b", "a", "b"], (0.0, 10.0));
        assert_eq!(band.names(), ["b", "a"]);
        assert_eq!(band.index_of("a"), Some(1));
        assert_eq!(band.position("zzz"), None);
    }

    #[test]
    fn time_scale_maps_dates() {
        let d0 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
        let s = ScaleTime::from_dates(d0, d1, (0.0, 100.0));
        let mid = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert!((s.map_date(mid) - 50.0).abs() < 1e-9);

        let single = ScaleTime::from_dates(d0, d0, (0.0, 100.0));
        assert_eq!(single.map_date(d0), 50.0);
        assert_eq!(single.ticks(10).len(), 1);
    }
}
