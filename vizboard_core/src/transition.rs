// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry transitions as explicit, timed state machines.
//!
//! A [`Transition`] describes how a mark animates from an initial look to its settled payload.
//! A [`Timeline`] owns the clock: it is started when marks enter a scene, advanced by the host
//! (from a frame callback, a timer, or a test), and sampled to obtain each mark's current payload.
//!
//! Each tracked mark moves through [`TransitionState::Entering`] (before its first sampled
//! frame, or while its delay runs), [`TransitionState::Animating`], and
//! [`TransitionState::Settled`].

use core::f64::consts::FRAC_PI_2;
use core::time::Duration;

use hashbrown::HashMap;
use kurbo::{BezPath, Circle, Point, Rect, Shape};

use crate::mark::{Dash, Mark, MarkId, MarkPayload};

/// An easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Identity easing.
    Linear,
    /// Cubic ease-in-out.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Applies the easing curve to `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Pie sector geometry interpolated by angle.
///
/// Angles are in radians, measured clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorTween {
    /// Sector center.
    pub center: Point,
    /// Inner radius (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle at the beginning of the transition.
    pub from_start: f64,
    /// End angle at the beginning of the transition.
    pub from_end: f64,
    /// Settled start angle.
    pub start_angle: f64,
    /// Settled end angle.
    pub end_angle: f64,
}

impl SectorTween {
    /// Returns the sector outline for eased progress `t`.
    pub fn path_at(&self, t: f64) -> BezPath {
        let start = lerp(self.from_start, self.start_angle, t);
        let end = lerp(self.from_end, self.end_angle, t);
        sector_path(self.center, self.inner_radius, self.outer_radius, start, end)
    }
}

/// Builds a sector outline. Angles are clockwise from 12 o'clock.
pub fn sector_path(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> BezPath {
    let sweep = end_angle - start_angle;
    if sweep.abs() <= f64::EPSILON || outer_radius <= 0.0 {
        return BezPath::new();
    }
    // Scene y grows downward, so kurbo's angles already run clockwise; shift the origin to 12.
    let circle = Circle::new(center, outer_radius);
    circle
        .segment(inner_radius, start_angle - FRAC_PI_2, sweep)
        .path_elements(0.1)
        .collect()
}

/// The property animated by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Tween {
    /// Rectangle geometry from `from` to the settled rectangle.
    Rect {
        /// Geometry at the start of the transition.
        from: Rect,
    },
    /// Whole-shape opacity from `from` to the settled opacity.
    Opacity {
        /// Opacity at the start of the transition.
        from: f64,
    },
    /// Path reveal: dash offset from `length` (hidden) to `0` (shown).
    DrawOn {
        /// Total arc length of the path at draw time.
        length: f64,
    },
    /// Sector angles from the `from_*` pair to the settled pair.
    Sector(SectorTween),
}

/// A timed transition attached to a mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Animation length.
    pub duration: Duration,
    /// Wait before animating.
    pub delay: Duration,
    /// Easing curve.
    pub easing: Easing,
    /// Animated property.
    pub tween: Tween,
}

impl Transition {
    /// Creates a transition with no delay and cubic in-out easing.
    pub fn new(duration: Duration, tween: Tween) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::default(),
            tween,
        }
    }

    /// Sets the delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns linear progress in `[0, 1]` after `elapsed` time.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Returns the payload at linear progress `t`, given the settled payload.
    pub fn sample(&self, settled: &MarkPayload, t: f64) -> MarkPayload {
        let e = self.easing.apply(t);
        let mut out = settled.clone();
        match (&self.tween, &mut out) {
            (Tween::Rect { from }, MarkPayload::Rect(r)) => {
                let to = r.rect;
                r.rect = Rect::new(
                    lerp(from.x0, to.x0, e),
                    lerp(from.y0, to.y0, e),
                    lerp(from.x1, to.x1, e),
                    lerp(from.y1, to.y1, e),
                );
            }
            (Tween::Opacity { from }, payload) => {
                let to = payload.opacity();
                payload.set_opacity(lerp(*from, to, e));
            }
            (Tween::DrawOn { length }, MarkPayload::Path(p)) => {
                p.dash = Some(Dash::reveal(*length, *length * (1.0 - e)));
            }
            (Tween::Sector(sector), MarkPayload::Path(p)) => {
                p.path = sector.path_at(e);
            }
            // The tween does not apply to this payload kind; show the settled look.
            _ => {}
        }
        out
    }
}

/// Where a tracked mark is in its transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionState {
    /// Scheduled but not yet progressing (no frame sampled yet, or still inside its delay).
    Entering,
    /// Progressing; `progress` is linear in `(0, 1)`.
    Animating {
        /// Linear progress.
        progress: f64,
    },
    /// Finished, or the mark has no transition.
    Settled,
}

#[derive(Clone, Debug)]
struct Track {
    transition: Transition,
    started: bool,
}

/// A clock plus the set of running transitions.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    elapsed: Duration,
    tracks: HashMap<MarkId, Track>,
}

impl Timeline {
    /// Creates an empty, settled timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all tracks and restarts the clock with the transitions of `marks`.
    pub fn restart<'a>(&mut self, marks: impl IntoIterator<Item = &'a Mark>) {
        self.elapsed = Duration::ZERO;
        self.tracks.clear();
        for mark in marks {
            if let Some(transition) = &mark.transition {
                self.tracks.insert(
                    mark.id,
                    Track {
                        transition: transition.clone(),
                        started: false,
                    },
                );
            }
        }
    }

    /// Advances the clock by `dt`. Marks sampled at the previous instant count as started.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        for track in self.tracks.values_mut() {
            track.started = true;
        }
        let elapsed = self.elapsed;
        self.tracks
            .retain(|_, track| track.transition.progress(elapsed) < 1.0);
    }

    /// Time since the last restart.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` when no transition is still running.
    pub fn is_settled(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Returns the state of the transition for `id`.
    pub fn state(&self, id: MarkId) -> TransitionState {
        let Some(track) = self.tracks.get(&id) else {
            return TransitionState::Settled;
        };
        let progress = track.transition.progress(self.elapsed);
        if !track.started || progress <= 0.0 {
            TransitionState::Entering
        } else if progress >= 1.0 {
            TransitionState::Settled
        } else {
            TransitionState::Animating { progress }
        }
    }

    /// Returns the payload `mark` shows at the current instant.
    pub fn sample(&self, mark: &Mark) -> MarkPayload {
        self.sample_payload(mark.id, &mark.payload)
    }

    /// Returns what the mark `id` shows at the current instant, given its settled payload.
    ///
    /// Backends that retain payloads from scene diffs sample through this.
    pub fn sample_payload(&self, id: MarkId, settled: &MarkPayload) -> MarkPayload {
        match self.tracks.get(&id) {
            Some(track) => {
                let t = track.transition.progress(self.elapsed);
                track.transition.sample(settled, t)
            }
            None => settled.clone(),
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
