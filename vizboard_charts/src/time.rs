// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time tick generation and formatting helpers.
//!
//! Time is a numeric value in UTC **seconds** since the Unix epoch. Ticks snap to calendar
//! boundaries (minutes, hours, days of the month, Sundays, month starts, years), and labels use
//! the coarsest format that describes the instant exactly:
//! - `%Y` on year starts, `%B` on other month starts,
//! - `%b %d` on Sundays, `%a %d` on other midnights,
//! - `%I %p`, `%I:%M`, and `:%S` below a day.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::scale::tick_step;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// Calendar unit of a tick interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Seconds.
    Second,
    /// Minutes.
    Minute,
    /// Hours.
    Hour,
    /// Days, aligned to the day of the month.
    Day,
    /// Weeks starting on Sunday.
    Week,
    /// Months, aligned to the month of the year.
    Month,
    /// Years.
    Year,
}

/// A tick interval: every `step`-th boundary of `unit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    /// Calendar unit.
    pub unit: TimeUnit,
    /// Boundary stride.
    pub step: u32,
}

const INTERVALS: [(TimeUnit, u32, f64); 18] = [
    (TimeUnit::Second, 1, 1.0),
    (TimeUnit::Second, 5, 5.0),
    (TimeUnit::Second, 15, 15.0),
    (TimeUnit::Second, 30, 30.0),
    (TimeUnit::Minute, 1, MINUTE),
    (TimeUnit::Minute, 5, 5.0 * MINUTE),
    (TimeUnit::Minute, 15, 15.0 * MINUTE),
    (TimeUnit::Minute, 30, 30.0 * MINUTE),
    (TimeUnit::Hour, 1, HOUR),
    (TimeUnit::Hour, 3, 3.0 * HOUR),
    (TimeUnit::Hour, 6, 6.0 * HOUR),
    (TimeUnit::Hour, 12, 12.0 * HOUR),
    (TimeUnit::Day, 1, DAY),
    (TimeUnit::Day, 2, 2.0 * DAY),
    (TimeUnit::Week, 1, WEEK),
    (TimeUnit::Month, 1, MONTH),
    (TimeUnit::Month, 3, 3.0 * MONTH),
    (TimeUnit::Year, 1, YEAR),
];

/// UTC midnight of `date`, in seconds.
pub fn date_to_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

fn from_seconds(t: f64) -> Option<NaiveDateTime> {
    if !t.is_finite() {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "checked finite; chrono rejects out-of-range instants"
    )]
    let secs = t.floor() as i64;
    DateTime::from_timestamp(secs, 0).map(|d| d.naive_utc())
}

fn to_seconds(dt: NaiveDateTime) -> f64 {
    dt.and_utc().timestamp() as f64
}

/// Picks the interval whose duration is closest (by ratio) to `span / count`.
pub fn choose_interval(start: f64, stop: f64, count: usize) -> TimeInterval {
    let target = (stop - start).abs() / count.max(1) as f64;
    let i = INTERVALS.partition_point(|&(_, _, duration)| duration <= target);
    if i == INTERVALS.len() {
        let years = tick_step(start / YEAR, stop / YEAR, count).max(1.0).round();
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the u32 range")]
        let step = years.min(f64::from(u32::MAX)) as u32;
        return TimeInterval {
            unit: TimeUnit::Year,
            step,
        };
    }
    if i == 0 {
        let secs = tick_step(start, stop, count).max(1.0).round();
        #[allow(clippy::cast_possible_truncation, reason = "below the one-second interval")]
        let step = secs.min(60.0) as u32;
        return TimeInterval {
            unit: TimeUnit::Second,
            step,
        };
    }
    let (prev_unit, prev_step, prev_duration) = INTERVALS[i - 1];
    let (next_unit, next_step, next_duration) = INTERVALS[i];
    if target / prev_duration < next_duration / target {
        TimeInterval {
            unit: prev_unit,
            step: prev_step,
        }
    } else {
        TimeInterval {
            unit: next_unit,
            step: next_step,
        }
    }
}

impl TimeInterval {
    fn floor(self, dt: NaiveDateTime) -> NaiveDateTime {
        let date = dt.date();
        let midnight = |d: NaiveDate| d.and_time(NaiveTime::MIN);
        match self.unit {
            TimeUnit::Second => dt.with_nanosecond(0).unwrap_or(dt),
            TimeUnit::Minute => date
                .and_hms_opt(dt.hour(), dt.minute(), 0)
                .unwrap_or(dt),
            TimeUnit::Hour => date.and_hms_opt(dt.hour(), 0, 0).unwrap_or(dt),
            TimeUnit::Day => midnight(date),
            TimeUnit::Week => {
                let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
                midnight(date.checked_sub_days(back).unwrap_or(date))
            }
            TimeUnit::Month => midnight(date.with_day(1).unwrap_or(date)),
            TimeUnit::Year => midnight(
                NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
            ),
        }
    }

    fn next(self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.unit {
            TimeUnit::Second => dt.checked_add_signed(chrono::TimeDelta::seconds(1)),
            TimeUnit::Minute => dt.checked_add_signed(chrono::TimeDelta::minutes(1)),
            TimeUnit::Hour => dt.checked_add_signed(chrono::TimeDelta::hours(1)),
            TimeUnit::Day => dt.checked_add_days(Days::new(1)),
            TimeUnit::Week => dt.checked_add_days(Days::new(7)),
            TimeUnit::Month => dt.checked_add_months(Months::new(1)),
            TimeUnit::Year => dt.checked_add_months(Months::new(12)),
        }
    }

    fn accepts(self, dt: NaiveDateTime) -> bool {
        if self.step <= 1 {
            return true;
        }
        let field = match self.unit {
            TimeUnit::Second => dt.second(),
            TimeUnit::Minute => dt.minute(),
            TimeUnit::Hour => dt.hour(),
            TimeUnit::Day => dt.day0(),
            TimeUnit::Week => return true,
            TimeUnit::Month => dt.month0(),
            TimeUnit::Year => dt.year().unsigned_abs(),
        };
        field % self.step == 0
    }

    /// Boundaries of this interval inside `[start, stop]`, in UTC seconds.
    pub fn range(self, start: f64, stop: f64) -> Vec<f64> {
        let (Some(lo), Some(hi)) = (from_seconds(start.ceil()), from_seconds(stop.floor())) else {
            return Vec::new();
        };
        let floor = self.floor(lo);
        let mut cursor = if floor < lo { self.next(floor) } else { Some(floor) };
        let mut out = Vec::new();
        while let Some(t) = cursor {
            if t > hi || out.len() >= 10_000 {
                break;
            }
            if self.accepts(t) {
                out.push(to_seconds(t));
            }
            cursor = self.next(t);
        }
        out
    }
}

/// Calendar-aligned ticks inside `[min, max]`, aiming for roughly `count` ticks.
pub fn time_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    let (lo, hi) = if min < max { (min, max) } else { (max, min) };
    let mut ticks = choose_interval(lo, hi, count).range(lo, hi);
    if min > max {
        ticks.reverse();
    }
    ticks
}

/// Formats a tick instant (UTC seconds) with the coarsest exact calendar format.
pub fn format_time_tick(t: f64) -> String {
    let Some(dt) = from_seconds(t) else {
        return format!("{t}");
    };
    let pattern = if dt.second() != 0 {
        ":%S"
    } else if dt.minute() != 0 {
        "%I:%M"
    } else if dt.hour() != 0 {
        "%I %p"
    } else if dt.day() != 1 {
        if dt.weekday() == chrono::Weekday::Sun {
            "%b %d"
        } else {
            "%a %d"
        }
    } else if dt.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    dt.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> f64 {
        date_to_seconds(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn month_span_uses_two_day_steps() {
        let ticks = time_ticks(day(2025, 1, 1), day(2025, 1, 30), 10);
        assert_eq!(
            choose_interval(day(2025, 1, 1), day(2025, 1, 30), 10),
            TimeInterval {
                unit: TimeUnit::Day,
                step: 2
            }
        );
        assert_eq!(ticks.len(), 15);
        assert_eq!(ticks[0], day(2025, 1, 1));
        assert_eq!(ticks[1], day(2025, 1, 3));
    }

    #[test]
    fn labels_pick_the_coarsest_exact_format() {
        assert_eq!(format_time_tick(day(2025, 1, 1)), "2025");
        assert_eq!(format_time_tick(day(2025, 3, 1)), "March");
        // 2025-01-05 is a Sunday.
        assert_eq!(format_time_tick(day(2025, 1, 5)), "Jan 05");
        assert_eq!(format_time_tick(day(2025, 1, 3)), "Fri 03");
        assert_eq!(format_time_tick(day(2025, 1, 3) + 3.0 * HOUR), "03 AM");
        assert_eq!(format_time_tick(day(2025, 1, 3) + 13.5 * HOUR), "01:30");
    }

    #[test]
    fn week_ticks_land_on_sundays() {
        let weekly = TimeInterval {
            unit: TimeUnit::Week,
            step: 1,
        }
        .range(day(2025, 1, 1), day(2025, 1, 31));
        let sundays: Vec<_> = [5, 12, 19, 26].iter().map(|d| day(2025, 1, *d)).collect();
        assert_eq!(weekly, sundays);
    }

    #[test]
    fn single_instant_yields_one_tick() {
        let t = day(2025, 2, 2);
        assert_eq!(time_ticks(t, t, 10), vec![t]);
    }

    #[test]
    fn one_day_span_uses_hours() {
        let ticks = time_ticks(day(2025, 1, 1), day(2025, 1, 2), 10);
        // 86400 / 10 = 8640s sits between 1h and 3h; 3h is closer by ratio.
        assert_eq!(ticks.len(), 9);
        assert_eq!(ticks[1] - ticks[0], 3.0 * HOUR);
    }
}
