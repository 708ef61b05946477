// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vizboard_data::format::format_grouped;

/// Formats a linear tick with as many decimals as `step` needs, grouped by thousands.
///
/// A step of `100` prints `1,000`; a step of `0.5` prints `0.5`.
pub(crate) fn format_tick_with_step(value: f64, step: f64) -> String {
    format_grouped(value, decimals_for_step(step))
}

fn decimals_for_step(step: f64) -> usize {
    let mut scaled = step.abs();
    if !scaled.is_finite() || scaled == 0.0 {
        return 0;
    }
    let mut decimals = 0;
    // Slack keeps 0.1 * 10 from reading as 0.999...
    while scaled < 1.0 - 1e-9 && decimals < 20 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
