// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark scene for `vizboard`.
//!
//! This crate is the bottom layer of the widget:
//! - **Marks** are stable-identity shape descriptors (rectangles, paths, text runs).
//! - A **Scene** reconciles successive mark lists into enter/update/exit diffs.
//! - A **Timeline** drives entry transitions as explicit timed state machines that a host
//!   advances and samples.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

mod mark;
mod scene;
mod transition;

pub use mark::{
    Dash, Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor,
    TextBaseline, TextPayload,
};
pub use scene::{MarkDiff, Scene};
pub use transition::{
    Easing, SectorTween, Timeline, Transition, TransitionState, Tween, sector_path,
};
