// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark storage and diffing.

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change to the retained scene produced by [`Scene::tick`] or [`Scene::rebuild`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Shape family.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// New payload.
        new: Box<MarkPayload>,
        /// New bounds, if known.
        bounds: Option<Rect>,
    },
    /// A retained mark changed payload or paint order.
    Update {
        /// Mark id.
        id: MarkId,
        /// Shape family of the new payload.
        kind: MarkKind,
        /// Previous paint order.
        old_z_index: i32,
        /// New paint order.
        new_z_index: i32,
        /// Previous payload.
        old: Box<MarkPayload>,
        /// New payload.
        new: Box<MarkPayload>,
        /// Previous bounds, if known.
        old_bounds: Option<Rect>,
        /// New bounds, if known.
        new_bounds: Option<Rect>,
    },
    /// A mark disappeared.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Shape family.
        kind: MarkKind,
        /// Last paint order.
        z_index: i32,
        /// Last payload.
        old: Box<MarkPayload>,
        /// Last bounds, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The retained set of marks currently on screen.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a retained mark.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Reconciles the scene with `marks`, keyed by [`MarkId`].
    ///
    /// Enter and update diffs follow input order; exit diffs follow ascending id. Marks whose
    /// payload and paint order are unchanged produce no diff. Duplicate ids keep the last mark.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut diffs = Vec::new();
        let mut next: HashMap<MarkId, Mark> = HashMap::with_capacity(marks.len());
        for mark in marks {
            match self.marks.get(&mark.id) {
                None => diffs.push(enter(&mark)),
                Some(old) if old.payload != mark.payload || old.z_index != mark.z_index => {
                    diffs.push(MarkDiff::Update {
                        id: mark.id,
                        kind: mark.kind(),
                        old_z_index: old.z_index,
                        new_z_index: mark.z_index,
                        old: Box::new(old.payload.clone()),
                        new: Box::new(mark.payload.clone()),
                        old_bounds: old.bounds(),
                        new_bounds: mark.bounds(),
                    });
                }
                Some(_) => {}
            }
            next.insert(mark.id, mark);
        }

        let mut gone: Vec<&Mark> = self
            .marks
            .values()
            .filter(|m| !next.contains_key(&m.id))
            .collect();
        gone.sort_by_key(|m| m.id);
        diffs.extend(gone.into_iter().map(exit));

        self.marks = next;
        diffs
    }

    /// Discards every retained mark and enters `marks` from scratch.
    ///
    /// Returns exits for all previous marks (ascending id) followed by enters in input order.
    pub fn rebuild(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut diffs = self.clear();
        diffs.reserve(marks.len());
        for mark in marks {
            diffs.push(enter(&mark));
            self.marks.insert(mark.id, mark);
        }
        diffs
    }

    /// Removes every mark, returning exit diffs in ascending id order.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        let mut old: Vec<Mark> = self.marks.drain().map(|(_, m)| m).collect();
        old.sort_by_key(|m| m.id);
        old.iter().map(exit).collect()
    }

    /// Returns retained marks in paint order (`z_index`, then id).
    pub fn sorted(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }
}

fn enter(mark: &Mark) -> MarkDiff {
    MarkDiff::Enter {
        id: mark.id,
        kind: mark.kind(),
        z_index: mark.z_index,
        new: Box::new(mark.payload.clone()),
        bounds: mark.bounds(),
    }
}

fn exit(mark: &Mark) -> MarkDiff {
    MarkDiff::Exit {
        id: mark.id,
        kind: mark.kind(),
        z_index: mark.z_index,
        old: Box::new(mark.payload.clone()),
        bounds: mark.bounds(),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;

    fn bar(id: u64, height: f64) -> Mark {
        Mark::builder(MarkId::from_raw(id))
            .rect(Rect::new(0.0, 100.0 - height, 10.0, 100.0))
            .fill(css::STEEL_BLUE)
            .build()
    }

    #[test]
    fn tick_reports_enter_update_exit() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![bar(1, 10.0), bar(2, 20.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(matches!(diffs[0], MarkDiff::Enter { id: MarkId(1), .. }));

        let diffs = scene.tick(vec![bar(2, 25.0), bar(3, 5.0)]);
        let ids: Vec<_> = diffs.iter().map(MarkDiff::id).collect();
        assert_eq!(ids, vec![MarkId(2), MarkId(3), MarkId(1)]);
        assert!(matches!(diffs[0], MarkDiff::Update { .. }));
        assert!(matches!(diffs[1], MarkDiff::Enter { .. }));
        assert!(matches!(diffs[2], MarkDiff::Exit { .. }));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn unchanged_marks_are_silent() {
        let mut scene = Scene::new();
        scene.tick(vec![bar(1, 10.0)]);
        assert!(scene.tick(vec![bar(1, 10.0)]).is_empty());
    }

    #[test]
    fn rebuild_discards_everything() {
        let mut scene = Scene::new();
        scene.tick(vec![bar(2, 10.0), bar(1, 10.0)]);
        let diffs = scene.rebuild(vec![bar(1, 10.0)]);
        let kinds: Vec<_> = diffs
            .iter()
            .map(|d| match d {
                MarkDiff::Enter { id, .. } => ('+', *id),
                MarkDiff::Update { id, .. } => ('~', *id),
                MarkDiff::Exit { id, .. } => ('-', *id),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![('-', MarkId(1)), ('-', MarkId(2)), ('+', MarkId(1))]
        );
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn sorted_orders_by_z_then_id() {
        let mut scene = Scene::new();
        let mut top = bar(1, 10.0);
        top.z_index = 5;
        scene.tick(vec![top, bar(3, 1.0), bar(2, 1.0)]);
        let ids: Vec<_> = scene.sorted().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MarkId(2), MarkId(3), MarkId(1)]);
        assert_eq!(scene.clear().len(), 3);
        assert!(scene.is_empty());
    }
}
