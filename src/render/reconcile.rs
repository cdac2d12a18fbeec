//! Keyed Reconciliation
//!
//! Each redraw computes the enter/update/exit split between the marks on
//! screen and the incoming snapshot, keyed by a stable identity. New keys
//! grow out of a degenerate geometry, surviving keys tween to their new
//! geometry, departed keys shrink away and are removed once done. A key
//! appearing twice in one snapshot collapses to its last occurrence so one
//! key never drives two marks in the same pass.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::render::tween::{Interpolate, Tween};

/// Outcome of diffing two keyed sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyedDiff<K> {
    pub enter: Vec<K>,
    pub update: Vec<K>,
    pub exit: Vec<K>,
}

/// Split `next` against `prev` by key identity. Order follows `next` for
/// enter/update and `prev` for exit; duplicates collapse.
pub fn diff_keyed<K>(prev: &[K], next: &[K]) -> KeyedDiff<K>
where
    K: Eq + Hash + Clone,
{
    let prev_set: HashSet<&K> = prev.iter().collect();
    let next_set: HashSet<&K> = next.iter().collect();

    let mut seen = HashSet::new();
    let mut enter = Vec::new();
    let mut update = Vec::new();
    for k in next {
        if !seen.insert(k) {
            continue;
        }
        if prev_set.contains(k) {
            update.push(k.clone());
        } else {
            enter.push(k.clone());
        }
    }

    let mut seen = HashSet::new();
    let exit = prev
        .iter()
        .filter(|k| seen.insert(*k) && !next_set.contains(*k))
        .cloned()
        .collect();

    KeyedDiff { enter, update, exit }
}

/// Lifecycle phase of a staged mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Settled,
    Exiting,
}

/// A mark bound to a key, with its animating geometry.
#[derive(Clone, Debug)]
pub struct Element<G> {
    pub phase: Phase,
    pub tween: Tween<G>,
}

/// Snapshot of one staged mark at a point in time.
#[derive(Clone, Debug)]
pub struct Sampled<K, G> {
    pub key: K,
    pub geom: G,
    pub phase: Phase,
    /// Raw tween progress, 0..1.
    pub progress: f64,
    /// Geometry the mark is heading toward.
    pub target: G,
    /// Geometry the mark started from.
    pub origin: G,
}

/// Retained per-key marks for one chart surface.
pub struct Stage<K, G> {
    elements: HashMap<K, Element<G>>,
    order: Vec<K>,
}

impl<K, G> Default for Stage<K, G> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K, G> Stage<K, G>
where
    K: Eq + Hash + Clone,
    G: Interpolate,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile against a new snapshot.
    ///
    /// `targets` supplies the final geometry per key. `enter_from` gives the
    /// degenerate geometry a new mark grows out of; `exit_to` the geometry a
    /// departing mark shrinks into. A departing key that reappears resumes
    /// from wherever its exit left it.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &mut self,
        now_ms: f64,
        targets: &[(K, G)],
        mut enter_from: impl FnMut(&K, &G) -> G,
        mut exit_to: impl FnMut(&K, &G) -> G,
        enter_ms: f64,
        update_ms: f64,
        exit_ms: f64,
    ) {
        // collapse duplicate keys, last occurrence wins
        let mut next: Vec<(K, G)> = Vec::with_capacity(targets.len());
        let mut index: HashMap<K, usize> = HashMap::with_capacity(targets.len());
        for (k, g) in targets {
            match index.get(k) {
                Some(&i) => next[i].1 = g.clone(),
                None => {
                    index.insert(k.clone(), next.len());
                    next.push((k.clone(), g.clone()));
                }
            }
        }

        let next_keys: Vec<K> = next.iter().map(|(k, _)| k.clone()).collect();
        let diff = diff_keyed(&self.order, &next_keys);

        for k in &diff.exit {
            if let Some(el) = self.elements.get_mut(k) {
                if el.phase != Phase::Exiting {
                    let current = el.tween.sample(now_ms);
                    let target = exit_to(k, &current);
                    el.tween = Tween::new(current, target, now_ms, exit_ms);
                    el.phase = Phase::Exiting;
                }
            }
        }

        for (k, g) in &next {
            match self.elements.get_mut(k) {
                Some(el) => {
                    el.tween.retarget(g.clone(), now_ms, update_ms);
                    el.phase = Phase::Settled;
                }
                None => {
                    let from = enter_from(k, g);
                    self.elements.insert(
                        k.clone(),
                        Element {
                            phase: Phase::Entering,
                            tween: Tween::new(from, g.clone(), now_ms, enter_ms),
                        },
                    );
                }
            }
        }

        // draw order: snapshot order first, exiting marks after
        self.order = next_keys;
        let in_next: HashSet<&K> = self.order.iter().collect();
        let mut exiting: Vec<K> = self
            .elements
            .iter()
            .filter(|(k, el)| el.phase == Phase::Exiting && !in_next.contains(k))
            .map(|(k, _)| k.clone())
            .collect();
        self.order.append(&mut exiting);
    }

    /// Interpolated geometry for everything on stage. Finished exits are
    /// dropped; finished enters settle.
    pub fn sample(&mut self, now_ms: f64) -> Vec<Sampled<K, G>> {
        let mut finished: Vec<K> = Vec::new();
        for (k, el) in self.elements.iter_mut() {
            if el.tween.done(now_ms) {
                match el.phase {
                    Phase::Exiting => finished.push(k.clone()),
                    Phase::Entering => el.phase = Phase::Settled,
                    Phase::Settled => {}
                }
            }
        }
        if !finished.is_empty() {
            for k in &finished {
                self.elements.remove(k);
            }
            self.order.retain(|k| self.elements.contains_key(k));
        }

        self.order
            .iter()
            .filter_map(|k| {
                self.elements.get(k).map(|el| Sampled {
                    key: k.clone(),
                    geom: el.tween.sample(now_ms),
                    phase: el.phase,
                    progress: el.tween.progress(now_ms),
                    target: el.tween.to.clone(),
                    origin: el.tween.from.clone(),
                })
            })
            .collect()
    }

    /// Whether any mark is still mid-transition at `now_ms`.
    pub fn animating(&self, now_ms: f64) -> bool {
        self.elements.values().any(|el| !el.tween.done(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_sets_are_disjoint_and_complete() {
        let prev = vec!["a", "b", "c"];
        let next = vec!["b", "c", "d"];
        let diff = diff_keyed(&prev, &next);
        assert_eq!(diff.enter, vec!["d"]);
        assert_eq!(diff.update, vec!["b", "c"]);
        assert_eq!(diff.exit, vec!["a"]);
    }

    #[test]
    fn test_diff_duplicate_keys_collapse() {
        let prev: Vec<&str> = vec![];
        let next = vec!["x", "x", "y"];
        let diff = diff_keyed(&prev, &next);
        assert_eq!(diff.enter, vec!["x", "y"]);
        assert!(diff.update.is_empty());
    }

    #[test]
    fn test_diff_empty_sides() {
        let diff = diff_keyed::<&str>(&[], &[]);
        assert_eq!(diff, KeyedDiff::default());

        let diff = diff_keyed(&["a"], &[]);
        assert_eq!(diff.exit, vec!["a"]);
        assert!(diff.enter.is_empty() && diff.update.is_empty());
    }

    fn grow_from_zero(_k: &u64, g: &f64) -> f64 {
        let _ = g;
        0.0
    }

    fn shrink_to_zero(_k: &u64, _g: &f64) -> f64 {
        0.0
    }

    #[test]
    fn test_stage_enter_grows_from_degenerate_geometry() {
        let mut stage: Stage<u64, f64> = Stage::new();
        stage.apply(0.0, &[(1, 10.0)], grow_from_zero, shrink_to_zero, 300.0, 300.0, 200.0);

        let at_start = stage.sample(0.0);
        assert_eq!(at_start.len(), 1);
        assert_eq!(at_start[0].geom, 0.0);
        assert_eq!(at_start[0].phase, Phase::Entering);

        let settled = stage.sample(300.0);
        assert_eq!(settled[0].geom, 10.0);
        assert_eq!(settled[0].phase, Phase::Settled);
    }

    #[test]
    fn test_stage_exit_removes_after_transition() {
        let mut stage: Stage<u64, f64> = Stage::new();
        stage.apply(0.0, &[(1, 10.0)], grow_from_zero, shrink_to_zero, 0.0, 0.0, 200.0);
        stage.apply(1000.0, &[], grow_from_zero, shrink_to_zero, 0.0, 0.0, 200.0);

        let mid = stage.sample(1100.0);
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].phase, Phase::Exiting);
        assert!(mid[0].geom < 10.0 && mid[0].geom > 0.0);

        let done = stage.sample(1200.0);
        assert!(done.is_empty());
        assert!(!stage.animating(1200.0));
    }

    #[test]
    fn test_stage_window_slide_enters_and_exits_once() {
        let mut stage: Stage<u64, f64> = Stage::new();
        let first: Vec<(u64, f64)> = (1..=20).map(|i| (i, i as f64)).collect();
        stage.apply(0.0, &first, grow_from_zero, shrink_to_zero, 0.0, 0.0, 200.0);

        let second: Vec<(u64, f64)> = (2..=21).map(|i| (i, i as f64)).collect();
        stage.apply(1000.0, &second, grow_from_zero, shrink_to_zero, 300.0, 300.0, 200.0);

        let marks = stage.sample(1000.0);
        assert_eq!(marks.len(), 21); // 20 live + 1 exiting
        let exiting: Vec<u64> = marks
            .iter()
            .filter(|m| m.phase == Phase::Exiting)
            .map(|m| m.key)
            .collect();
        assert_eq!(exiting, vec![1]);

        let after = stage.sample(1250.0);
        assert_eq!(after.len(), 20);
    }

    #[test]
    fn test_stage_returning_key_resumes_from_current_geometry() {
        let mut stage: Stage<u64, f64> = Stage::new();
        stage.apply(0.0, &[(7, 10.0)], grow_from_zero, shrink_to_zero, 0.0, 0.0, 400.0);
        stage.apply(1000.0, &[], grow_from_zero, shrink_to_zero, 0.0, 0.0, 400.0);

        // halfway out, the key comes back
        let mid = stage.sample(1200.0)[0].geom;
        stage.apply(1200.0, &[(7, 10.0)], grow_from_zero, shrink_to_zero, 300.0, 300.0, 400.0);

        let resumed = stage.sample(1200.0);
        assert_eq!(resumed.len(), 1);
        assert_eq!(resumed[0].phase, Phase::Settled);
        assert!((resumed[0].geom - mid).abs() < 1e-12);
        assert_eq!(stage.sample(1500.0)[0].geom, 10.0);
    }

    #[test]
    fn test_stage_duplicate_key_drives_one_mark() {
        let mut stage: Stage<u64, f64> = Stage::new();
        stage.apply(
            0.0,
            &[(3, 1.0), (3, 9.0)],
            grow_from_zero,
            shrink_to_zero,
            0.0,
            0.0,
            200.0,
        );
        let marks = stage.sample(0.0);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].geom, 9.0); // last occurrence wins
    }

    #[test]
    fn test_animating_reflects_inflight_tweens() {
        let mut stage: Stage<u64, f64> = Stage::new();
        stage.apply(0.0, &[(1, 5.0)], grow_from_zero, shrink_to_zero, 300.0, 300.0, 200.0);
        assert!(stage.animating(100.0));
        assert!(!stage.animating(400.0));
    }
}
