// File: crates/numberline-core/src/reconcile.rs
// Summary: Positioned tick elements and the value-keyed diff that turns a new tick list into create/update/remove ops.

use std::collections::{HashMap, HashSet};

use crate::ticks::Tick;

#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub text: String,
    /// Baseline offset below the axis line.
    pub y: f64,
    pub font_size: f64,
}

/// A tick with its chart-area pixel position, line length and optional label.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTick {
    pub tick: Tick,
    pub x: f64,
    pub length: f64,
    pub label: Option<TickLabel>,
}

impl PlacedTick {
    pub fn key(&self) -> TickKey { TickKey::of(self.tick.value) }
}

/// Identity of a tick element across renders: the bit pattern of its value
/// (`-0.0` folded into `0.0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickKey(u64);

impl TickKey {
    pub fn of(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        Self(value.to_bits())
    }
}

/// Drawing-layer instruction for one tick element.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOp {
    Create(PlacedTick),
    Update(PlacedTick),
    /// Remove the element for this tick value.
    Remove(f64),
}

/// Remembers the tick elements the drawing layer currently holds.
#[derive(Clone, Debug, Default)]
pub struct TickReconciler {
    live: HashMap<TickKey, PlacedTick>,
}

impl TickReconciler {
    pub fn new() -> Self { Self::default() }

    pub fn live_count(&self) -> usize { self.live.len() }

    /// Diff `next` against the live set. Creates and updates follow `next`'s
    /// order, removals come last in ascending value order. Unchanged ticks emit
    /// nothing, so an identical pass yields no ops.
    pub fn reconcile(&mut self, next: &[PlacedTick]) -> Vec<TickOp> {
        let mut ops = Vec::new();
        let mut seen = HashSet::with_capacity(next.len());
        for placed in next {
            let key = placed.key();
            seen.insert(key);
            match self.live.get(&key) {
                None => ops.push(TickOp::Create(placed.clone())),
                Some(prev) if prev != placed => ops.push(TickOp::Update(placed.clone())),
                Some(_) => {}
            }
        }

        let mut gone: Vec<f64> = self
            .live
            .iter()
            .filter(|(key, _)| !seen.contains(*key))
            .map(|(_, placed)| placed.tick.value)
            .collect();
        gone.sort_by(f64::total_cmp);
        ops.extend(gone.into_iter().map(TickOp::Remove));

        self.live = next.iter().map(|p| (p.key(), p.clone())).collect();
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(value: f64, x: f64) -> PlacedTick {
        PlacedTick { tick: Tick { value, is_major: true, is_mid_minor: false }, x, length: 20.0, label: None }
    }

    #[test]
    fn diff_by_value() {
        let mut r = TickReconciler::new();
        let ops = r.reconcile(&[placed(0.0, 0.0), placed(1.0, 100.0)]);
        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| matches!(op, TickOp::Create(_))));

        let ops = r.reconcile(&[placed(1.0, 120.0), placed(2.0, 220.0)]);
        assert_eq!(ops, vec![
            TickOp::Update(placed(1.0, 120.0)),
            TickOp::Create(placed(2.0, 220.0)),
            TickOp::Remove(0.0),
        ]);
        assert_eq!(r.live_count(), 2);
    }

    #[test]
    fn identical_pass_is_silent() {
        let mut r = TickReconciler::new();
        let ticks = [placed(-0.5, 10.0), placed(0.0, 20.0)];
        r.reconcile(&ticks);
        assert!(r.reconcile(&ticks).is_empty());
    }

    #[test]
    fn negative_zero_shares_key() {
        assert_eq!(TickKey::of(-0.0), TickKey::of(0.0));
    }
}
