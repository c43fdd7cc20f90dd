//! Boundary polyline tables.
//!
//! Each polyline is traced through corners of the tiling: vertex `i` sits at
//! the intersection of one pencil A arc and one pencil B arc, chosen by a
//! fixed phase offset pair. The tables below are pure data; the renderer runs
//! the same geometry and continuity logic over all of them.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Phase offsets of one vertex relative to the configured corner phases.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexOffset {
    pub a: f64,
    pub b: f64,
}

/// A named polyline: its traced vertex offsets plus the size of the branch
/// flag store reserved for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideTable {
    pub name: String,
    /// Branch flags kept for this side. Never smaller than `offsets.len()`.
    pub capacity: usize,
    pub offsets: Vec<VertexOffset>,
}

impl SideTable {
    pub fn new(name: impl Into<String>, capacity: usize, offsets: Vec<VertexOffset>) -> Self {
        let capacity = capacity.max(offsets.len());
        Self {
            name: name.into(),
            capacity,
            offsets,
        }
    }

    /// Number of vertices actually traced each frame.
    #[inline]
    pub fn traced(&self) -> usize {
        self.offsets.len()
    }
}

/// Side 0: half a turn around a circle of radius 10 in phase space, then the
/// mirrored return path shifted down by 10.
fn side_zero() -> Vec<VertexOffset> {
    (0..100)
        .map(|i| {
            let i = i as f64;
            if i < 50.0 {
                let t = i / 100.0 * TAU;
                VertexOffset {
                    a: t.sin() * 10.0,
                    b: t.cos() * 10.0,
                }
            } else {
                let t = i / 50.0 * PI;
                VertexOffset {
                    a: PI.sin() * 10.0 - t.sin() * 10.0,
                    b: PI.cos() * 10.0 - t.cos() * 10.0 - 10.0,
                }
            }
        })
        .collect()
}

/// Sides 1 and 2: a straight run of 11 vertices along pencil A at a fixed
/// pencil B offset.
fn straight_run(offset_b: f64) -> Vec<VertexOffset> {
    (0..=10)
        .map(|i| VertexOffset {
            a: -10.0 - 2.0 * i as f64,
            b: offset_b,
        })
        .collect()
}

/// The three boundary polylines of the reference tiling.
pub fn standard_sides() -> Vec<SideTable> {
    vec![
        SideTable::new("side 0", 100, side_zero()),
        SideTable::new("side 1", 20, straight_run(2.0)),
        SideTable::new("side 2", 20, straight_run(-20.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_shape() {
        let sides = standard_sides();
        assert_eq!(sides.len(), 3);
        assert_eq!(
            sides.iter().map(|s| (s.capacity, s.traced())).collect::<Vec<_>>(),
            vec![(100, 100), (20, 11), (20, 11)]
        );
        assert_eq!(sides[1].offsets[10], VertexOffset { a: -30.0, b: 2.0 });
        assert_eq!(sides[2].offsets[0], VertexOffset { a: -10.0, b: -20.0 });
    }

    #[test]
    fn side_zero_starts_on_the_phase_circle() {
        let side = &standard_sides()[0];
        let first = side.offsets[0];
        assert!(first.a.abs() < 1e-12 && (first.b - 10.0).abs() < 1e-12);
        // Both halves meet near (0, -10) at the turning point.
        let turn = side.offsets[50];
        assert!(turn.a.abs() < 1e-9, "{turn:?}");
        assert!((turn.b + 10.0).abs() < 1e-9, "{turn:?}");
    }
}
