//! Continuity tracking for boundary vertices.
//!
//! A boundary vertex is one of the two solutions of a circle-circle
//! intersection. When either of the vertex's scalars passes through zero
//! (the line goes through its point at infinity) the two solutions swap
//! roles, so the vertex keeps a persistent [`Branch`] flag that is inverted
//! exactly at that moment.
//!
//! Crossing detection compares each scalar against its value one frame
//! earlier: a sign change with a small step is a zero crossing, a sign change
//! with a large step is the periodic wrap at +/-1 and is ignored. The window
//! separating the two is a tuning heuristic (`Config::crossing_window`).

use serde::{Deserialize, Serialize};

use crate::boundary::SideTable;
use crate::geometry::{Intersection, Point};
use crate::phase::{Sign, VertexScalars};

/// Which intersection solution a vertex currently displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[default]
    First,
    Second,
}

impl Branch {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Branch::First => Branch::Second,
            Branch::Second => Branch::First,
        }
    }

    #[inline]
    pub fn select(self, ix: &Intersection) -> Point {
        match self {
            Branch::First => ix.first,
            Branch::Second => ix.second,
        }
    }
}

/// True when `prev -> now` passes through zero rather than wrapping.
#[inline]
pub fn crossed_zero(now: f64, prev: f64, window: f64) -> bool {
    Sign::of(now) != Sign::of(prev) && (now - prev).abs() < window
}

/// True when either scalar of a vertex crossed zero since the previous frame.
#[inline]
pub fn vertex_crossed(now: VertexScalars, prev: VertexScalars, window: f64) -> bool {
    crossed_zero(now.a, prev.a, window) || crossed_zero(now.b, prev.b, window)
}

/// Persistent branch flags for every boundary vertex.
///
/// Crossings are applied at most once per frame number: rendering the same
/// frame again (after a resize) reuses the flags as they are.
#[derive(Clone, Debug, Default)]
pub struct BranchTracker {
    flags: Vec<Vec<Branch>>,
    applied_frame: Option<u64>,
    applying: bool,
}

impl BranchTracker {
    pub fn new(sides: &[SideTable]) -> Self {
        Self {
            flags: sides
                .iter()
                .map(|s| vec![Branch::First; s.capacity])
                .collect(),
            applied_frame: None,
            applying: false,
        }
    }

    /// Start processing `frame`. Returns whether crossings will be applied,
    /// i.e. whether this frame has not been processed before.
    pub fn begin_frame(&mut self, frame: u64) -> bool {
        self.applying = self.applied_frame != Some(frame);
        self.applied_frame = Some(frame);
        self.applying
    }

    /// Update the flag of `vertex` on `side` from its scalars and return the
    /// branch to display this frame.
    pub fn observe(
        &mut self,
        side: usize,
        vertex: usize,
        now: VertexScalars,
        prev: VertexScalars,
        window: f64,
    ) -> Branch {
        let applying = self.applying;
        let Some(flag) = self.flags.get_mut(side).and_then(|f| f.get_mut(vertex)) else {
            return Branch::First;
        };
        if applying && vertex_crossed(now, prev, window) {
            *flag = flag.flipped();
            log::trace!("side {side} vertex {vertex}: branch -> {:?}", *flag);
        }
        *flag
    }

    pub fn branch(&self, side: usize, vertex: usize) -> Option<Branch> {
        self.flags.get(side).and_then(|f| f.get(vertex)).copied()
    }

    pub fn side_flags(&self, side: usize) -> Option<&[Branch]> {
        self.flags.get(side).map(Vec::as_slice)
    }

    /// Last frame whose crossings were applied.
    pub fn applied_frame(&self) -> Option<u64> {
        self.applied_frame
    }
}

/// Pen movement for the next plotted point of a polyline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PenMove {
    MoveTo(Point),
    LineTo(Point),
}

/// Joins consecutive polyline points, starting a new subpath whenever the
/// jump from the previous point reaches `break_distance` or the previous
/// vertex produced no point.
#[derive(Clone, Copy, Debug)]
pub struct PathCursor {
    last: Option<Point>,
    break_distance: f64,
}

impl PathCursor {
    pub fn new(break_distance: f64) -> Self {
        Self {
            last: None,
            break_distance,
        }
    }

    pub fn advance(&mut self, p: Point) -> PenMove {
        let joined = self
            .last
            .is_some_and(|last| last.distance(p) < self.break_distance);
        self.last = Some(p);
        if joined {
            PenMove::LineTo(p)
        } else {
            PenMove::MoveTo(p)
        }
    }

    /// The current vertex has no point; the next one starts a new subpath.
    pub fn lift(&mut self) {
        self.last = None;
    }
}
