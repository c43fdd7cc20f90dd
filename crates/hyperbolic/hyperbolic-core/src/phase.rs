//! Periodic parameter mapping.
//!
//! A monotonically increasing frame counter is folded into a scalar in
//! `(-1, 1]` that repeats every `period` frames. Each line (or boundary
//! vertex) adds its own phase offset. Nothing is stored: the scalar is
//! recomputed from the frame number whenever it is needed.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Three-valued sign. Zero is its own class so that a scalar landing exactly
/// on zero still registers as a crossing on the following frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    #[inline]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Negative => -1.0,
            Sign::Zero => 0.0,
            Sign::Positive => 1.0,
        }
    }
}

/// Scalar in `(-1, 1]` for `frame + phase` with the given period.
///
/// `frame` may be negative (the previous frame of frame zero); the fold uses
/// Euclidean remainder so the cycle continues seamlessly below zero. The
/// frame is reduced before the phase is added, so for integer periods the
/// result is bit-identical every `period` frames.
#[inline]
pub fn periodic_scalar(frame: f64, phase: f64, period: f64) -> f64 {
    let half = period * 0.5;
    let folded = (frame.rem_euclid(period) + phase).rem_euclid(period);
    // rem_euclid lands in [0, period); the cycle start maps to +1 rather
    // than -1 so the range is (-1, 1].
    let folded = if folded == 0.0 { period } else { folded };
    (folded - half) / half
}

/// Pencil scalars for one frame, shared by both line families.
#[derive(Clone, Copy, Debug)]
pub struct PencilPhase<'a> {
    cfg: &'a Config,
}

impl<'a> PencilPhase<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Scalar of line `index` at `frame`; lines are spaced `period / count`
    /// apart so they sweep through the disk evenly.
    #[inline]
    pub fn line(&self, frame: u64, index: u32) -> f64 {
        let phase = index as f64 * self.cfg.line_spacing();
        periodic_scalar(frame as f64, phase, self.cfg.period)
    }

    /// Every line scalar of the pencil at `frame`, in index order.
    pub fn lines(&self, frame: u64) -> impl Iterator<Item = f64> + '_ {
        (0..self.cfg.line_count).map(move |i| self.line(frame, i))
    }
}

/// The pair of scalars locating a boundary vertex: `a` along the horizontal
/// pencil, `b` along the vertical pencil.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexScalars {
    pub a: f64,
    pub b: f64,
}

impl VertexScalars {
    /// Scalars of a vertex whose table offset is `(offset_a, offset_b)`, at
    /// the (possibly negative) frame `frame`.
    pub fn at(cfg: &Config, frame: f64, offset_a: f64, offset_b: f64) -> Self {
        Self {
            a: periodic_scalar(frame, cfg.corner_phase_a + offset_a, cfg.period),
            b: periodic_scalar(frame, cfg.corner_phase_b + offset_b, cfg.period),
        }
    }

    /// Either scalar sits exactly on the point at infinity.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 || self.b == 0.0
    }
}
