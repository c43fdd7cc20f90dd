//! Renderer: owns all state that survives between frames and draws one
//! frame at a time onto a [`Surface`].
//!
//! Methods:
//! - new, with_sides
//! - tick (render current frame, then advance the clock)
//! - advance_to (run the clock forward without drawing; flags only)
//! - resize (update viewport, re-render the current frame)
//! - render (draw the current frame without advancing)

use serde::{Deserialize, Serialize};

use crate::boundary::{standard_sides, SideTable, VertexOffset};
use crate::clock::FrameClock;
use crate::config::Config;
use crate::continuity::{Branch, BranchTracker, PathCursor, PenMove};
use crate::error::ConfigError;
use crate::geometry::{circle_intersection, Intersection};
use crate::pencil::{pencil_a_circle, pencil_a_line, pencil_b_circle, pencil_b_line, PencilLine};
use crate::phase::{PencilPhase, VertexScalars};
use crate::surface::Surface;
use crate::viewport::Viewport;

const BACKGROUND: &str = "white";
const INK: &str = "black";
const IDEAL_FILL: &str = "white";

/// Counters describing one rendered frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    pub frame: u64,
    /// Pencil lines drawn as circles.
    pub arcs: u32,
    /// Pencil lines drawn straight (scalar exactly zero).
    pub straight_lines: u32,
    /// Pencil lines that could not be built this frame.
    pub skipped_lines: u32,
    pub plotted_vertices: u32,
    pub skipped_vertices: u32,
    /// Subpaths started across all boundary polylines.
    pub subpaths: u32,
    /// Branch flags inverted while rendering this frame.
    pub branch_toggles: u32,
}

/// The two candidate corners of a boundary vertex with the given scalars.
pub fn corner_candidates(
    cfg: &Config,
    vp: &Viewport,
    scalars: VertexScalars,
) -> Option<Intersection> {
    let c0 = pencil_a_circle(cfg, vp, scalars.a)?;
    let c1 = pencil_b_circle(cfg, vp, scalars.b)?;
    circle_intersection(c0, c1)
}

/// A boundary vertex after crossing detection for one frame.
struct Observed {
    scalars: VertexScalars,
    branch: Branch,
    toggled: bool,
}

/// Apply any zero crossing of vertex `vertex` on `side` since the previous
/// frame. `None` when a scalar sits exactly on zero this frame.
fn observe_vertex(
    tracker: &mut BranchTracker,
    cfg: &Config,
    frame: u64,
    side: usize,
    vertex: usize,
    off: VertexOffset,
) -> Option<Observed> {
    let now_frame = frame as f64;
    let now = VertexScalars::at(cfg, now_frame, off.a, off.b);
    if now.is_degenerate() {
        return None;
    }
    let prev = VertexScalars::at(cfg, now_frame - 1.0, off.a, off.b);
    let before = tracker.branch(side, vertex);
    let branch = tracker.observe(side, vertex, now, prev, cfg.crossing_window);
    Some(Observed {
        scalars: now,
        branch,
        toggled: before.is_some_and(|b| b != branch),
    })
}

#[derive(Debug)]
pub struct Renderer {
    cfg: Config,
    viewport: Viewport,
    clock: FrameClock,
    sides: Vec<SideTable>,
    tracker: BranchTracker,
}

impl Renderer {
    /// Renderer over the standard boundary tables.
    pub fn new(cfg: Config, width: f64, height: f64) -> Result<Self, ConfigError> {
        Self::with_sides(cfg, width, height, standard_sides())
    }

    /// Renderer over custom boundary tables.
    pub fn with_sides(
        cfg: Config,
        width: f64,
        height: f64,
        sides: Vec<SideTable>,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let viewport = Viewport::new(width, height)?;
        log::debug!(
            "renderer: {}x{} viewport, {} lines/pencil, period {}, {} boundary sides",
            width,
            height,
            cfg.line_count,
            cfg.period,
            sides.len()
        );
        Ok(Self {
            tracker: BranchTracker::new(&sides),
            cfg,
            viewport,
            clock: FrameClock::new(),
            sides,
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.clock.current()
    }

    pub fn sides(&self) -> &[SideTable] {
        &self.sides
    }

    pub fn branch(&self, side: usize, vertex: usize) -> Option<Branch> {
        self.tracker.branch(side, vertex)
    }

    /// Every branch flag of `side`, traced or not.
    pub fn side_flags(&self, side: usize) -> Option<&[Branch]> {
        self.tracker.side_flags(side)
    }

    /// One clock tick: draw the current frame, then advance the counter.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let stats = self.render(surface);
        self.clock.tick();
        stats
    }

    /// Move the clock to `frame` without drawing, leaving the branch flags
    /// exactly as after ticking through every frame in between. Never rewinds.
    ///
    /// With an integer period each frame residue sees the same crossings in
    /// every period, so the flags repeat every two periods: whole double
    /// periods are skipped and at most two periods are stepped. Frames are
    /// exact up to 2^53.
    pub fn advance_to(&mut self, frame: u64) {
        if frame <= self.clock.current() {
            return;
        }
        // The current frame may already be applied by a render or resize.
        if self.tracker.applied_frame() == Some(self.clock.current()) {
            self.step_flags();
        }
        if let Some(cycle) = self.flag_cycle() {
            let remaining = frame.saturating_sub(self.clock.current());
            self.clock.skip(remaining / cycle * cycle);
        }
        while self.clock.current() < frame {
            self.step_flags();
        }
    }

    /// Frames after which the branch flags provably repeat.
    fn flag_cycle(&self) -> Option<u64> {
        let period = self.cfg.period;
        if period.fract() != 0.0 || period > u32::MAX as f64 {
            return None;
        }
        (period as u64).checked_mul(2)
    }

    /// One tick without a surface: apply the current frame's crossings, then
    /// advance the counter.
    fn step_flags(&mut self) {
        let frame = self.clock.current();
        self.tracker.begin_frame(frame);
        for (side_idx, side) in self.sides.iter().enumerate() {
            for (vertex, off) in side.offsets.iter().enumerate() {
                observe_vertex(&mut self.tracker, &self.cfg, frame, side_idx, vertex, *off);
            }
        }
        self.clock.tick();
    }

    /// Apply a new canvas size and redraw the current frame. The frame number
    /// does not change, so branch flags are not toggled again.
    pub fn resize<S: Surface + ?Sized>(
        &mut self,
        width: f64,
        height: f64,
        surface: &mut S,
    ) -> Result<FrameStats, ConfigError> {
        self.viewport.resize(width, height)?;
        log::debug!("renderer: resized to {}x{}", width, height);
        Ok(self.render(surface))
    }

    /// Draw the current frame.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let mut stats = FrameStats {
            frame: self.clock.current(),
            ..FrameStats::default()
        };

        surface.set_fill_style(BACKGROUND);
        surface.fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
        surface.set_stroke_style(INK);
        surface.set_line_width(1.0);

        self.draw_pencils(surface, &mut stats);
        self.draw_boundaries(surface, &mut stats);
        self.draw_ideal_points(surface);
        stats
    }

    fn draw_pencils<S: Surface + ?Sized>(&self, surface: &mut S, stats: &mut FrameStats) {
        let (cfg, vp) = (&self.cfg, &self.viewport);
        let phases = PencilPhase::new(cfg);
        let frame = self.clock.current();

        let a_lines = phases.lines(frame).map(|b| Some(pencil_a_line(cfg, vp, b)));
        let b_lines = phases.lines(frame).map(|b| pencil_b_line(cfg, vp, b));
        for line in a_lines.chain(b_lines) {
            match line {
                Some(line) => self.draw_line(surface, line, stats),
                None => {
                    stats.skipped_lines += 1;
                    log::trace!("frame {frame}: pencil line skipped");
                }
            }
        }
    }

    fn draw_line<S: Surface + ?Sized>(&self, surface: &mut S, line: PencilLine, stats: &mut FrameStats) {
        surface.begin_path();
        match line {
            PencilLine::Arc(circle) => {
                surface.arc(circle.center.x, circle.center.y, circle.radius);
                stats.arcs += 1;
            }
            PencilLine::Vertical { x } => {
                surface.move_to(x, 0.0);
                surface.line_to(x, self.viewport.height);
                stats.straight_lines += 1;
            }
            PencilLine::Horizontal { y } => {
                surface.move_to(0.0, y);
                surface.line_to(self.viewport.width, y);
                stats.straight_lines += 1;
            }
        }
        surface.stroke();
    }

    fn draw_boundaries<S: Surface + ?Sized>(&mut self, surface: &mut S, stats: &mut FrameStats) {
        let frame = self.clock.current();
        self.tracker.begin_frame(frame);
        let (cfg, vp) = (&self.cfg, &self.viewport);

        for (side_idx, side) in self.sides.iter().enumerate() {
            surface.begin_path();
            let mut cursor = PathCursor::new(cfg.break_distance);
            for (vertex, off) in side.offsets.iter().enumerate() {
                let Some(seen) =
                    observe_vertex(&mut self.tracker, cfg, frame, side_idx, vertex, *off)
                else {
                    stats.skipped_vertices += 1;
                    continue;
                };
                if seen.toggled {
                    stats.branch_toggles += 1;
                }

                let Some(corners) = corner_candidates(cfg, vp, seen.scalars) else {
                    log::trace!("frame {frame}: {} vertex {vertex} has no corner", side.name);
                    stats.skipped_vertices += 1;
                    cursor.lift();
                    continue;
                };
                match cursor.advance(seen.branch.select(&corners)) {
                    PenMove::MoveTo(p) => {
                        surface.move_to(p.x, p.y);
                        stats.subpaths += 1;
                    }
                    PenMove::LineTo(p) => surface.line_to(p.x, p.y),
                }
                stats.plotted_vertices += 1;
            }
            surface.stroke();
        }
    }

    fn draw_ideal_points<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_line_width(1.0);
        surface.set_fill_style(IDEAL_FILL);
        for circle in self.viewport.ideal_points(&self.cfg) {
            surface.begin_path();
            surface.arc(circle.center.x, circle.center.y, circle.radius);
            surface.fill();
            surface.begin_path();
            surface.arc(circle.center.x, circle.center.y, circle.radius);
            surface.stroke();
        }
    }
}
