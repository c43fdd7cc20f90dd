//! Hyperbolic line renderer core (host-agnostic).
//!
//! Two perpendicular pencils of parallel hyperbolic lines are drawn as
//! circular arcs on a Euclidean canvas, together with three boundary
//! polylines traced through the corners of the resulting tiling. A single
//! frame counter drives the animation; the only state kept between frames is
//! the viewport and one branch flag per boundary vertex.
//!
//! Hosts create a [`Renderer`], call [`Renderer::tick`] from their timer and
//! [`Renderer::resize`] from their resize handler, and supply a [`Surface`]
//! implementation for their canvas.

pub mod boundary;
pub mod clock;
pub mod config;
pub mod continuity;
pub mod error;
pub mod geometry;
pub mod pencil;
pub mod phase;
pub mod renderer;
pub mod surface;
pub mod viewport;

// Re-exports for consumers (adapters)
pub use boundary::{standard_sides, SideTable, VertexOffset};
pub use clock::FrameClock;
pub use config::Config;
pub use continuity::{Branch, BranchTracker, PathCursor, PenMove};
pub use error::{ConfigError, ConfigParseError};
pub use geometry::{circle_intersection, tangent_arc_radius, Circle, Intersection, Point};
pub use pencil::PencilLine;
pub use phase::{periodic_scalar, PencilPhase, Sign, VertexScalars};
pub use renderer::{corner_candidates, FrameStats, Renderer};
pub use surface::{DrawCommand, DrawList, Surface};
pub use viewport::Viewport;
