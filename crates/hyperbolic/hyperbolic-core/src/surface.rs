//! Drawing surface contract.
//!
//! The renderer only issues the calls below. Hosts implement [`Surface`] on
//! their canvas type (the wasm adapter does so for a 2D context); headless
//! hosts and tests record into a [`DrawList`].

use serde::{Deserialize, Serialize};

/// Sink for path-based drawing calls. Colours are CSS colour strings.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Full circle around `(x, y)`.
    fn arc(&mut self, x: f64, y: f64, radius: f64);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
    },
    Stroke,
    Fill,
    SetStrokeStyle {
        color: String,
    },
    SetFillStyle {
        color: String,
    },
    SetLineWidth {
        width: f64,
    },
}

/// Recording surface: the drawing calls of one or more frames.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    #[serde(default)]
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Issue every recorded call on another surface, in order.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                } => target.fill_rect(*x, *y, *width, *height),
                DrawCommand::BeginPath => target.begin_path(),
                DrawCommand::MoveTo { x, y } => target.move_to(*x, *y),
                DrawCommand::LineTo { x, y } => target.line_to(*x, *y),
                DrawCommand::Arc { x, y, radius } => target.arc(*x, *y, *radius),
                DrawCommand::Stroke => target.stroke(),
                DrawCommand::Fill => target.fill(),
                DrawCommand::SetStrokeStyle { color } => target.set_stroke_style(color),
                DrawCommand::SetFillStyle { color } => target.set_fill_style(color),
                DrawCommand::SetLineWidth { width } => target.set_line_width(*width),
            }
        }
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) {
        self.commands.push(DrawCommand::Arc { x, y, radius });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetStrokeStyle {
            color: color.to_string(),
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillStyle {
            color: color.to_string(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth { width });
    }
}
