//! Drawing abstraction and timeline rendering.
//!
//! # Responsibility
//! - Define the primitive drawing capability consumed by the renderer.
//! - Draw a placed timeline (ticks, labels, axis, extent bars).
//!
//! # Invariants
//! - Rendering reads only finalized layout outputs; unfinished layouts fail
//!   with `PrematureAccess` before anything is drawn.

mod svg;
mod timeline;

pub use svg::SvgDocument;
pub use timeline::{render_svg, render_timeline};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Group transform: translate first, then scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Point,
    pub scale: f64,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate: Point::new(x, y),
            scale: 1.0,
        }
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Square,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub linecap: LineCap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub opacity: f64,
    pub color: String,
}

/// Linear gradient in object bounding-box units.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub stops: Vec<GradientStop>,
    pub from: Point,
    pub to: Point,
}

/// Rectangle paint.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(String),
    /// Reference returned by [`DrawTarget::linear_gradient`].
    Gradient(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub family: String,
    pub size: f64,
    pub bold: bool,
    pub anchor: Anchor,
}

/// Primitive drawing capability.
pub trait DrawTarget {
    fn begin_group(&mut self, transform: Transform);
    fn end_group(&mut self);
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn rect(&mut self, origin: Point, width: f64, height: f64, fill: &Fill);
    /// Draws stacked lines, the first at `origin`, each next `line_pitch` lower.
    fn text(&mut self, origin: Point, lines: &[String], line_pitch: f64, style: &TextStyle);
    /// Registers a gradient and returns a fill that paints with it.
    fn linear_gradient(&mut self, gradient: LinearGradient) -> Fill;
}
