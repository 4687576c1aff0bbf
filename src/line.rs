use crate::{glm, AttributeSet, Color};
use std::fmt;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Positional vertex: two 32 bit floats.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Point2D { x, y }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

impl From<glm::Vec2> for Point2D {
    fn from(p: glm::Vec2) -> Self {
        Point2D::new(p.x, p.y)
    }
}

impl From<Point2D> for glm::Vec2 {
    fn from(p: Point2D) -> Self {
        glm::vec2(p.x, p.y)
    }
}

/// Positional vertex followed by a premultiplied color.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct ColoredPoint2D {
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

impl ColoredPoint2D {
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, color: Color) {
        self.x = x;
        self.y = y;
        self.color = color;
    }

    pub fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Segment `p1 -> p2` without color, 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct Line {
    pub p1: Point2D,
    pub p2: Point2D,
}

impl Line {
    #[inline]
    pub fn set_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.p1.set(x1, y1);
        self.p2.set(x2, y2);
    }

    #[inline]
    pub fn set_hline(&mut self, x1: f32, x2: f32, y: f32) {
        self.set_line(x1, y, x2, y);
    }

    #[inline]
    pub fn set_vline(&mut self, x: f32, y1: f32, y2: f32) {
        self.set_line(x, y1, x, y2);
    }
}

/// Segment `p1 -> p2` with a color per endpoint, 24 bytes.
///
/// Differing endpoint colors rasterize as a linear gradient.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct ColoredLine {
    pub p1: ColoredPoint2D,
    pub p2: ColoredPoint2D,
}

impl ColoredLine {
    #[inline]
    pub fn set_line(&mut self, x1: f32, y1: f32, c1: Color, x2: f32, y2: f32, c2: Color) {
        self.p1.set(x1, y1, c1);
        self.p2.set(x2, y2, c2);
    }

    #[inline]
    pub fn set_hline(&mut self, x1: f32, x2: f32, y: f32, color: Color) {
        self.set_line(x1, y, color, x2, y, color);
    }

    #[inline]
    pub fn set_vline(&mut self, x: f32, y1: f32, y2: f32, color: Color) {
        self.set_line(x, y1, color, x, y2, color);
    }
}

const _: () = assert!(std::mem::size_of::<Point2D>() == 8);
const _: () = assert!(std::mem::size_of::<ColoredPoint2D>() == 12);
const _: () = assert!(std::mem::size_of::<Line>() == 16);
const _: () = assert!(std::mem::size_of::<ColoredLine>() == 24);

/// Line record that can be filled in place by generic line building code.
///
/// Both record types accept a color through the same calls. A [`Line`] has
/// no color storage; its color comes from the material of the node that
/// draws the geometry, so the argument is dropped.
pub trait LineSink:
    Copy + Default + fmt::Debug + fmt::Display + FromBytes + IntoBytes + Immutable + KnownLayout
{
    /// Vertex layout a geometry needs to hold records of this type.
    const ATTRIBUTES: AttributeSet;

    fn fill_gradient(&mut self, p1: Point2D, c1: Color, p2: Point2D, c2: Color);

    fn endpoints(&self) -> (Point2D, Point2D);

    /// Endpoint colors, `None` for positional records.
    fn colors(&self) -> Option<(Color, Color)>;

    #[inline]
    fn fill_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.fill_gradient(Point2D::new(x1, y1), color, Point2D::new(x2, y2), color);
    }

    #[inline]
    fn fill_hline(&mut self, x1: f32, x2: f32, y: f32, color: Color) {
        self.fill_line(x1, y, x2, y, color);
    }

    #[inline]
    fn fill_vline(&mut self, x: f32, y1: f32, y2: f32, color: Color) {
        self.fill_line(x, y1, x, y2, color);
    }
}

impl LineSink for Line {
    const ATTRIBUTES: AttributeSet = AttributeSet::Point2D;

    #[inline]
    fn fill_gradient(&mut self, p1: Point2D, _: Color, p2: Point2D, _: Color) {
        self.p1 = p1;
        self.p2 = p2;
    }

    fn endpoints(&self) -> (Point2D, Point2D) {
        (self.p1, self.p2)
    }

    fn colors(&self) -> Option<(Color, Color)> {
        None
    }
}

impl LineSink for ColoredLine {
    const ATTRIBUTES: AttributeSet = AttributeSet::ColoredPoint2D;

    #[inline]
    fn fill_gradient(&mut self, p1: Point2D, c1: Color, p2: Point2D, c2: Color) {
        self.set_line(p1.x, p1.y, c1, p2.x, p2.y, c2);
    }

    fn endpoints(&self) -> (Point2D, Point2D) {
        (self.p1.point(), self.p2.point())
    }

    fn colors(&self) -> Option<(Color, Color)> {
        Some((self.p1.color, self.p2.color))
    }
}

/// Nearest integer, halves rounded up: `-2.5` gives `-2`, `2.5` gives `3`.
fn round_half_up(v: f32) -> i64 {
    (f64::from(v) + 0.5).floor() as i64
}

fn fmt_endpoints(f: &mut fmt::Formatter, p1: Point2D, p2: Point2D) -> fmt::Result {
    write!(
        f,
        "{} {} -> {} {}",
        round_half_up(p1.x),
        round_half_up(p1.y),
        round_half_up(p2.x),
        round_half_up(p2.y)
    )
}

/// Endpoints rounded to whole pixels, halves towards positive infinity.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_endpoints(f, self.p1, self.p2)
    }
}

impl fmt::Display for ColoredLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_endpoints(f, self.p1.point(), self.p2.point())?;
        write!(f, " {} {}", self.p1.color, self.p2.color)
    }
}
