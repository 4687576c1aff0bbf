use crate::{glm, Brush, GeometryError, Interval, LineSink};

/// Writes consecutive segments into allocated line records.
///
/// Generic over the record type: the same drawing code fills positional
/// and colored geometry, endpoint colors come from the brush.
pub struct LinePath<'a, L> {
    lines: &'a mut [L],
    brush: Brush,
    count: usize,
    first: glm::Vec2,
    last: glm::Vec2,
}

impl<'a, L: LineSink> LinePath<'a, L> {
    pub fn new(lines: &'a mut [L], brush: impl Into<Brush>) -> Self {
        LinePath {
            lines,
            brush: brush.into(),
            count: 0,
            first: glm::vec2(0.0, 0.0),
            last: glm::vec2(0.0, 0.0),
        }
    }

    pub fn brush(mut self, brush: impl Into<Brush>) -> Self {
        self.brush = brush.into();
        self
    }

    pub fn move_to(mut self, p: glm::Vec2) -> Self {
        self.first = p;
        self.last = p;
        self
    }

    pub fn line_to(self, p: glm::Vec2) -> Result<Self, GeometryError> {
        let p0 = self.last;
        self.segment(p0, p)
    }

    pub fn close(self) -> Result<Self, GeometryError> {
        let (p0, p1) = (self.last, self.first);
        self.segment(p0, p1)
    }

    pub fn line(self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, GeometryError> {
        self.move_to(glm::vec2(x1, y1)).line_to(glm::vec2(x2, y2))
    }

    pub fn hline(self, x1: f32, x2: f32, y: f32) -> Result<Self, GeometryError> {
        self.line(x1, y, x2, y)
    }

    pub fn vline(self, x: f32, y1: f32, y2: f32) -> Result<Self, GeometryError> {
        self.line(x, y1, x, y2)
    }

    fn segment(mut self, p0: glm::Vec2, p1: glm::Vec2) -> Result<Self, GeometryError> {
        let capacity = self.lines.len();
        let line = self
            .lines
            .get_mut(self.count)
            .ok_or(GeometryError::PathOverflow { capacity })?;

        line.fill_gradient(
            p0.into(),
            self.brush.color_at(p0),
            p1.into(),
            self.brush.color_at(p1),
        );

        self.count += 1;
        self.last = p1;
        Ok(self)
    }

    /// Number of lines written.
    pub fn finish(self) -> usize {
        self.count
    }
}

/// Horizontal and vertical extent of all endpoints.
///
/// Both intervals are invalid for an empty slice.
pub fn line_bounds<L: LineSink>(lines: &[L]) -> (Interval, Interval) {
    lines
        .iter()
        .fold((Interval::default(), Interval::default()), |(x, y), line| {
            let (p1, p2) = line.endpoints();
            (
                x | f64::from(p1.x) | f64::from(p2.x),
                y | f64::from(p1.y) | f64::from(p2.y),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColoredLine, GradientStop, Line, Point2D};

    #[test]
    fn closed_triangle() {
        let mut lines = [Line::default(); 3];
        let written = LinePath::new(&mut lines, Color::BLACK)
            .move_to(glm::vec2(0.0, 0.0))
            .line_to(glm::vec2(4.0, 0.0))
            .and_then(|path| path.line_to(glm::vec2(0.0, 3.0)))
            .and_then(|path| path.close())
            .unwrap()
            .finish();

        assert_eq!(written, 3);
        assert_eq!(lines[2].p1, Point2D::new(0.0, 3.0));
        assert_eq!(lines[2].p2, Point2D::new(0.0, 0.0));
    }

    #[test]
    fn overflow_is_reported() {
        let mut lines = [Line::default(); 1];
        let result = LinePath::new(&mut lines, Color::BLACK)
            .hline(0.0, 1.0, 0.0)
            .and_then(|path| path.hline(0.0, 1.0, 1.0));

        assert!(matches!(
            result.err(),
            Some(GeometryError::PathOverflow { capacity: 1 })
        ));
    }

    #[test]
    fn gradient_brush_colors_endpoints() {
        let brush = Brush::LinearGradient {
            start: GradientStop {
                position: glm::vec2(0.0, 0.0),
                color: Color::new(255, 0, 0, 255),
            },
            end: GradientStop {
                position: glm::vec2(0.0, 10.0),
                color: Color::new(0, 0, 255, 255),
            },
        };

        let mut lines = [ColoredLine::default(); 2];
        LinePath::new(&mut lines, brush)
            .vline(0.0, 0.0, 10.0)
            .and_then(|path| path.brush(Color::WHITE).hline(0.0, 5.0, 5.0))
            .unwrap();

        assert_eq!(lines[0].p1.color, Color::new(255, 0, 0, 255));
        assert_eq!(lines[0].p2.color, Color::new(0, 0, 255, 255));
        assert_eq!(lines[1].colors(), Some((Color::WHITE, Color::WHITE)));
    }

    #[test]
    fn bounds() {
        let mut lines = [Line::default(); 2];
        lines[0].set_line(-1.0, 2.0, 3.0, 4.0);
        lines[1].set_vline(8.0, -6.0, 0.5);

        let (x, y) = line_bounds(&lines);
        assert_eq!(x, Interval::new(-1.0, 8.0));
        assert_eq!(y, Interval::new(-6.0, 4.0));

        let (x, _) = line_bounds::<Line>(&[]);
        assert!(!x.is_valid());
    }
}
