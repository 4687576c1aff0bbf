use crate::{glm, Color};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub position: glm::Vec2,
    pub color: Color,
}

/// Color source for line endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient {
        start: GradientStop,
        end: GradientStop,
    },
}

impl Brush {
    /// Color at `p`. Gradients are clamped to their stop colors outside
    /// the start-end span.
    pub fn color_at(&self, p: glm::Vec2) -> Color {
        match *self {
            Brush::Solid(color) => color,
            Brush::LinearGradient { ref start, ref end } => {
                let axis = end.position - start.position;
                let len2 = glm::dot(&axis, &axis);
                if len2 <= 0.0 {
                    return start.color;
                }

                let t = glm::dot(&(p - start.position), &axis) / len2;
                start.color.interpolated_to(end.color, f64::from(t))
            }
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> Brush {
        Brush::LinearGradient {
            start: GradientStop {
                position: glm::vec2(0.0, 0.0),
                color: Color::new(0, 0, 0, 255),
            },
            end: GradientStop {
                position: glm::vec2(10.0, 0.0),
                color: Color::new(200, 100, 0, 255),
            },
        }
    }

    #[test]
    fn solid() {
        let brush = Brush::from(Color::WHITE);
        assert_eq!(brush.color_at(glm::vec2(-5.0, 3.0)), Color::WHITE);
    }

    #[test]
    fn gradient_projects_onto_axis() {
        let brush = horizontal();
        assert_eq!(brush.color_at(glm::vec2(5.0, 7.0)), Color::new(100, 50, 0, 255));
    }

    #[test]
    fn gradient_stops_are_exact() {
        let brush = horizontal();
        assert_eq!(brush.color_at(glm::vec2(0.0, 0.0)), Color::new(0, 0, 0, 255));
        assert_eq!(brush.color_at(glm::vec2(-3.0, 0.0)), Color::new(0, 0, 0, 255));
        assert_eq!(brush.color_at(glm::vec2(10.0, 0.0)), Color::new(200, 100, 0, 255));
        assert_eq!(brush.color_at(glm::vec2(40.0, 1.0)), Color::new(200, 100, 0, 255));
    }

    #[test]
    fn degenerate_gradient_uses_start() {
        let stop = GradientStop {
            position: glm::vec2(1.0, 1.0),
            color: Color::WHITE,
        };
        let brush = Brush::LinearGradient {
            start: stop,
            end: GradientStop {
                color: Color::BLACK,
                ..stop
            },
        };
        assert_eq!(brush.color_at(glm::vec2(3.0, 3.0)), Color::WHITE);
    }
}
