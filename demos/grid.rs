use grr_vertex::{
    allocate_lines, debug_geometry, AttributeSet, Brush, Color, ColoredLine, Geometry,
    GeometryOptions, GradientStop, LinePath,
};
use nalgebra_glm as glm;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let cells = 8;
    let size = 256.0;
    let step = size / cells as f32;

    let brush = Brush::LinearGradient {
        start: GradientStop {
            position: glm::vec2(0.0, 0.0),
            color: Color::from_argb(0xff_ff_40_40),
        },
        end: GradientStop {
            position: glm::vec2(size, size),
            color: Color::from_argb(0x80_40_40_ff),
        },
    };

    let mut geometry = Geometry::with_options(
        AttributeSet::ColoredPoint2D,
        GeometryOptions::default().with_line_width(2.0),
    );
    let lines = allocate_lines::<ColoredLine>(&mut geometry, 2 * (cells + 1))?;

    let mut path = LinePath::new(lines, brush);
    for i in 0..=cells {
        let offset = i as f32 * step;
        path = path.hline(0.0, size, offset)?.vline(offset, 0.0, size)?;
    }
    let written = path.finish();

    tracing::info!(
        written,
        vertex_count = geometry.vertex_count(),
        bytes = geometry.vertex_data().len(),
        "grid geometry ready"
    );
    debug_geometry(&geometry);

    Ok(())
}
