use crate::{ColoredLine, Geometry, Line, LineSink};
use std::fmt;
use zerocopy::FromBytes;

/// Receiver for geometry dump lines.
pub trait DumpSink {
    fn record(&mut self, line: fmt::Arguments);
}

/// Collects the dump, one string per line record.
impl DumpSink for Vec<String> {
    fn record(&mut self, line: fmt::Arguments) {
        self.push(line.to_string());
    }
}

/// Forwards the dump to `tracing` at debug level.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DumpSink for TracingSink {
    fn record(&mut self, line: fmt::Arguments) {
        tracing::debug!("{}", line);
    }
}

/// Writes every line of `geometry` to `sink` as `<index> : <x> <y> -> <x> <y>`,
/// followed by the endpoint colors for colored geometry.
///
/// The record type is picked by attribute count: 1 for [`Line`], 2 for
/// [`ColoredLine`]. Anything else, or a vertex size that differs from the
/// picked type, is skipped.
pub fn dump_geometry<S: DumpSink + ?Sized>(geometry: &Geometry, sink: &mut S) {
    match geometry.attribute_count() {
        1 => dump_lines::<Line, S>(geometry, sink),
        2 => dump_lines::<ColoredLine, S>(geometry, sink),
        attribute_count => {
            tracing::trace!(attribute_count, "skip dump of unknown vertex layout");
        }
    }
}

fn dump_lines<L: LineSink, S: DumpSink + ?Sized>(geometry: &Geometry, sink: &mut S) {
    let line_count = geometry.vertex_count() / 2;
    if 2 * geometry.vertex_size() != std::mem::size_of::<L>() {
        tracing::trace!(
            vertex_size = geometry.vertex_size(),
            line_count,
            "skip dump of mismatched vertex size"
        );
        return;
    }

    let bytes = geometry
        .vertex_data()
        .get(..line_count * std::mem::size_of::<L>());

    let lines = match bytes.map(|bytes| <[L]>::ref_from_bytes(bytes)) {
        Some(Ok(lines)) => lines,
        _ => {
            tracing::trace!(
                vertex_size = geometry.vertex_size(),
                line_count,
                "skip dump of mismatched vertex data"
            );
            return;
        }
    };

    for (i, line) in lines.iter().enumerate() {
        sink.record(format_args!("{} : {}", i, line));
    }
}

/// Dumps `geometry` through `tracing`. Empty without the `diagnostics` feature.
#[cfg(feature = "diagnostics")]
pub fn debug_geometry(geometry: &Geometry) {
    dump_geometry(geometry, &mut TracingSink);
}

#[cfg(not(feature = "diagnostics"))]
#[inline]
pub fn debug_geometry(_: &Geometry) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{allocate_lines, AttributeSet, Color};

    #[test]
    fn positional_dump() {
        let mut geometry = Geometry::new(AttributeSet::Point2D);
        let lines = allocate_lines::<Line>(&mut geometry, 2).unwrap();
        lines[0].set_line(0.2, 0.7, 10.4, 20.5);
        lines[1].set_vline(-3.0, 1.0, 2.0);

        let mut out: Vec<String> = Vec::new();
        dump_geometry(&geometry, &mut out);
        assert_eq!(out, ["0 : 0 1 -> 10 21", "1 : -3 1 -> -3 2"]);
    }

    #[test]
    fn colored_dump() {
        let mut geometry = Geometry::new(AttributeSet::ColoredPoint2D);
        let lines = allocate_lines::<ColoredLine>(&mut geometry, 1).unwrap();
        lines[0].set_line(1.0, 2.0, Color::new(1, 2, 3, 4), 3.0, 4.0, Color::WHITE);

        let mut out: Vec<String> = Vec::new();
        dump_geometry(&geometry, &mut out);
        assert_eq!(out, ["0 : 1 2 -> 3 4 C(1,2,3,4) C(255,255,255,255)"]);
    }

    #[test]
    fn unknown_layout_is_skipped() {
        let mut geometry = Geometry::new(AttributeSet::Custom {
            attribute_count: 3,
            vertex_size: 20,
        });
        geometry.allocate(4).unwrap();

        let mut out: Vec<String> = Vec::new();
        dump_geometry(&geometry, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn short_vertex_data_is_skipped() {
        // two attributes, but smaller than a colored vertex
        let mut geometry = Geometry::new(AttributeSet::Custom {
            attribute_count: 2,
            vertex_size: 4,
        });
        geometry.allocate(4).unwrap();

        let mut out: Vec<String> = Vec::new();
        dump_geometry(&geometry, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn wide_vertex_data_is_skipped() {
        // two attributes, but wider than a colored vertex
        let mut geometry = Geometry::new(AttributeSet::Custom {
            attribute_count: 2,
            vertex_size: 16,
        });
        geometry.allocate(4).unwrap();
        for (i, b) in geometry.vertex_data_mut().iter_mut().enumerate() {
            *b = (i * 7) as u8;
        }

        let mut out: Vec<String> = Vec::new();
        dump_geometry(&geometry, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_geometry() {
        let mut out: Vec<String> = Vec::new();
        dump_geometry(&Geometry::new(AttributeSet::Point2D), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn tracing_dump_does_not_panic() {
        let mut geometry = Geometry::new(AttributeSet::Point2D);
        allocate_lines::<Line>(&mut geometry, 3).unwrap();
        debug_geometry(&geometry);
    }
}
