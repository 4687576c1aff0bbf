use crate::{GeometryError, LineSink};
use zerocopy::{FromBytes, IntoBytes};

/// Per-vertex layout of a [`Geometry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttributeSet {
    /// Position only, matches [`Line`](crate::Line).
    Point2D,
    /// Position and color, matches [`ColoredLine`](crate::ColoredLine).
    ColoredPoint2D,
    /// Any other layout, e.g. textured points.
    Custom {
        attribute_count: usize,
        vertex_size: usize,
    },
}

impl AttributeSet {
    pub fn attribute_count(&self) -> usize {
        match *self {
            AttributeSet::Point2D => 1,
            AttributeSet::ColoredPoint2D => 2,
            AttributeSet::Custom {
                attribute_count, ..
            } => attribute_count,
        }
    }

    /// Bytes per vertex.
    pub fn vertex_size(&self) -> usize {
        match *self {
            AttributeSet::Point2D => 8,
            AttributeSet::ColoredPoint2D => 12,
            AttributeSet::Custom { vertex_size, .. } => vertex_size,
        }
    }
}

/// Upload hint for the rendering boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DataPattern {
    Static,
    #[default]
    Dynamic,
    Stream,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometryOptions {
    pub line_width: f32,
    pub data_pattern: DataPattern,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        GeometryOptions {
            line_width: 1.0,
            data_pattern: DataPattern::default(),
        }
    }
}

impl GeometryOptions {
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_data_pattern(mut self, data_pattern: DataPattern) -> Self {
        self.data_pattern = data_pattern;
        self
    }
}

/// Vertex storage for line geometry, drawn as a line list.
///
/// Vertices live in 4 byte words so every record type can be viewed in
/// place. Each allocation starts a new generation; views created for an
/// older generation are rejected.
#[derive(Clone, Debug)]
pub struct Geometry {
    attributes: AttributeSet,
    options: GeometryOptions,
    vertex_count: usize,
    words: Vec<u32>,
    generation: u64,
    dirty: bool,
}

impl Geometry {
    pub fn new(attributes: AttributeSet) -> Self {
        Geometry::with_options(attributes, GeometryOptions::default())
    }

    pub fn with_options(attributes: AttributeSet, options: GeometryOptions) -> Self {
        Geometry {
            attributes,
            options,
            vertex_count: 0,
            words: Vec::new(),
            generation: 0,
            dirty: false,
        }
    }

    /// Replaces the vertex data with `vertex_count` zeroed vertices.
    ///
    /// On failure the geometry is left empty.
    pub fn allocate(&mut self, vertex_count: usize) -> Result<(), GeometryError> {
        let vertex_size = self.attributes.vertex_size();
        let bytes = vertex_count
            .checked_mul(vertex_size)
            .ok_or(GeometryError::CapacityOverflow {
                vertex_count,
                vertex_size,
            })?;
        let word_count = bytes.div_ceil(4);

        self.words.clear();
        self.vertex_count = 0;
        self.generation += 1;
        self.dirty = true;

        self.words
            .try_reserve_exact(word_count)
            .map_err(|source| GeometryError::Allocation { bytes, source })?;
        self.words.resize(word_count, 0);
        self.vertex_count = vertex_count;

        tracing::trace!(
            vertex_count,
            bytes,
            generation = self.generation,
            "allocate geometry"
        );

        Ok(())
    }

    /// Changes the vertex layout, dropping the current vertex data.
    pub fn set_attribute_set(&mut self, attributes: AttributeSet) {
        if self.attributes != attributes {
            self.attributes = attributes;
            self.words.clear();
            self.vertex_count = 0;
            self.generation += 1;
            self.dirty = true;
        }
    }

    pub fn attribute_set(&self) -> AttributeSet {
        self.attributes
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.attribute_count()
    }

    pub fn vertex_size(&self) -> usize {
        self.attributes.vertex_size()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn options(&self) -> &GeometryOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: GeometryOptions) {
        self.options = options;
    }

    pub fn line_width(&self) -> f32 {
        self.options.line_width
    }

    pub fn vertex_data(&self) -> &[u8] {
        let len = self.vertex_count * self.vertex_size();
        &self.words.as_bytes()[..len]
    }

    pub fn vertex_data_mut(&mut self) -> &mut [u8] {
        let len = self.vertex_count * self.vertex_size();
        &mut self.words.as_mut_bytes()[..len]
    }

    pub fn mark_vertex_data_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the vertex data changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn line_bytes<L: LineSink>(&self) -> Result<usize, GeometryError> {
        if self.attributes != L::ATTRIBUTES {
            return Err(GeometryError::LayoutMismatch {
                expected: L::ATTRIBUTES,
                actual: self.attributes,
            });
        }
        Ok(self.vertex_count / 2 * std::mem::size_of::<L>())
    }

    /// Vertex data as `vertex_count / 2` line records.
    pub fn lines<L: LineSink>(&self) -> Result<&[L], GeometryError> {
        let len = self.line_bytes::<L>()?;
        <[L]>::ref_from_bytes(&self.words.as_bytes()[..len]).map_err(|_| {
            GeometryError::LayoutMismatch {
                expected: L::ATTRIBUTES,
                actual: self.attributes,
            }
        })
    }

    /// Mutable line records, marks the vertex data dirty.
    pub fn lines_mut<L: LineSink>(&mut self) -> Result<&mut [L], GeometryError> {
        let len = self.line_bytes::<L>()?;
        let actual = self.attributes;
        self.dirty = true;
        <[L]>::mut_from_bytes(&mut self.words.as_mut_bytes()[..len]).map_err(|_| {
            GeometryError::LayoutMismatch {
                expected: L::ATTRIBUTES,
                actual,
            }
        })
    }
}
