use crate::{Geometry, GeometryError, LineSink};
use std::marker::PhantomData;

/// Sizes `geometry` for `line_count` lines of type `L` and returns them.
///
/// The attribute set is switched to match `L`, so one routine serves both
/// positional and colored call sites. Records start zeroed.
pub fn allocate_lines<L: LineSink>(
    geometry: &mut Geometry,
    line_count: usize,
) -> Result<&mut [L], GeometryError> {
    let vertex_count = line_count
        .checked_mul(2)
        .ok_or(GeometryError::CapacityOverflow {
            vertex_count: usize::MAX,
            vertex_size: L::ATTRIBUTES.vertex_size(),
        })?;

    geometry.set_attribute_set(L::ATTRIBUTES);
    geometry.allocate(vertex_count)?;
    geometry.lines_mut::<L>()
}

/// Detached handle to the lines of one allocation.
///
/// Unlike the slice returned by [`allocate_lines`] it does not borrow the
/// geometry; it is resolved on access and rejected once the geometry has
/// been reallocated.
pub struct LineView<L> {
    generation: u64,
    line_count: usize,
    _marker: PhantomData<fn() -> L>,
}

impl<L> LineView<L> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.line_count
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}

impl<L> Clone for LineView<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for LineView<L> {}

impl<L> std::fmt::Debug for LineView<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("LineView")
            .field("generation", &self.generation)
            .field("line_count", &self.line_count)
            .finish()
    }
}

impl Geometry {
    /// Like [`allocate_lines`], returning a generation stamped handle.
    pub fn allocate_view<L: LineSink>(
        &mut self,
        line_count: usize,
    ) -> Result<LineView<L>, GeometryError> {
        allocate_lines::<L>(self, line_count)?;
        Ok(LineView {
            generation: self.generation(),
            line_count,
            _marker: PhantomData,
        })
    }

    fn check_view<L>(&self, view: &LineView<L>) -> Result<(), GeometryError> {
        if view.generation != self.generation() {
            return Err(GeometryError::StaleView {
                expected: view.generation,
                actual: self.generation(),
            });
        }
        Ok(())
    }

    pub fn view<L: LineSink>(&self, view: &LineView<L>) -> Result<&[L], GeometryError> {
        self.check_view(view)?;
        self.lines::<L>()
    }

    pub fn view_mut<L: LineSink>(
        &mut self,
        view: &LineView<L>,
    ) -> Result<&mut [L], GeometryError> {
        self.check_view(view)?;
        self.lines_mut::<L>()
    }
}
