use crate::AttributeSet;
use std::collections::TryReserveError;

/// Errors raised while sizing or viewing a [`Geometry`](crate::Geometry).
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum GeometryError {
    /// The byte size of the requested vertex storage does not fit `usize`.
    #[error("{vertex_count} vertices of {vertex_size} bytes overflow the address space")]
    CapacityOverflow {
        vertex_count: usize,
        vertex_size: usize,
    },

    /// The allocator refused to grow the vertex storage.
    #[error("failed to allocate {bytes} bytes of vertex data")]
    Allocation {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    /// A [`LineView`](crate::LineView) outlived the allocation it was created for.
    #[error("stale line view: created for generation {expected}, geometry is at {actual}")]
    StaleView { expected: u64, actual: u64 },

    /// A typed access does not match the attribute set of the geometry.
    #[error("layout mismatch: expected {expected:?}, geometry uses {actual:?}")]
    LayoutMismatch {
        expected: AttributeSet,
        actual: AttributeSet,
    },

    /// A [`LinePath`](crate::LinePath) ran past the end of its lines.
    #[error("line path overflow: view holds {capacity} lines")]
    PathOverflow { capacity: usize },
}
