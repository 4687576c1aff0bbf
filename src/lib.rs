//! Vertex encoding for line geometry: premultiplied colors, fixed binary
//! line records and the buffer they are written into.

use nalgebra_glm as glm;

mod allocator;
mod brush;
mod color;
mod debug;
mod error;
mod geometry;
mod interval;
mod line;
mod path;

pub use crate::allocator::*;
pub use crate::brush::*;
pub use crate::color::*;
pub use crate::debug::*;
pub use crate::error::*;
pub use crate::geometry::*;
pub use crate::interval::*;
pub use crate::line::*;
pub use crate::path::*;
