//! Export contents of `utils` folder
mod geometry;

pub use self::geometry::*;
