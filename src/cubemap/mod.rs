//! Cubemap loading and pixel sampling.
//!
//! A [`Cubemap`] holds six equally sized [`FaceImage`] grids, one per
//! [`crate::geometry::CubeFace`]. Its [`Cubemap::samples`] iterator walks
//! every pixel and pairs the pixel's outward direction with its color,
//! producing the [`PointRecord`] stream the export layer consumes.

mod faces;
mod sample;

pub use faces::{Cubemap, CubemapError, FaceImage};
pub use sample::PointRecord;
