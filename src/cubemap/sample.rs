//! Lazy point sampling of cubemap pixels.

use glam::Vec3;

use super::faces::{Cubemap, FaceImage};
use crate::geometry::face_uv_to_cube;

/// A single point-cloud sample: the direction a pixel projects to on the
/// unit cube, paired with that pixel's color.
///
/// Records are produced on demand and are meant to be consumed immediately
/// by a sink such as [`crate::export::PlyWriter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    /// Direction from the cube center through the pixel. The dominant
    /// component always has magnitude 1.
    pub direction: Vec3,
    /// The pixel's color channels, unclamped.
    pub color: Vec3,
}

impl FaceImage {
    /// Returns a lazy iterator over this face's point records in row-major
    /// order.
    ///
    /// Each pixel is converted to UV coordinates with
    /// [`FaceImage::pixel_to_uv`] and projected outward through this face.
    pub fn samples(&self) -> impl Iterator<Item = PointRecord> + '_ {
        self.pixel_coords().map(move |(x, y)| {
            let (u, v) = self.pixel_to_uv(x, y);
            PointRecord {
                direction: face_uv_to_cube(self.id, u, v),
                color: self.get_pixel(x, y),
            }
        })
    }
}

impl Cubemap {
    /// Returns a lazy iterator over every pixel of every face, enumerated
    /// face-major (in [`crate::geometry::CubeFace`] index order), then
    /// row-major within a face.
    ///
    /// Yields exactly [`Cubemap::point_count`] records without buffering.
    pub fn samples(&self) -> impl Iterator<Item = PointRecord> + '_ {
        self.faces.iter().flat_map(|face| face.samples())
    }
}
