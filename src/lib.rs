//! Cubemap to colored point cloud converter.
//!
//! This crate samples the six face images of a cubemap into a point cloud on
//! the unit cube surface and exports it as a binary little-endian PLY file.

pub mod cubemap;
pub mod export;
pub mod geometry;

pub use cubemap::{Cubemap, CubemapError, FaceImage, PointRecord};
pub use export::{export_cubemap_ply, PlyExportError, PlyWriter};
pub use geometry::{cube_to_face_uv, face_uv_to_cube, CubeFace, FaceCoord};
