//! Cubemap geometry module.
//!
//! Provides the cube face enumeration and the projection between face-local
//! UV coordinates and 3-D directions on the unit cube surface.

mod face;
mod projection;

pub use face::CubeFace;
pub use projection::{FaceCoord, cube_to_face_uv, face_uv_to_cube};
