//! Conversions between face-local UV coordinates and 3-D directions.
//!
//! Directions live on the surface of the unit cube: the dominant component
//! always has magnitude 1, the other two lie in [-1, 1]. They are ray
//! directions from the cube center, not unit-length vectors.

use glam::Vec3;

use super::face::CubeFace;

/// A 2D coordinate within a cube face, with UV in [0, 1] range.
#[derive(Debug, Clone, Copy)]
pub struct FaceCoord {
    /// The cube face this coordinate belongs to.
    pub face: CubeFace,
    /// U coordinate in [0, 1] range.
    pub u: f32,
    /// V coordinate in [0, 1] range.
    pub v: f32,
}

impl FaceCoord {
    /// Creates a new face coordinate.
    pub fn new(face: CubeFace, u: f32, v: f32) -> Self {
        Self { face, u, v }
    }

    /// Converts this face coordinate to a point on the unit cube surface.
    pub fn to_cube_point(self) -> Vec3 {
        face_uv_to_cube(self.face, self.u, self.v)
    }
}

/// Converts UV coordinates on a face to a point on the unit cube surface.
///
/// UV coordinates are in [0, 1] range and map to [-1, 1] on the cube face.
/// The face's own axis is fixed at +/-1; the other two components are driven
/// by the centered coordinates per the face's sign convention.
///
/// # Arguments
/// * `face` - The cube face
/// * `u` - U coordinate in [0, 1]
/// * `v` - V coordinate in [0, 1]
pub fn face_uv_to_cube(face: CubeFace, u: f32, v: f32) -> Vec3 {
    // Map [0, 1] to [-1, 1]
    let uc = 2.0 * u - 1.0;
    let vc = 2.0 * v - 1.0;

    match face {
        CubeFace::PosX => Vec3::new(1.0, vc, -uc),
        CubeFace::NegX => Vec3::new(-1.0, vc, uc),
        CubeFace::PosY => Vec3::new(uc, 1.0, -vc),
        CubeFace::NegY => Vec3::new(uc, -1.0, vc),
        CubeFace::PosZ => Vec3::new(uc, vc, 1.0),
        CubeFace::NegZ => Vec3::new(-uc, vc, -1.0),
    }
}

/// Determines which cube face a direction projects onto and returns the
/// face-local UV coordinates.
///
/// The face is the dominant axis of the direction with its own sign. On
/// exact cross-axis magnitude ties the candidate checked last wins, so the
/// priority runs PosX, NegX, PosY, NegY, PosZ, NegZ with Z beating Y
/// beating X. A zero component counts as negative.
///
/// Inverse of [`face_uv_to_cube`] away from tie boundaries.
pub fn cube_to_face_uv(dir: Vec3) -> FaceCoord {
    let Vec3 { x, y, z } = dir;
    let ax = x.abs();
    let ay = y.abs();
    let az = z.abs();

    // Candidate faces in fixed priority order. The guards overlap on exact
    // cross-axis ties; the last satisfied guard wins.
    let candidates = [
        (CubeFace::PosX, x > 0.0 && ax >= ay && ax >= az),
        (CubeFace::NegX, x <= 0.0 && ax >= ay && ax >= az),
        (CubeFace::PosY, y > 0.0 && ay >= ax && ay >= az),
        (CubeFace::NegY, y <= 0.0 && ay >= ax && ay >= az),
        (CubeFace::PosZ, z > 0.0 && az >= ax && az >= ay),
        (CubeFace::NegZ, z <= 0.0 && az >= ax && az >= ay),
    ];

    let mut face = CubeFace::PosX;
    for (candidate, dominant) in candidates {
        if dominant {
            face = candidate;
        }
    }

    // Project the two non-dominant axes onto centered coordinates, reading
    // the forward table in reverse.
    let (max_axis, uc, vc) = match face {
        CubeFace::PosX => (ax, -z, y),
        CubeFace::NegX => (ax, z, y),
        CubeFace::PosY => (ay, x, -z),
        CubeFace::NegY => (ay, x, z),
        CubeFace::PosZ => (az, x, y),
        CubeFace::NegZ => (az, -x, y),
    };

    // Map [-1, 1] back to [0, 1]
    let u = 0.5 * (uc / max_axis + 1.0);
    let v = 0.5 * (vc / max_axis + 1.0);

    FaceCoord::new(face, u, v)
}
