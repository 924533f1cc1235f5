//! Cube face identification and enumeration.

/// One of the six faces of a cubemap, identified by its dominant axis and sign.
///
/// The discriminants follow the conventional cubemap face order, which is
/// also the order face images are supplied to [`crate::Cubemap::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face (right)
    PosX = 0,
    /// -X face (left)
    NegX = 1,
    /// +Y face (top)
    PosY = 2,
    /// -Y face (bottom)
    NegY = 3,
    /// +Z face (front)
    PosZ = 4,
    /// -Z face (back)
    NegZ = 5,
}

impl CubeFace {
    /// Returns all six cube faces in index order.
    pub const fn all() -> [CubeFace; 6] {
        [
            CubeFace::PosX,
            CubeFace::NegX,
            CubeFace::PosY,
            CubeFace::NegY,
            CubeFace::PosZ,
            CubeFace::NegZ,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<CubeFace> {
        match index {
            0 => Some(CubeFace::PosX),
            1 => Some(CubeFace::NegX),
            2 => Some(CubeFace::PosY),
            3 => Some(CubeFace::NegY),
            4 => Some(CubeFace::PosZ),
            5 => Some(CubeFace::NegZ),
            _ => None,
        }
    }

    /// Returns a short name for the face (e.g., "posx", "negy").
    pub const fn short_name(self) -> &'static str {
        match self {
            CubeFace::PosX => "posx",
            CubeFace::NegX => "negx",
            CubeFace::PosY => "posy",
            CubeFace::NegY => "negy",
            CubeFace::PosZ => "posz",
            CubeFace::NegZ => "negz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_order_and_names() {
        let names = ["posx", "negx", "posy", "negy", "posz", "negz"];
        for (i, face) in CubeFace::all().iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(face.short_name(), names[i]);
        }
    }

    #[test]
    fn test_from_index_roundtrip() {
        for face in CubeFace::all() {
            assert_eq!(CubeFace::from_index(face.index()), Some(face));
        }
        assert!(CubeFace::from_index(6).is_none());
    }
}
