//! Cubemap face images and their construction.

use std::path::{Path, PathBuf};

use glam::Vec3;
use rayon::prelude::*;
use thiserror::Error;

use crate::geometry::CubeFace;

/// Errors that can occur while building a cubemap.
///
/// Both kinds are fatal: construction is all-or-nothing and no point records
/// are produced once either is raised.
#[derive(Error, Debug)]
pub enum CubemapError {
    #[error("Cannot load face image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error(
        "Face image size mismatch: {face:?} is {got_width}x{got_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        face: CubeFace,
        got_width: u32,
        got_height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}

/// A single decoded cubemap face: a 2-D grid of color values.
///
/// Pixels are stored row-major. Channel intensities are unbounded floats;
/// images decoded from disk carry their 8-bit values widened to the 0-255
/// range. The grid is read-only after construction.
#[derive(Debug, Clone)]
pub struct FaceImage {
    /// Which face of the cubemap this image covers.
    pub id: CubeFace,
    /// Width in pixels (columns).
    pub width: u32,
    /// Height in pixels (rows).
    pub height: u32,
    /// Pixel colors in row-major order.
    pub pixels: Vec<Vec3>,
}

impl FaceImage {
    /// Creates a face image from raw pixel data in row-major order.
    ///
    /// # Panics
    /// Panics if `pixels.len()` does not equal `width * height`.
    pub fn from_pixels(id: CubeFace, width: u32, height: u32, pixels: Vec<Vec3>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel data length must match the face extents"
        );
        Self {
            id,
            width,
            height,
            pixels,
        }
    }

    /// Decodes a face image from a file.
    ///
    /// Any format the `image` crate understands is accepted; pixels are
    /// converted to 8-bit RGB and widened to float channels in 0-255.
    pub fn load(id: CubeFace, path: &Path) -> Result<Self, CubemapError> {
        let img = image::open(path).map_err(|source| CubemapError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb
            .pixels()
            .map(|p| Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32))
            .collect();

        Ok(Self {
            id,
            width,
            height,
            pixels,
        })
    }

    /// Returns the color at the given pixel coordinate.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Vec3 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Converts a pixel coordinate to UV coordinates in [0, 1] range.
    ///
    /// Corner-to-corner convention: pixel (0, 0) maps to (0.0, 0.0) and the
    /// last column/row lands exactly on 1.0. A single-column or single-row
    /// face maps its only coordinate to 0.0.
    pub fn pixel_to_uv(&self, x: u32, y: u32) -> (f32, f32) {
        let u = if self.width > 1 {
            x as f32 / (self.width - 1) as f32
        } else {
            0.0
        };
        let v = if self.height > 1 {
            y as f32 / (self.height - 1) as f32
        } else {
            0.0
        };
        (u, v)
    }

    /// Returns the total number of pixels in this face.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Returns an iterator over all (x, y) pixel coordinates, row-major.
    pub fn pixel_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width;
        (0..self.height).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

/// Six equally sized face images forming a complete cubemap.
///
/// Faces are stored in [`CubeFace`] index order. All six share identical
/// extents; construction fails otherwise.
#[derive(Debug, Clone)]
pub struct Cubemap {
    /// The six faces, indexed by [`CubeFace::index`].
    pub faces: [FaceImage; 6],
}

impl Cubemap {
    /// Builds a cubemap from six pre-decoded faces, validating that every
    /// face matches the first face's extents.
    pub fn from_faces(faces: [FaceImage; 6]) -> Result<Self, CubemapError> {
        let expected_width = faces[0].width;
        let expected_height = faces[0].height;

        for face in &faces[1..] {
            if face.width != expected_width || face.height != expected_height {
                return Err(CubemapError::DimensionMismatch {
                    face: face.id,
                    got_width: face.width,
                    got_height: face.height,
                    expected_width,
                    expected_height,
                });
            }
        }

        Ok(Self { faces })
    }

    /// Loads a cubemap from six image files given in face-index order
    /// (+X, -X, +Y, -Y, +Z, -Z).
    ///
    /// The six decodes are independent and run on the rayon pool; dimension
    /// validation happens once all of them finish.
    pub fn load<P: AsRef<Path> + Sync>(paths: &[P; 6]) -> Result<Self, CubemapError> {
        let face_ids = CubeFace::all();
        let faces: Vec<FaceImage> = face_ids
            .as_slice()
            .par_iter()
            .map(|&face| FaceImage::load(face, paths[face.index()].as_ref()))
            .collect::<Result<_, _>>()?;

        let faces: [FaceImage; 6] = faces.try_into().expect("exactly six face images");
        Self::from_faces(faces)
    }

    /// Returns the width of every face in pixels.
    pub fn width(&self) -> u32 {
        self.faces[0].width
    }

    /// Returns the height of every face in pixels.
    pub fn height(&self) -> u32 {
        self.faces[0].height
    }

    /// Returns a reference to a specific face.
    pub fn face(&self, id: CubeFace) -> &FaceImage {
        &self.faces[id.index()]
    }

    /// Returns the total number of pixels across all six faces, which is
    /// also the number of point records [`Cubemap::samples`] yields.
    pub fn point_count(&self) -> u64 {
        6 * self.width() as u64 * self.height() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_face(id: CubeFace, width: u32, height: u32, color: Vec3) -> FaceImage {
        FaceImage::from_pixels(id, width, height, vec![color; (width * height) as usize])
    }

    fn solid_faces(width: u32, height: u32) -> [FaceImage; 6] {
        CubeFace::all().map(|id| solid_face(id, width, height, Vec3::new(10.0, 20.0, 30.0)))
    }

    #[test]
    fn test_face_image_from_pixels() {
        let pixels = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let face = FaceImage::from_pixels(CubeFace::PosX, 3, 2, pixels);

        assert_eq!(face.pixel_count(), 6);
        assert_eq!(face.get_pixel(0, 0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(face.get_pixel(2, 0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(face.get_pixel(0, 1), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    #[should_panic]
    fn test_from_pixels_wrong_length() {
        FaceImage::from_pixels(CubeFace::PosX, 2, 2, vec![Vec3::ZERO; 3]);
    }

    #[test]
    fn test_pixel_to_uv_corners() {
        let face = solid_face(CubeFace::PosZ, 3, 2, Vec3::ZERO);

        assert_eq!(face.pixel_to_uv(0, 0), (0.0, 0.0));
        assert_eq!(face.pixel_to_uv(2, 1), (1.0, 1.0));
        assert_eq!(face.pixel_to_uv(1, 0), (0.5, 0.0));
    }

    #[test]
    fn test_pixel_to_uv_single_pixel() {
        let face = solid_face(CubeFace::PosZ, 1, 1, Vec3::ZERO);
        assert_eq!(face.pixel_to_uv(0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_pixel_coords_order() {
        let face = solid_face(CubeFace::NegX, 3, 2, Vec3::ZERO);
        let coords: Vec<_> = face.pixel_coords().collect();

        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (1, 0));
        assert_eq!(coords[3], (0, 1));
        assert_eq!(coords[5], (2, 1));
    }

    #[test]
    fn test_cubemap_construction() {
        let cubemap = Cubemap::from_faces(solid_faces(4, 3)).unwrap();

        assert_eq!(cubemap.width(), 4);
        assert_eq!(cubemap.height(), 3);
        assert_eq!(cubemap.point_count(), 6 * 4 * 3);
        assert_eq!(cubemap.face(CubeFace::NegZ).id, CubeFace::NegZ);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut faces = solid_faces(2, 2);
        faces[3] = solid_face(CubeFace::NegY, 3, 2, Vec3::ZERO);

        let err = Cubemap::from_faces(faces).unwrap_err();
        match err {
            CubemapError::DimensionMismatch {
                face,
                got_width,
                got_height,
                expected_width,
                expected_height,
            } => {
                assert_eq!(face, CubeFace::NegY);
                assert_eq!((got_width, got_height), (3, 2));
                assert_eq!((expected_width, expected_height), (2, 2));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = FaceImage::load(CubeFace::PosX, Path::new("definitely/not/here.png"))
            .unwrap_err();

        assert!(matches!(err, CubemapError::ImageLoad { .. }));
        assert!(err.to_string().contains("definitely/not/here.png"));
    }

    #[test]
    fn test_cubemap_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();

        for (i, id) in CubeFace::all().iter().enumerate() {
            let img = image::RgbImage::from_pixel(2, 2, image::Rgb([i as u8 * 40, 0, 255]));
            let path = dir.path().join(format!("{}.png", id.short_name()));
            img.save(&path).unwrap();
            paths.push(path);
        }

        let paths: [_; 6] = paths.try_into().unwrap();
        let cubemap = Cubemap::load(&paths).unwrap();

        assert_eq!(cubemap.width(), 2);
        assert_eq!(cubemap.height(), 2);
        assert_eq!(
            cubemap.face(CubeFace::PosY).get_pixel(1, 1),
            Vec3::new(80.0, 0.0, 255.0)
        );
    }

    #[test]
    fn test_cubemap_load_mismatched_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();

        for (i, id) in CubeFace::all().iter().enumerate() {
            let size = if i == 5 { 3 } else { 2 };
            let img = image::RgbImage::from_pixel(size, size, image::Rgb([0, 0, 0]));
            let path = dir.path().join(format!("{}.png", id.short_name()));
            img.save(&path).unwrap();
            paths.push(path);
        }

        let paths: [_; 6] = paths.try_into().unwrap();
        let err = Cubemap::load(&paths).unwrap_err();
        assert!(matches!(err, CubemapError::DimensionMismatch { .. }));
    }
}
