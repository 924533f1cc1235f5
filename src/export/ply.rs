//! Binary PLY export of cubemap point clouds.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::cubemap::{Cubemap, PointRecord};

/// Errors that can occur during PLY export.
#[derive(Error, Debug)]
pub enum PlyExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Size in bytes of one encoded vertex record: three little-endian f32
/// coordinates followed by three u8 color channels.
pub const VERTEX_RECORD_SIZE: usize = 15;

/// Builds the ASCII header for a binary little-endian PLY file with the
/// given number of vertices.
pub fn ply_header(vertex_count: u64) -> String {
    format!(
        "ply\n\
         format binary_little_endian 1.0\n\
         element vertex {}\n\
         property float x\n\
         property float y\n\
         property float z\n\
         property uchar red\n\
         property uchar green\n\
         property uchar blue\n\
         end_header\n",
        vertex_count
    )
}

/// Returns the expected file size for a PLY export with the given number
/// of vertices: the header followed by one fixed-size record per vertex.
pub fn expected_file_size(vertex_count: u64) -> u64 {
    ply_header(vertex_count).len() as u64 + vertex_count * VERTEX_RECORD_SIZE as u64
}

/// Quantizes a float color channel to a byte: round to nearest, then clamp
/// to the 0-255 range.
pub fn quantize_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Streaming writer for binary little-endian PLY point clouds.
///
/// The header declares the vertex count up front, so the caller must append
/// exactly the count promised to [`PlyWriter::create`]. The writer does not
/// track appends; a mismatch shows up as a file whose size differs from
/// [`expected_file_size`].
pub struct PlyWriter {
    out: BufWriter<File>,
}

impl PlyWriter {
    /// Creates the output file and writes the PLY header for
    /// `vertex_count` vertices.
    pub fn create(path: &Path, vertex_count: u64) -> Result<Self, PlyExportError> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        out.write_all(ply_header(vertex_count).as_bytes())?;
        Ok(Self { out })
    }

    /// Appends one vertex record: the direction as three little-endian
    /// f32 values, then the color as three quantized bytes.
    pub fn append(&mut self, record: &PointRecord) -> Result<(), PlyExportError> {
        self.out.write_all(&record.direction.x.to_le_bytes())?;
        self.out.write_all(&record.direction.y.to_le_bytes())?;
        self.out.write_all(&record.direction.z.to_le_bytes())?;
        self.out.write_all(&[
            quantize_channel(record.color.x),
            quantize_channel(record.color.y),
            quantize_channel(record.color.z),
        ])?;
        Ok(())
    }

    /// Flushes buffered records and closes the writer. Taking `self` by
    /// value means a finished writer cannot accept further appends.
    pub fn finish(mut self) -> Result<(), PlyExportError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Exports a cubemap as a colored point cloud in binary PLY format.
///
/// Every pixel of every face becomes one vertex whose position is the
/// pixel's direction on the unit cube and whose color is the pixel's
/// quantized RGB value. Records are streamed straight from
/// [`Cubemap::samples`] without collecting them.
///
/// # Arguments
/// * `cubemap` - The cubemap to sample
/// * `path` - Output file path
///
/// # Returns
/// `Ok(())` on success, or an error if writing fails
pub fn export_cubemap_ply(cubemap: &Cubemap, path: &Path) -> Result<(), PlyExportError> {
    let mut writer = PlyWriter::create(path, cubemap.point_count())?;

    for record in cubemap.samples() {
        writer.append(&record)?;
    }

    writer.finish()
}
