//! Export module for saving point clouds to disk.
//!
//! Currently supports binary little-endian PLY, written as a stream so the
//! cloud never has to fit in memory.

mod ply;

pub use ply::{
    export_cubemap_ply,
    expected_file_size,
    ply_header,
    quantize_channel,
    PlyExportError,
    PlyWriter,
    VERTEX_RECORD_SIZE,
};
