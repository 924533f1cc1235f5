//! Cubecloud CLI - cubemap to point cloud converter.
//!
//! Samples the six faces of a cubemap into a colored point cloud on the
//! unit cube surface and writes it as a binary little-endian PLY file.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use cubecloud::export::{expected_file_size, export_cubemap_ply};
use cubecloud::Cubemap;

/// Convert six cubemap face images into a colored PLY point cloud.
#[derive(Parser)]
#[command(name = "cubecloud")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image for the +X face.
    posx: PathBuf,

    /// Image for the -X face.
    negx: PathBuf,

    /// Image for the +Y face.
    posy: PathBuf,

    /// Image for the -Y face.
    negy: PathBuf,

    /// Image for the +Z face.
    posz: PathBuf,

    /// Image for the -Z face.
    negz: PathBuf,

    /// Output PLY file path.
    #[arg(short, long, default_value = "cloud.ply")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    println!("Cubecloud - Cubemap Point Cloud Converter");
    println!("=========================================");

    let start = Instant::now();

    println!("Loading 6 face images...");
    let paths = [cli.posx, cli.negx, cli.posy, cli.negy, cli.posz, cli.negz];
    let cubemap = Cubemap::load(&paths).unwrap_or_else(|e| {
        eprintln!("Error loading cubemap: {}", e);
        std::process::exit(1);
    });

    println!(
        "  {}x{} per face, {} points total ({:.2?})",
        cubemap.width(),
        cubemap.height(),
        cubemap.point_count(),
        start.elapsed()
    );

    println!("Writing {}...", cli.output.display());
    let export_start = Instant::now();

    export_cubemap_ply(&cubemap, &cli.output).unwrap_or_else(|e| {
        eprintln!("Error exporting PLY: {}", e);
        std::process::exit(1);
    });

    println!(
        "  {} bytes ({:.2?})",
        expected_file_size(cubemap.point_count()),
        export_start.elapsed()
    );

    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
}
