//! Grid Walkthrough Example
//!
//! Fills a 32x32 area with a regular grid of points and runs each kind of
//! search against it, printing the encoded paths and the size of each
//! result set. Run with `RUST_LOG=debug` to see the range scans.

use quadpath::prelude::*;
use std::error::Error;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();
    println!("=== Quadpath Grid Walkthrough ===\n");

    let mut index = IndexBuilder::new()
        .bounds(Point::new(0.0, 0.0), Point::new(32.0, 32.0))
        .storage_depth(10)
        .build()?;

    let mut x = 0.0;
    while x < 32.0 {
        let mut y = 0.0;
        while y < 32.0 {
            index.insert(Point::new(x, y), format!("{x:.1},{y:.1}"))?;
            y += 0.7;
        }
        x += 0.7;
    }
    log::info!("Inserted {} grid points", index.len()?);

    // === Encoding ===
    println!("1. Encoding");
    let probe = Point::new(8.1, 8.2);
    for depth in 0..=5 {
        let hash = index.hash(&probe, depth)?;
        println!(
            "   depth {}: path {:>6}  region [{}, {}) x [{}, {})",
            depth,
            format!("'{}'", hash.path),
            hash.region.min.x(),
            hash.region.max.x(),
            hash.region.min.y(),
            hash.region.max.y()
        );
    }

    // === Bounding search ===
    println!("\n2. Bounding search around (8.1, 8.2) at depth 3");
    let found = index.search(&probe, 3)?;
    println!("   {} points", found.len());

    // === Neighbourhood ===
    println!("\n3. Neighbourhood search at depth 5");
    let block = index.neighborhood_search(&probe, 5)?;
    println!("   {} points in the 3x3 block", block.len());

    // === Corridor ===
    println!("\n4. Corridor from (4, 2) towards (20, 30) at depth 5");
    let corridor = index.corridor_search(&Point::new(4.0, 2.0), &Point::new(20.0, 30.0), 5)?;
    println!("   {} points along the diagonal", corridor.len());

    // === Circle ===
    println!("\n5. Circle search at (20, 20) with radius 5");
    let circle = index.circle_search(&Point::new(20.0, 20.0), 5.0)?;
    println!("   {} points", circle.len());
    for stored in circle.iter().take(5) {
        println!(
            "   #{:<5} {:<10} {}",
            stored.id,
            String::from_utf8_lossy(&stored.payload),
            stored.path
        );
    }

    println!("\n=== Done ===");
    Ok(())
}
