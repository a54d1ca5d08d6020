//! Example: Generate a mosaic
//!
//! Demonstrates the basic usage of the generation pipeline.

use voronoi_mosaic::*;

fn main() {
    println!("Voronoi Mosaic Generation Example");
    println!("=================================\n");

    let config = MosaicConfigBuilder::new()
        .seed(42)
        .domain(1024.0, 1024.0)
        .unwrap()
        .radius(32.0)
        .unwrap()
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Domain: {} x {}", config.width, config.height);
    println!("  Radius: {}", config.radius);
    println!();

    println!("Generating mosaic...");
    let mosaic = Mosaic::generate(config).expect("Failed to generate mosaic");
    println!("Generated {} sites\n", mosaic.site_count());

    let sites = mosaic.sites();
    let total_neighbors: usize = sites.iter().map(|s| s.neighbor_count()).sum();
    let avg_neighbors = total_neighbors as f64 / sites.len() as f64;
    let avg_area = sites.iter().map(|s| s.approximate_area()).sum::<f64>() / sites.len() as f64;

    println!("Statistics:");
    println!("  Average neighbors per site: {:.2}", avg_neighbors);
    println!("  Average cell area: {:.1}", avg_area);
    println!();

    let picker = BiomePicker::new(vec!["plains", "forest", "desert", "jungle", "taiga"])
        .expect("biome list is not empty");
    let biomes = mosaic.assign_biomes(&picker);

    println!("Sample sites:");
    for site in sites.iter().take(5) {
        println!(
            "  Site {}: position=({:.1}, {:.1}), biome={}, neighbors={:?}",
            site.id, site.position.x, site.position.y, biomes[site.id], site.neighbors
        );
        println!("    polygon: {:?}", site.block_polygon());
    }

    println!("\nGeneration complete!");
}
