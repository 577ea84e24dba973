//! Particle Field with Bounded Lifetimes
//!
//! This example demonstrates a collection of short-lived values managed
//! with the batch helpers.
//!
//! Key concepts:
//! - Per-value lifespans computed at populate time
//! - Explicit eviction with `dispose` (no background sweep)
//! - `sort_by_birth` and `max_remaining_lifetime` over the collection
//!
//! Run with: cargo run --example particle_field

use std::time::Duration;
use vigil::bounded::{
    dispose, max_remaining_lifetime, move_into_with, sort_by_birth, BoundedLifetime,
};

#[derive(Debug)]
struct Particle {
    size: u64,
}

fn main() {
    println!("=== Particle Field ===\n");

    // Bigger particles burn longer
    let mut spawned: Vec<Particle> = (1..=5).map(|size| Particle { size }).collect();
    let mut field: Vec<BoundedLifetime<Particle>> = Vec::new();

    move_into_with(&mut spawned, &mut field, |p| Duration::from_secs(p.size));
    println!("Spawned {} particles (source drained: {})", field.len(), spawned.is_empty());

    sort_by_birth(&mut field);
    println!("Sorted by birth; field order is deterministic\n");

    for entry in &field {
        println!(
            "  particle size {} lifespan {:?} progress {:.2}",
            entry.value().size,
            entry.lifespan(),
            entry.progress()
        );
    }

    println!(
        "\nRemaining time of the longest-lived particle: {:?}",
        max_remaining_lifetime(&field)
    );

    // One tick of the simulation: evict whatever expired
    std::thread::sleep(Duration::from_millis(1100));
    dispose(&mut field);
    println!(
        "\nAfter ~1.1s tick, {} particles survive (size-1 burned out)",
        field.len()
    );

    println!("\n=== Example Complete ===");
}
