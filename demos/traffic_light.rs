//! Traffic Light Transition Guard
//!
//! This example demonstrates a simple cyclic transition table.
//!
//! Key concepts:
//! - Declarative table construction with `transition_table!`
//! - Silent rejection of undeclared transitions
//! - `reset` as the out-of-band reinitialization path
//!
//! Run with: cargo run --example traffic_light

use vigil::transition_table;

#[derive(Clone, PartialEq, Debug)]
enum Light {
    Red,
    Yellow,
    Green,
}

fn main() {
    println!("=== Traffic Light Transition Guard ===\n");

    let mut light = transition_table! {
        initial: Light::Red;
        Light::Red => Light::Green,
        Light::Green => Light::Yellow,
        Light::Yellow => Light::Red,
    };

    println!("Initial state: {:?}\n", light.value());

    println!("Walking the legal cycle:");
    for next in [Light::Green, Light::Yellow, Light::Red] {
        let (accepted, value) = light.try_update(next);
        println!("  -> {value:?} (accepted: {accepted})");
    }

    println!("\nAttempting an illegal jump Red -> Yellow:");
    let (accepted, value) = light.try_update(Light::Yellow);
    println!("  -> {value:?} (accepted: {accepted})");
    println!("The guard silently refused; the light is still {:?}", light.value());

    println!("\nPower outage! Resetting to flashing Red:");
    light.reset(Light::Red);
    println!("  -> {:?} (reset bypasses the table)", light.value());

    println!("\n=== Example Complete ===");
}
