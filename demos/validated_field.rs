//! Validated Form Field with ObservingValue
//!
//! This example demonstrates the veto protocol: a change callback gates
//! updates while an assign callback keeps an audit trail.
//!
//! Key concepts:
//! - Change callback as a validator (veto by returning false)
//! - Assign callback observing the *resulting* value, veto or not
//! - Fluent callback configuration
//!
//! Run with: cargo run --example validated_field

use parking_lot::Mutex;
use std::sync::Arc;
use vigil::ObservingValue;

fn main() {
    println!("=== Validated Quantity Field ===\n");

    let audit = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&audit);

    let mut quantity = ObservingValue::new(0i32)
        .on_change(|old, new| {
            let valid = *new >= 0;
            if !valid {
                println!("  validator: rejecting {old} -> {new}");
            }
            valid
        })
        .on_assign(move |v| sink.lock().push(*v));

    println!("Assigning 3:");
    let accepted = quantity.assign(3);
    println!("  accepted: {accepted}, value: {}\n", quantity.value());

    println!("Assigning -1:");
    let accepted = quantity.assign(-1);
    println!("  accepted: {accepted}, value: {}\n", quantity.value());

    println!("Assigning 3 again (no change, validator skipped):");
    let accepted = quantity.assign(3);
    println!("  accepted: {accepted}, value: {}\n", quantity.value());

    println!("Audit trail (one entry per assignment): {:?}", audit.lock());
    println!("Note the vetoed assignment logged the surviving value, 3.");

    println!("\n=== Example Complete ===");
}
