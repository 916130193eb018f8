//! Basic usage example for nada-sentinel.
//!
//! Demonstrates:
//! - Creating flavored sentinels with `get_or_create()`
//! - Using a sentinel as a private "not given" marker
//! - Observing the registry with a trace callback
//! - Carrying a failure through a chain with `Nada`
//!
//! Run with: `cargo run --example basic_usage`

use nada_sentinel::{define_sentinels, Nada, Sentinel};

// Create an isolated registry for this example
define_sentinels!(app);

fn not_given() -> Sentinel<&'static str> {
    app::get_or_create("not_given")
}

/// Port from config, `None` for "disabled", sentinel for "use the default".
fn port(setting: Result<Option<u16>, Sentinel<&'static str>>) -> Option<u16> {
    match setting {
        Ok(value) => value,
        Err(s) if s == not_given() => Some(8080),
        Err(_) => None,
    }
}

fn parse_ratio(input: &str) -> Result<f64, Nada> {
    input.parse::<f64>().map_err(|_| Nada::new())
}

fn main() {
    println!("=== nada-sentinel: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Trace registry activity
    // -------------------------------------------------------------------------
    println!("1. Installing a trace callback...");

    app::set_trace_callback(|event| println!("   [trace] {}", event));

    // -------------------------------------------------------------------------
    // 2. Create sentinels
    // -------------------------------------------------------------------------
    println!("\n2. Creating sentinels...");

    let a = app::get_or_create("not_given");
    let b = app::get_or_create("not_given");
    let other = app::get_or_create("other");

    println!("   {} == {}: {}", a, b, a == b);
    println!("   {} == {}: {}", a, other, a == other);

    // -------------------------------------------------------------------------
    // 3. Sentinel as a default marker
    // -------------------------------------------------------------------------
    println!("\n3. Resolving settings...");

    println!("   explicit 9000   -> {:?}", port(Ok(Some(9000))));
    println!("   explicit None   -> {:?}", port(Ok(None)));
    println!("   not given       -> {:?}", port(Err(not_given())));

    app::clear_trace_callback();

    // -------------------------------------------------------------------------
    // 4. Nada on the happy path
    // -------------------------------------------------------------------------
    println!("\n4. Propagating a failure with Nada...");

    for input in ["0.25", "a quarter"] {
        let outcome = match parse_ratio(input) {
            Ok(ratio) => format!("{:.1}%", ratio * 100.0),
            Err(failed) => {
                let chained = (failed * 100.0).attr("round").call(1);
                format!("{} -> {}", chained, chained.nada_get("n/a"))
            }
        };
        println!("   {:<10} => {}", input, outcome);
    }

    // -------------------------------------------------------------------------
    // Summary
    // -------------------------------------------------------------------------
    println!("\n=== Example Complete ===");
    println!(
        "The app registry now holds {} string-flavored sentinels.",
        app::flavor_count::<&str>()
    );
}
