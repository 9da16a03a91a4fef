// demos/error_handling_demo.rs
use ou_sim::models::ou::OuProcess;
use ou_sim::rng;
use ou_sim::sim::path_engine::{simulate, SimConfig};

fn main() {
    println!("Error Handling Demo for ou-sim");
    println!("==============================\n");

    // Test 1: non-positive reversion rate
    println!("1. Testing theta = 0 (no mean reversion)...");
    match OuProcess::new(0.0, 0.0, 0.5) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: negative volatility
    println!("\n2. Testing sigma = -0.5...");
    match OuProcess::new(1.0, 0.0, -0.5) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: NaN long-term mean
    println!("\n3. Testing mu = NaN...");
    match OuProcess::new(1.0, f64::NAN, 0.5) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: degenerate run shape
    println!("\n4. Testing a configuration with zero paths...");
    let model = OuProcess::new(1.0, 0.0, 0.5).expect("valid parameters");
    let cfg = SimConfig {
        paths: 0,
        ..SimConfig::default()
    };
    let mut rng = rng::seed_rng_from_u64(42);
    match simulate(&model, &cfg, &mut rng) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: a valid run for contrast
    println!("\n5. Running a valid simulation...");
    let cfg = SimConfig::default();
    match simulate(&model, &cfg, &mut rng) {
        Ok(sim) => println!(
            "   ✓ Simulated {} paths x {} steps, terminal mean {:.4}",
            sim.paths.nrows(),
            sim.paths.ncols(),
            sim.terminal_mean()
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\nDone.");
}
