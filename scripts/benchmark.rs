// scripts/benchmark.rs
use ou_sim::analytics::ou_analytic;
use ou_sim::math_utils::Timer;
use ou_sim::models::ou::OuProcess;
use ou_sim::rng;
use ou_sim::sim::path_engine::{mc_terminal_mean, simulate, SimConfig};
use std::env;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rayon_threads: usize,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        let os = env::consts::OS.to_string();
        let cpu_cores = num_cpus::get();
        let rayon_threads = rayon::current_num_threads();
        let rust_version = Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        let rustc_flags = env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string());

        Self {
            os,
            cpu_cores,
            rayon_threads,
            rust_version,
            rustc_flags,
        }
    }

    fn print(&self) {
        println!("System Information:");
        println!("  OS:            {}", self.os);
        println!("  CPU cores:     {}", self.cpu_cores);
        println!("  Rayon threads: {}", self.rayon_threads);
        println!("  Rust:          {}", self.rust_version);
        println!("  RUSTFLAGS:     {}", self.rustc_flags);
    }
}

struct BenchRow {
    kind: &'static str,
    paths: usize,
    steps: usize,
    runs: usize,
    elapsed_ms: f64,
    updates_per_sec: f64,
    abs_error: f64,
}

fn main() {
    println!("ou-sim throughput benchmark");
    println!("===========================\n");

    let info = SystemInfo::gather();
    info.print();

    let model = OuProcess::new(1.0, 0.0, 0.5).expect("Valid OU parameters");
    let mut rows: Vec<BenchRow> = Vec::new();

    // Single-call scaling: path-count and step-count sweeps
    println!("\nsimulate() scaling:");
    for &(paths, steps) in &[(5usize, 500usize), (100, 500), (1_000, 500), (1_000, 5_000), (10_000, 500)] {
        let cfg = SimConfig {
            paths,
            steps,
            ..SimConfig::default()
        };
        let mut rng = rng::seed_rng_from_u64(42);

        let mut timer = Timer::new();
        timer.start();
        let sim = simulate(&model, &cfg, &mut rng).expect("Valid configuration");
        let elapsed_ms = timer.elapsed_ms();

        let updates = (paths * (steps - 1)) as f64;
        let updates_per_sec = updates / (elapsed_ms / 1000.0);
        let analytic = ou_analytic::ou_mean(cfg.x0, model.theta, model.mu, cfg.t_horizon);
        let abs_error = (sim.terminal_mean() - analytic).abs();

        println!(
            "  {:>6} paths x {:>5} steps: {:>9.3} ms ({:>12.0} updates/s, |err| {:.4})",
            paths, steps, elapsed_ms, updates_per_sec, abs_error
        );

        rows.push(BenchRow {
            kind: "simulate",
            paths,
            steps,
            runs: 1,
            elapsed_ms,
            updates_per_sec,
            abs_error,
        });
    }

    // Parallel repeated-run estimator
    println!("\nmc_terminal_mean() scaling:");
    for &runs in &[100usize, 1_000] {
        let cfg = SimConfig::default();

        let mut timer = Timer::new();
        timer.start();
        let estimate = mc_terminal_mean(&model, &cfg, runs, 42).expect("Valid configuration");
        let elapsed_ms = timer.elapsed_ms();

        let updates = (runs * cfg.paths * (cfg.steps - 1)) as f64;
        let updates_per_sec = updates / (elapsed_ms / 1000.0);
        let analytic = ou_analytic::ou_mean(cfg.x0, model.theta, model.mu, cfg.t_horizon);
        let abs_error = (estimate - analytic).abs();

        println!(
            "  {:>6} runs: {:>9.3} ms ({:>12.0} updates/s, |err| {:.4})",
            runs, elapsed_ms, updates_per_sec, abs_error
        );

        rows.push(BenchRow {
            kind: "mc_terminal_mean",
            paths: cfg.paths,
            steps: cfg.steps,
            runs,
            elapsed_ms,
            updates_per_sec,
            abs_error,
        });
    }

    // Timestamped results file
    fs::create_dir_all("bench").expect("Could not create bench directory");
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("bench/ou_bench_{}.csv", timestamp);
    let mut file = File::create(&filename).expect("Could not create results file");

    writeln!(
        file,
        "# ou-sim benchmark, {} | {} | {} cores | {} rayon threads",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        info.rust_version,
        info.cpu_cores,
        info.rayon_threads
    )
    .expect("Could not write header");
    writeln!(
        file,
        "kind,paths,steps,runs,elapsed_ms,updates_per_sec,abs_error"
    )
    .expect("Could not write header");
    for row in &rows {
        writeln!(
            file,
            "{},{},{},{},{:.3},{:.0},{:.6}",
            row.kind, row.paths, row.steps, row.runs, row.elapsed_ms, row.updates_per_sec, row.abs_error
        )
        .expect("Could not write row");
    }

    println!("\nBenchmark results written to {}", filename);
}
