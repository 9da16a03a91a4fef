// demos/demo.rs
use ou_sim::analytics::ou_analytic;
use ou_sim::math_utils::Timer;
use ou_sim::models::ou::OuProcess;
use ou_sim::output;
use ou_sim::rng;
use ou_sim::sim::path_engine::{mc_terminal_mean, simulate, SimConfig};

// Renderer contract: fixed vertical range with a dashed reference line at mu
const Y_AXIS_MIN: f64 = -6.5;
const Y_AXIS_MAX: f64 = 6.5;

fn main() {
    // Usage: demo [theta] [mu] [sigma] [seed]
    // Defaults match the interactive front end's slider defaults.
    let args: Vec<String> = std::env::args().collect();
    let theta: f64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let mu: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.0);
    let sigma: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.5);
    let seed: Option<u64> = args.get(4).and_then(|s| s.parse().ok());

    println!("Running ou-sim demo\n");
    println!("dX = {}*({} - X) dt + {} dW", theta, mu, sigma);

    let model = OuProcess::new(theta, mu, sigma).expect("Valid OU parameters");
    let cfg = SimConfig::default();

    let mut timer = Timer::new();
    timer.start();
    let sim = match seed {
        Some(s) => {
            println!("Seed: {} (reproducible run)", s);
            let mut rng = rng::seed_rng_from_u64(s);
            simulate(&model, &cfg, &mut rng).expect("Valid configuration")
        }
        None => {
            println!("Seed: entropy (non-reproducible run)");
            let mut rng = rng::rng_from_entropy();
            simulate(&model, &cfg, &mut rng).expect("Valid configuration")
        }
    };
    let elapsed = timer.elapsed_ms();

    println!(
        "\nSimulated {} paths x {} steps over [0, {}] in {:.3} ms",
        cfg.paths, cfg.steps, cfg.t_horizon, elapsed
    );

    println!("\nTerminal values at T = {}:", cfg.t_horizon);
    for (p, x_t) in sim.terminal_values().iter().enumerate() {
        println!("  path {}: {:>8.4}", p + 1, x_t);
    }

    let analytic_mean = ou_analytic::ou_mean(cfg.x0, theta, mu, cfg.t_horizon);
    let analytic_std = ou_analytic::ou_std_dev(theta, sigma, cfg.t_horizon);
    println!("\nCross-path terminal mean: {:>8.4}", sim.terminal_mean());
    println!("Analytic E[X_T]:          {:>8.4}", analytic_mean);
    println!("Analytic Std[X_T]:        {:>8.4}", analytic_std);

    // A tighter estimate of E[X_T] from many independent seeded runs
    let runs = 500;
    let estimate =
        mc_terminal_mean(&model, &cfg, runs, seed.unwrap_or(12345)).expect("Valid configuration");
    println!(
        "E[X_T] over {} runs:      {:>8.4} (abs error {:.4})",
        runs,
        estimate,
        (estimate - analytic_mean).abs()
    );

    output::write_paths_to_csv("ou_paths.csv", &sim).expect("Could not write ou_paths.csv");

    let theta_s = theta.to_string();
    let mu_s = mu.to_string();
    let sigma_s = sigma.to_string();
    let y_min_s = Y_AXIS_MIN.to_string();
    let y_max_s = Y_AXIS_MAX.to_string();
    let reference_s = mu.to_string();
    let summary: Vec<(&str, &str)> = vec![
        ("theta", theta_s.as_str()),
        ("mu", mu_s.as_str()),
        ("sigma", sigma_s.as_str()),
        ("y_axis_min", y_min_s.as_str()),
        ("y_axis_max", y_max_s.as_str()),
        ("reference_line", reference_s.as_str()),
    ];
    output::write_summary_to_csv("ou_summary.csv", &summary).expect("Could not write ou_summary.csv");

    println!("\nWrote ou_paths.csv and ou_summary.csv for the chart layer");
}
