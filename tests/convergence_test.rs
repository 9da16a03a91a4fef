// tests/convergence_test.rs
use ou_sim::analytics::ou_analytic::{ou_mean, ou_variance};
use ou_sim::models::ou::OuProcess;
use ou_sim::rng;
use ou_sim::sim::path_engine::{mc_terminal_mean, simulate, SimConfig};

#[test]
fn test_sigma_zero_collapses_to_deterministic_relaxation() {
    // With no noise, every path is the same discretized solution of
    // dX = theta * (mu - X) dt
    let model = OuProcess::new(1.0, 0.0, 0.0).expect("valid parameters");
    let cfg = SimConfig::default();
    let mut rng = rng::seed_rng_from_u64(42);

    let sim = simulate(&model, &cfg, &mut rng).expect("valid configuration");

    let first = sim.paths.row(0);
    for (p, row) in sim.paths.rows().into_iter().enumerate() {
        for (a, b) in row.iter().zip(first.iter()) {
            assert_eq!(a.to_bits(), b.to_bits(), "path {} deviates", p);
        }
    }

    // Each point tracks X(t) = X0 e^(-theta t) + mu (1 - e^(-theta t))
    // up to the O(dt) discretization error
    let dt = cfg.dt();
    for (i, &x) in first.iter().enumerate() {
        let t_elapsed = i as f64 * dt;
        let exact = ou_mean(cfg.x0, model.theta, model.mu, t_elapsed);
        assert!(
            (x - exact).abs() < 0.02,
            "index {}: simulated {} vs exact {}",
            i,
            x,
            exact
        );
    }
}

#[test]
fn test_discretization_error_halves_with_step_count() {
    // Deterministic convergence check: with sigma = 0 the scheme is plain
    // explicit Euler, so the terminal error against the exact relaxation
    // must shrink at first order as the grid is refined.
    let model = OuProcess::new(1.0, 0.0, 0.0).expect("valid parameters");
    let t_end = 1.0;
    let exact = ou_mean(5.0, model.theta, model.mu, t_end);

    let mut errors = Vec::new();
    for &steps in &[10usize, 20, 40, 80, 160] {
        let cfg = SimConfig {
            t_horizon: t_end,
            steps,
            paths: 1,
            x0: 5.0,
        };
        let mut rng = rng::seed_rng_from_u64(42);
        let sim = simulate(&model, &cfg, &mut rng).expect("valid configuration");
        let terminal = sim.paths[[0, steps - 1]];
        errors.push((terminal - exact).abs());
    }

    println!("\nEuler terminal errors over refinement: {:?}", errors);

    for i in 0..(errors.len() - 1) {
        let ratio = errors[i] / errors[i + 1];
        assert!(
            ratio > 1.7 && ratio < 2.3,
            "first-order convergence ratio not as expected at step {}: {}",
            i,
            ratio
        );
    }
    assert!(
        *errors.last().unwrap() < 0.01,
        "final discretization error ({}) is too high",
        errors.last().unwrap()
    );
}

#[test]
fn test_terminal_mean_matches_analytic_expectation() {
    // Front-end scenario: theta=1, mu=0, sigma=0.5, X0=5, T=5, N=500.
    // Analytic E[X_T] = 0*(1 - e^-5) + 5*e^-5 ≈ 0.0337.
    let model = OuProcess::new(1.0, 0.0, 0.5).expect("valid parameters");
    let cfg = SimConfig {
        paths: 20_000,
        ..SimConfig::default()
    };
    let mut rng = rng::seed_rng_from_u64(42);

    let sim = simulate(&model, &cfg, &mut rng).expect("valid configuration");
    let empirical = sim.terminal_mean();
    let analytic = ou_mean(cfg.x0, model.theta, model.mu, cfg.t_horizon);

    println!("\nEmpirical terminal mean: {}", empirical);
    println!("Analytic E[X_T]: {}", analytic);

    assert!((analytic - 0.0337).abs() < 1e-3);
    assert!(
        (empirical - analytic).abs() < 0.05,
        "empirical mean {} not within 0.05 of analytic {}",
        empirical,
        analytic
    );
}

#[test]
fn test_repeated_run_estimator_matches_analytic_expectation() {
    // Same scenario through many small independent runs instead of one
    // wide matrix
    let model = OuProcess::new(1.0, 0.0, 0.5).expect("valid parameters");
    let cfg = SimConfig::default();

    let estimate = mc_terminal_mean(&model, &cfg, 2_000, 42).expect("valid configuration");
    let analytic = ou_mean(cfg.x0, model.theta, model.mu, cfg.t_horizon);

    println!("\nEstimator over 2000 runs: {}", estimate);
    println!("Analytic E[X_T]: {}", analytic);

    assert!(
        (estimate - analytic).abs() < 0.05,
        "estimate {} not within 0.05 of analytic {}",
        estimate,
        analytic
    );
}

#[test]
fn test_terminal_variance_matches_analytic() {
    let model = OuProcess::new(1.0, 0.0, 0.5).expect("valid parameters");
    let cfg = SimConfig {
        paths: 20_000,
        ..SimConfig::default()
    };
    let mut rng = rng::seed_rng_from_u64(7);

    let sim = simulate(&model, &cfg, &mut rng).expect("valid configuration");
    let terminal = sim.terminal_values();
    let mean = sim.terminal_mean();
    let empirical_var = terminal.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
        / (terminal.len() - 1) as f64;

    let analytic_var = ou_variance(model.theta, model.sigma, cfg.t_horizon);

    println!("\nEmpirical terminal variance: {}", empirical_var);
    println!("Analytic Var[X_T]: {}", analytic_var);

    let rel_error = (empirical_var - analytic_var).abs() / analytic_var;
    assert!(
        rel_error < 0.1,
        "terminal variance off by more than 10%: {}",
        rel_error
    );
}

#[test]
fn test_mean_reversion_pulls_toward_mu_from_both_sides() {
    // Started far above and far below mu, the cross-path mean at the horizon
    // must end up near mu rather than near the start
    let model = OuProcess::new(1.0, 1.0, 0.3).expect("valid parameters");

    for &x0 in &[5.0, -5.0] {
        let cfg = SimConfig {
            paths: 5_000,
            x0,
            ..SimConfig::default()
        };
        let mut rng = rng::seed_rng_from_u64(11);
        let sim = simulate(&model, &cfg, &mut rng).expect("valid configuration");

        let analytic = ou_mean(x0, model.theta, model.mu, cfg.t_horizon);
        assert!(
            (sim.terminal_mean() - analytic).abs() < 0.05,
            "from x0 = {}: terminal mean {} vs analytic {}",
            x0,
            sim.terminal_mean(),
            analytic
        );
        // e^-5 leaves less than 1% of the initial displacement
        assert!((sim.terminal_mean() - model.mu).abs() < 0.1);
    }
}
