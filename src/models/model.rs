// src/models/model.rs

/// Drift/diffusion seam between a model and the numerical scheme.
///
/// A model describes the SDE `dX_t = a(X_t, t) dt + b(X_t, t) dW_t` through
/// its coefficient functions; solvers supply the Brownian increment.
pub trait SdeModel {
    /// Drift coefficient a(x, t)
    fn drift(&self, x: f64, t: f64) -> f64;

    /// Diffusion coefficient b(x, t)
    fn diffusion(&self, x: f64, t: f64) -> f64;

    /// Advance the state in place by one step given the increment dW
    fn step_with_dw(&self, x_current: &mut f64, t_current: f64, dt: f64, dw: f64) {
        *x_current += self.drift(*x_current, t_current) * dt
            + self.diffusion(*x_current, t_current) * dw;
    }
}
