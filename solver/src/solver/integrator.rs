use lorenz_core::{Method, Parameters};
use na::Vector3;
use crate::solver::derivative::lorenz_derivative;
use crate::solver::solution::{DenseSegment, Solution};
use crate::solver::tableau::ButcherTableau;

/// Default tolerances of the driver. Method selection is the only knob
/// the configuration exposes.
const REL_TOL: f64 = 1e-3;
const ABS_TOL: f64 = 1e-6;

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;

/// Step algorithm driving one integration run.
pub enum Integrator {
    /// Dormand-Prince 5(4) embedded pair with quartic dense output
    Rk45,
    /// Bogacki-Shampine 3(2) embedded pair with cubic dense output
    Rk23,
}

impl From<Method> for Integrator {
    fn from(method: Method) -> Self {
        match method {
            Method::Rk45 => Integrator::Rk45,
            Method::Rk23 => Integrator::Rk23,
        }
    }
}

impl Integrator {
    /// Advance the state from t = 0 to `t_final`.
    ///
    /// Accepted times are strictly increasing and the last one equals
    /// `t_final` exactly; the final step is clipped to land on it. When
    /// `dense_output` is set, every accepted step also stores an
    /// interpolation segment built from the stage derivatives, and the
    /// returned [Solution] answers [Solution::evaluate_at] anywhere in
    /// [0, t_final].
    ///
    /// Divergence is not an error: once the state goes non-finite the
    /// run keeps stepping to `t_final` and the non-finite values stay
    /// in the result.
    pub fn integrate(
        &self,
        t_final: f64,
        q0: &Vector3<f64>,
        parameters: &Parameters,
        dense_output: bool,
    ) -> Solution {
        match self {
            Integrator::Rk45 => integrate_pair(
                &ButcherTableau::<7>::DORMAND_PRINCE_45,
                t_final,
                q0,
                parameters,
                dense_output,
            ),
            Integrator::Rk23 => integrate_pair(
                &ButcherTableau::<4>::BOGACKI_SHAMPINE_23,
                t_final,
                q0,
                parameters,
                dense_output,
            ),
        }
    }
}

/// Adaptive integration loop over one embedded pair.
///
/// Both supported tableaus are FSAL: the last stage is the derivative
/// at the proposed endpoint, so an accepted step hands its last stage
/// to the next step's first and the dense segments can treat the last
/// stage as the endpoint slope.
fn integrate_pair<const STAGES: usize>(
    tableau: &ButcherTableau<STAGES>,
    t_final: f64,
    q0: &Vector3<f64>,
    parameters: &Parameters,
    dense_output: bool,
) -> Solution {
    let mut solution = Solution {
        times: vec![0.0],
        states: vec![*q0],
        evaluations: 0,
        accepted: 0,
        rejected: 0,
        dense: if dense_output { Some(vec![]) } else { None },
    };

    let h_min = 1e-12 * t_final;
    let mut h = 1e-3 * t_final;
    let mut t = 0.0;
    let mut y = *q0;

    let mut k = [Vector3::zeros(); STAGES];
    lorenz_derivative(t, &y, parameters, &mut k[0]);
    solution.evaluations += 1;

    while t < t_final {
        let mut last = false;
        if t + h >= t_final {
            h = t_final - t;
            last = true;
        }

        for s in 1..STAGES {
            let mut y_stage = y;
            for i in 0..s {
                y_stage += h * tableau.a[s][i] * k[i];
            }
            lorenz_derivative(t + tableau.c[s] * h, &y_stage, parameters, &mut k[s]);
        }
        solution.evaluations += STAGES - 1;

        let mut y_new = y;
        for s in 0..STAGES {
            y_new += h * tableau.b[s] * k[s];
        }

        // embedded error estimate, normalized against scale = atol + rtol |y|
        let mut err = 0.0;
        for component in 0..3 {
            let mut e = 0.0;
            for s in 0..STAGES {
                e += (tableau.b[s] - tableau.b_star[s]) * k[s][component];
            }
            e *= h;
            let scale = ABS_TOL + REL_TOL * y[component].abs().max(y_new[component].abs());
            err += (e / scale) * (e / scale);
        }
        err = (err / 3.0).sqrt();

        // a non-finite error estimate means the trajectory already
        // diverged; accept so the blow-up ends up in the data instead
        // of rejecting forever
        if err <= 1.0 || !err.is_finite() || h <= h_min {
            if let Some(segments) = solution.dense.as_mut() {
                segments.push(dense_segment(tableau, t, h, &y, &y_new, &k));
            }
            t = if last { t_final } else { t + h };
            y = y_new;
            k[0] = k[STAGES - 1];
            solution.times.push(t);
            solution.states.push(y);
            solution.accepted += 1;
        } else {
            solution.rejected += 1;
        }

        let factor = if err == 0.0 {
            MAX_FACTOR
        } else if err.is_finite() {
            (SAFETY * err.powf(-1.0 / tableau.order as f64)).clamp(MIN_FACTOR, MAX_FACTOR)
        } else {
            1.0
        };
        h = (h * factor).max(h_min);
    }

    log::debug!(
        "integration finished: {} steps accepted, {} rejected, {} derivative evaluations",
        solution.accepted,
        solution.rejected,
        solution.evaluations
    );
    solution
}

/// Build the interpolation segment for one accepted step.
///
/// With dense output coefficients `d` this is Hairer's dopri5 quartic;
/// without them the segment degrades to the cubic Hermite through both
/// endpoints, whose quartic term is zero.
fn dense_segment<const STAGES: usize>(
    tableau: &ButcherTableau<STAGES>,
    t0: f64,
    h: f64,
    y0: &Vector3<f64>,
    y1: &Vector3<f64>,
    k: &[Vector3<f64>; STAGES],
) -> DenseSegment {
    let ydiff = y1 - y0;
    let bspl = h * k[0] - ydiff;
    let quartic = match tableau.d {
        Some(d) => {
            let mut slope = Vector3::zeros();
            for s in 0..STAGES {
                slope += d[s] * k[s];
            }
            h * slope
        }
        None => Vector3::zeros(),
    };
    DenseSegment {
        t0,
        h,
        rcont: [*y0, ydiff, bspl, ydiff - h * k[STAGES - 1] - bspl, quartic],
    }
}
