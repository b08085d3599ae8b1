use lorenz_core::Parameters;
use na::Vector3;

/// Right hand side of the Lorenz system.
///
/// Writes the derivative of `q = (x, y, z)` into `dq`:
///
/// * dx/dt = sigma (y - x)
/// * dy/dt = -z x + r x - y
/// * dz/dt = x y - b z
///
/// The system is autonomous, so `t` is unused. Non-finite inputs
/// propagate through untouched.
pub fn lorenz_derivative(
    _t: f64,
    q: &Vector3<f64>,
    parameters: &Parameters,
    dq: &mut Vector3<f64>,
) {
    dq.x = parameters.sigma * (q.y - q.x);
    dq.y = -q.z * q.x + parameters.r * q.x - q.y;
    dq.z = q.x * q.y - parameters.b * q.z;
}
