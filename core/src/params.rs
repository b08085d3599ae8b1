use serde::{Deserialize, Serialize};

/// Parameter set of the Lorenz system.
///
/// Fixed for the duration of one integration run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Prandtl number
    pub sigma: f64,
    /// Rayleigh number
    pub r: f64,
    /// geometry factor
    pub b: f64,
}

impl Default for Parameters {
    /// Classic parameters from Lorenz's 1963 paper. The trajectory is
    /// chaotic for this choice.
    fn default() -> Self {
        Parameters {
            sigma: 10.0,
            r: 28.0,
            b: 8.0 / 3.0,
        }
    }
}
