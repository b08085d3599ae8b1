mod derivative;
mod integrator;
mod solution;
mod tableau;

pub use derivative::*;
pub use integrator::*;
pub use solution::*;
pub use tableau::*;
