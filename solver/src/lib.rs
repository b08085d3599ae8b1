extern crate lorenz_core;
extern crate nalgebra as na;
pub mod solver;
