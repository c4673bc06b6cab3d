extern crate epimd_core;
extern crate nalgebra as na;
extern crate rand_distr;
extern crate rayon;
pub mod epidemic;
pub mod initializer;
pub mod macro_parameters;
pub mod solver;
