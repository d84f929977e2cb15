//! # Kinetics Module
//!
//! Pure collision-theory functions. Nothing in here holds state, so every
//! function is safe to call from any number of threads.
//!
//! - [`energy`] - Reduced-mass collision energy and the steric orientation factor
//! - [`scaling`] - Linear mapping between the visual velocity slider and the energy chart axis

pub mod energy;
pub mod scaling;
