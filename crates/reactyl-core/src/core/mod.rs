//! # Core Module
//!
//! Stateless building blocks of the reaction engine: data models, the
//! collision-theory kinetics, geometry helpers and species reference data.
//!
//! ## Architecture
//!
//! - **Models** ([`models`]) - Molecular structures, reaction types and per-collision attempts
//! - **Kinetics** ([`kinetics`]) - Collision energy, orientation factor and display scaling
//! - **Species Data** ([`species`]) - Thermochemistry tables and molecule identifier resolution
//! - **Utilities** ([`utils`]) - Look-at rotations and attack-angle measurement
//!
//! Everything here is deterministic: the same inputs always produce bit-identical
//! outputs, which the animation layer relies on for reproducible playback.

pub mod kinetics;
pub mod models;
pub mod species;
pub mod utils;
