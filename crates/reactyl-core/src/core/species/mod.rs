//! # Species Data Module
//!
//! Reference data about the molecules taking part in a demonstration.
//!
//! - [`thermo`] - Thermochemistry tables (formation enthalpies, molar masses) read from CSV,
//!   and reaction enthalpies computed from them
//! - [`resolver`] - The [`resolver::MoleculeResolver`] capability and the static demo fallback table
//!
//! Neither is consulted by the reaction decision itself; hosts use them to label
//! structures and to pick realistic masses for collision attempts.

pub mod resolver;
pub mod thermo;
