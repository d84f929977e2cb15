//! # Reactyl Core Library
//!
//! The reaction feasibility and orientation engine behind Reactyl's animated
//! collision demonstrations. Given the approach geometry and kinetics of two
//! molecular structures it decides whether the collision reacts, and it computes
//! the deterministic attack orientation (SN2 backside attack) that positions the
//! attacking species for the animation.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularStructure`,
//!   `ReactionAttempt`), the collision-theory kinetics, geometry helpers and species data.
//!
//! - **[`engine`]: The Logic Core.** The `ReactionDetector`, the orientation strategies
//!   that keep render and physics orientations in sync, configuration and error types.
//!
//! - **[`workflows`]: The Public API.** Complete procedures for hosts: one animation frame
//!   of a collision (`collide`) and parallel feasibility sweeps over angle and velocity
//!   grids (`sweep`).
//!
//! Every computation is synchronous, O(1) per call and bit-for-bit reproducible.

pub mod core;
pub mod engine;
pub mod workflows;
