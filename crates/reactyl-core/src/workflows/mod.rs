//! # Workflows Module
//!
//! High-level procedures that hosts call directly. Each workflow combines the
//! kinetics, detection and orientation pieces into one call with logging and,
//! where work is long-running, progress reporting.
//!
//! ## Architecture
//!
//! - **Collision Workflow** ([`collide`]) - One animation-frame update for a colliding pair:
//!   attack-angle measurement, reaction evaluation and attacker orientation.
//! - **Sweep Workflow** ([`sweep`]) - Parallel feasibility evaluation over an angle and
//!   velocity grid, with results in a deterministic order.

pub mod collide;
pub mod sweep;
