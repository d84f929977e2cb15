//! # Engine Module
//!
//! The decision and orientation layer. It turns the pure functions of
//! [`crate::core::kinetics`] into reaction outcomes and writes attack
//! orientations onto host-owned structures.
//!
//! ## Architecture
//!
//! - **Detection** ([`detector`]) - Combines collision energy and orientation factor into a
//!   reacted / not-reacted outcome
//! - **Orientation** ([`orientation`]) - Strategies that place an attacker in its ideal attack
//!   geometry, updating render and physics orientations together
//! - **Configuration** ([`config`]) - Validated parameters for grid sweeps
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting for long sweeps
//! - **Error Handling** ([`error`]) - The aggregated [`error::EngineError`]
//!
//! Invalid physical input and degenerate geometry are reported as errors rather than
//! being folded into a "no reaction" result, so the host can freeze or reset the
//! affected display instead of showing a wrong outcome.

pub mod config;
pub mod detector;
pub mod error;
pub mod orientation;
pub mod progress;
