//! # Core Models Module
//!
//! Plain data types shared by the kinetics model, the orientation strategies and the
//! workflows.
//!
//! ## Key Components
//!
//! - [`structure`] - Positioned molecular structures with their render and physics orientations
//! - [`reaction`] - Reaction-type tags and the static table of ideal approach angles
//! - [`attempt`] - The transient inputs of a single reaction evaluation
//!
//! ## Usage
//!
//! ```ignore
//! use reactyl::core::models::{attempt::ReactionAttempt, reaction::ReactionType};
//!
//! let reaction_type: ReactionType = "SN2".parse()?;
//! let attempt = ReactionAttempt::for_reaction(reaction_type, 165.0, 12.0, (10.0, 10.0), 20.0);
//! ```

pub mod attempt;
pub mod reaction;
pub mod structure;
