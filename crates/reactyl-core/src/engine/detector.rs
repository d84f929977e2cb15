use super::error::EngineError;
use crate::core::kinetics::energy;
use crate::core::models::attempt::ReactionAttempt;
use tracing::debug;

/// Terminal state of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionState {
    Reacted,
    NotReacted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub reacted: bool,
    /// Collision energy after attenuation by the orientation factor.
    pub effective_energy: f64,
    pub orientation_factor: f64,
    /// Raw kinetic energy of relative motion before attenuation.
    pub collision_energy: f64,
}

impl Outcome {
    pub fn state(&self) -> ReactionState {
        if self.reacted {
            ReactionState::Reacted
        } else {
            ReactionState::NotReacted
        }
    }

    /// How far the effective energy sits above (positive) or below (negative)
    /// the activation barrier.
    pub fn energy_margin(&self, activation_energy: f64) -> f64 {
        self.effective_energy - activation_energy
    }
}

/// Decides whether a collision reacts.
///
/// Collision energy and orientation are combined multiplicatively, so a
/// partially misaligned approach loses part of its energy instead of failing a
/// separate alignment gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionDetector;

impl ReactionDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, attempt: &ReactionAttempt) -> Result<Outcome, EngineError> {
        let orientation_factor = energy::checked_orientation_factor(
            attempt.actual_approach_angle_degrees,
            attempt.ideal_approach_angle_degrees,
        )?;
        let collision_energy =
            energy::collision_energy(attempt.mass_a, attempt.mass_b, attempt.relative_velocity)?;

        let effective_energy = collision_energy * orientation_factor;
        let reacted = effective_energy >= attempt.activation_energy;

        debug!(
            factor = orientation_factor,
            raw = collision_energy,
            effective = effective_energy,
            barrier = attempt.activation_energy,
            reacted,
            "Evaluated reaction attempt"
        );

        Ok(Outcome {
            reacted,
            effective_energy,
            orientation_factor,
            collision_energy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinetics::energy::EnergyError;
    use crate::core::models::reaction::ReactionType;

    const TOLERANCE: f64 = 1e-9;

    fn attempt(angle: f64, velocity: f64, activation_energy: f64) -> ReactionAttempt {
        ReactionAttempt::for_reaction(
            ReactionType::Sn2,
            angle,
            velocity,
            (10.0, 10.0),
            activation_energy,
        )
    }

    #[test]
    fn ideal_energetic_collision_reacts() {
        let outcome = ReactionDetector::new().evaluate(&attempt(180.0, 10.0, 200.0)).unwrap();

        assert!(outcome.reacted);
        assert_eq!(outcome.state(), ReactionState::Reacted);
        assert_eq!(outcome.orientation_factor, 1.0);
        assert!((outcome.collision_energy - 250.0).abs() < TOLERANCE);
        assert!((outcome.effective_energy - 250.0).abs() < TOLERANCE);
    }

    #[test]
    fn effective_energy_equal_to_barrier_reacts() {
        let outcome = ReactionDetector::new().evaluate(&attempt(180.0, 10.0, 250.0)).unwrap();
        assert!(outcome.reacted);
    }

    #[test]
    fn slow_collision_does_not_react() {
        let outcome = ReactionDetector::new().evaluate(&attempt(180.0, 1.0, 200.0)).unwrap();

        assert!(!outcome.reacted);
        assert_eq!(outcome.state(), ReactionState::NotReacted);
        assert!(outcome.energy_margin(200.0) < 0.0);
    }

    #[test]
    fn badly_oriented_collision_does_not_react_regardless_of_energy() {
        let outcome = ReactionDetector::new()
            .evaluate(&attempt(60.0, 1.0e6, 1.0))
            .unwrap();

        assert!(!outcome.reacted);
        assert_eq!(outcome.orientation_factor, 0.0);
        assert_eq!(outcome.effective_energy, 0.0);
    }

    #[test]
    fn partial_misalignment_attenuates_energy() {
        let outcome = ReactionDetector::new().evaluate(&attempt(120.0, 10.0, 200.0)).unwrap();

        assert!((outcome.orientation_factor - 0.5).abs() < TOLERANCE);
        assert!((outcome.effective_energy - 125.0).abs() < TOLERANCE);
        assert!(!outcome.reacted);
    }

    #[test]
    fn near_ideal_approach_beats_far_approach() {
        let detector = ReactionDetector::new();
        let near = detector.evaluate(&attempt(170.0, 10.0, 0.0)).unwrap();
        let far = detector.evaluate(&attempt(110.0, 10.0, 0.0)).unwrap();
        assert!(near.effective_energy > far.effective_energy);
    }

    #[test]
    fn invalid_masses_propagate_as_distinct_error() {
        let mut bad = attempt(180.0, 10.0, 1.0);
        bad.mass_a = 0.0;
        bad.mass_b = 0.0;

        let result = ReactionDetector::new().evaluate(&bad);

        assert!(matches!(
            result,
            Err(EngineError::InvalidPhysicalInput {
                source: EnergyError::ZeroTotalMass
            })
        ));
    }

    #[test]
    fn nan_angle_is_rejected_instead_of_reported_as_no_reaction() {
        let result = ReactionDetector::new().evaluate(&attempt(f64::NAN, 10.0, 1.0));
        assert!(matches!(
            result,
            Err(EngineError::InvalidPhysicalInput {
                source: EnergyError::NonFinite { .. }
            })
        ));
    }

    #[test]
    fn nan_velocity_is_rejected() {
        let result = ReactionDetector::new().evaluate(&attempt(180.0, f64::NAN, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn evaluations_are_independent() {
        let detector = ReactionDetector::new();
        let first = detector.evaluate(&attempt(150.0, 7.0, 100.0)).unwrap();
        let _ = detector.evaluate(&attempt(180.0, 100.0, 1.0)).unwrap();
        let again = detector.evaluate(&attempt(150.0, 7.0, 100.0)).unwrap();
        assert_eq!(first, again);
    }
}
