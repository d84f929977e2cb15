use super::reaction::ReactionType;

/// Inputs for a single reaction evaluation. Built per collision and discarded
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionAttempt {
    /// Measured angle between the actual and the ideal attack vectors.
    pub actual_approach_angle_degrees: f64,
    pub ideal_approach_angle_degrees: f64,
    /// Closing speed of the two structures.
    pub relative_velocity: f64,
    pub mass_a: f64,
    pub mass_b: f64,
    /// Threshold the effective collision energy must reach.
    pub activation_energy: f64,
}

impl ReactionAttempt {
    /// Builds an attempt whose ideal angle comes from the reaction type's profile.
    pub fn for_reaction(
        reaction_type: ReactionType,
        actual_approach_angle_degrees: f64,
        relative_velocity: f64,
        masses: (f64, f64),
        activation_energy: f64,
    ) -> Self {
        Self {
            actual_approach_angle_degrees,
            ideal_approach_angle_degrees: reaction_type.ideal_approach_angle_degrees(),
            relative_velocity,
            mass_a: masses.0,
            mass_b: masses.1,
            activation_energy,
        }
    }

    #[inline]
    pub fn angular_deviation_degrees(&self) -> f64 {
        self.actual_approach_angle_degrees - self.ideal_approach_angle_degrees
    }
}
