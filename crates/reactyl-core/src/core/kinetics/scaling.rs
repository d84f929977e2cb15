use std::cmp::Ordering;

/// Upper bound of the visual velocity slider.
pub const MAX_VISUAL_VELOCITY: f64 = 500.0;

/// Room left above the activation energy on the energy axis.
pub const ENERGY_HEADROOM: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRange {
    pub min: f64,
    pub max: f64,
}

impl EnergyRange {
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A range is degenerate when it has no finite positive span to map onto.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.min.is_finite()
            || !self.max.is_finite()
            || self.max.partial_cmp(&self.min) != Some(Ordering::Greater)
    }
}

pub fn energy_range(activation_energy: f64) -> EnergyRange {
    EnergyRange {
        min: 0.0,
        max: activation_energy + ENERGY_HEADROOM,
    }
}

/// Maps a visual velocity onto the energy axis. Out-of-range velocities are
/// clamped to `[0, MAX_VISUAL_VELOCITY]` first. A NaN velocity passes through
/// `clamp` unchanged and yields NaN.
pub fn energy_from_velocity(velocity: f64, activation_energy: f64) -> f64 {
    let range = energy_range(activation_energy);
    if range.is_degenerate() {
        return range.min;
    }
    let clamped = velocity.clamp(0.0, MAX_VISUAL_VELOCITY);
    range.min + (clamped / MAX_VISUAL_VELOCITY) * range.span()
}

/// Inverse of [`energy_from_velocity`]. Out-of-range energies are clamped to
/// [`energy_range`] first; a NaN energy is not clamped and yields NaN.
pub fn velocity_from_energy(energy: f64, activation_energy: f64) -> f64 {
    let range = energy_range(activation_energy);
    if range.is_degenerate() {
        return 0.0;
    }
    let clamped = energy.clamp(range.min, range.max);
    (clamped - range.min) / range.span() * MAX_VISUAL_VELOCITY
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn energy_range_adds_headroom_above_activation_energy() {
        assert_eq!(energy_range(20.0), EnergyRange { min: 0.0, max: 30.0 });
    }

    #[test]
    fn energy_from_velocity_maps_endpoints_to_range_bounds() {
        assert_eq!(energy_from_velocity(0.0, 20.0), 0.0);
        assert!(f64_approx_equal(energy_from_velocity(500.0, 20.0), 30.0));
    }

    #[test]
    fn energy_from_velocity_is_linear() {
        assert!(f64_approx_equal(energy_from_velocity(250.0, 20.0), 15.0));
        assert!(f64_approx_equal(energy_from_velocity(100.0, 5.0), 3.0));
    }

    #[test]
    fn velocity_above_maximum_is_clamped() {
        for activation_energy in [5.0, 20.0, 100.0] {
            assert_eq!(
                energy_from_velocity(600.0, activation_energy),
                energy_from_velocity(500.0, activation_energy)
            );
        }
    }

    #[test]
    fn negative_velocity_is_clamped_to_zero() {
        assert_eq!(energy_from_velocity(-50.0, 20.0), 0.0);
    }

    #[test]
    fn energy_outside_range_is_clamped() {
        assert_eq!(velocity_from_energy(-3.0, 20.0), 0.0);
        assert!(f64_approx_equal(velocity_from_energy(45.0, 20.0), MAX_VISUAL_VELOCITY));
    }

    #[test]
    fn round_trip_recovers_velocity() {
        for activation_energy in [5.0, 20.0, 100.0] {
            for velocity in [0.0, 100.0, 250.0, 500.0] {
                let energy = energy_from_velocity(velocity, activation_energy);
                let recovered = velocity_from_energy(energy, activation_energy);
                assert!(
                    f64_approx_equal(recovered, velocity),
                    "Ea={} v={} recovered {}",
                    activation_energy,
                    velocity,
                    recovered
                );
            }
        }
    }

    #[test]
    fn degenerate_range_maps_to_lower_bounds() {
        assert_eq!(energy_from_velocity(250.0, -10.0), 0.0);
        assert_eq!(velocity_from_energy(5.0, -10.0), 0.0);
        assert_eq!(energy_from_velocity(250.0, -25.0), 0.0);
        assert_eq!(velocity_from_energy(5.0, -25.0), 0.0);
    }

    #[test]
    fn infinite_activation_energy_is_treated_as_degenerate() {
        assert!(energy_range(f64::INFINITY).is_degenerate());
        assert_eq!(energy_from_velocity(0.0, f64::INFINITY), 0.0);
        assert_eq!(energy_from_velocity(250.0, f64::INFINITY), 0.0);
        assert_eq!(velocity_from_energy(5.0, f64::INFINITY), 0.0);
        assert_eq!(energy_from_velocity(250.0, f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn nan_inputs_pass_through_clamping() {
        assert!(energy_from_velocity(f64::NAN, 20.0).is_nan());
        assert!(velocity_from_energy(f64::NAN, 20.0).is_nan());
    }

    #[test]
    fn nan_activation_energy_is_treated_as_degenerate() {
        assert_eq!(energy_from_velocity(250.0, f64::NAN), 0.0);
        assert_eq!(velocity_from_energy(5.0, f64::NAN), 0.0);
    }
}
