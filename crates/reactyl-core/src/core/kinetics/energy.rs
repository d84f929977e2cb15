use thiserror::Error;

const QUARTER_TURN_DEGREES: f64 = 90.0;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum EnergyError {
    #[error("Mass must be non-negative, got {0}")]
    NegativeMass(f64),
    #[error("Combined mass of the colliding pair is zero")]
    ZeroTotalMass,
    #[error("Relative velocity is a magnitude and must be non-negative, got {0}")]
    NegativeVelocity(f64),
    #[error("Non-finite value for {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

#[inline]
fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, EnergyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EnergyError::NonFinite { quantity, value })
    }
}

/// Steric factor in `[0, 1]` for an approach that deviates from the ideal
/// angle: `max(0, cos(actual - ideal))`.
///
/// Angles are used as given (no wrapping). NaN inputs yield NaN.
#[inline]
pub fn orientation_factor(actual_angle_degrees: f64, ideal_angle_degrees: f64) -> f64 {
    let deviation_degrees = actual_angle_degrees - ideal_angle_degrees;
    // cos(pi/2) is not exactly zero in f64; the comparison is false for NaN.
    if deviation_degrees.abs() >= QUARTER_TURN_DEGREES {
        return 0.0;
    }
    deviation_degrees.to_radians().cos()
}

/// Same as [`orientation_factor`] but rejects non-finite angles instead of
/// returning NaN.
pub fn checked_orientation_factor(
    actual_angle_degrees: f64,
    ideal_angle_degrees: f64,
) -> Result<f64, EnergyError> {
    let actual = ensure_finite("actual approach angle", actual_angle_degrees)?;
    let ideal = ensure_finite("ideal approach angle", ideal_angle_degrees)?;
    Ok(orientation_factor(actual, ideal))
}

/// Reduced mass `m_a * m_b / (m_a + m_b)` of a two-body pair.
pub fn reduced_mass(mass_a: f64, mass_b: f64) -> Result<f64, EnergyError> {
    let mass_a = ensure_finite("mass", mass_a)?;
    let mass_b = ensure_finite("mass", mass_b)?;
    if mass_a < 0.0 {
        return Err(EnergyError::NegativeMass(mass_a));
    }
    if mass_b < 0.0 {
        return Err(EnergyError::NegativeMass(mass_b));
    }
    let total = mass_a + mass_b;
    if total == 0.0 {
        return Err(EnergyError::ZeroTotalMass);
    }
    Ok(mass_a * mass_b / total)
}

/// Kinetic energy of relative motion, `0.5 * mu * v^2`.
pub fn collision_energy(
    mass_a: f64,
    mass_b: f64,
    relative_velocity: f64,
) -> Result<f64, EnergyError> {
    let mu = reduced_mass(mass_a, mass_b)?;
    let velocity = ensure_finite("relative velocity", relative_velocity)?;
    if velocity < 0.0 {
        return Err(EnergyError::NegativeVelocity(velocity));
    }
    Ok(0.5 * mu * velocity * velocity)
}
