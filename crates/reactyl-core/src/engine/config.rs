use crate::core::kinetics::energy;
use crate::core::models::reaction::ReactionType;
use thiserror::Error;

const RANGE_EPSILON: f64 = 1e-9;

/// Largest number of sample points a single range may produce.
pub const MAX_RANGE_POINTS: usize = 100_000;
/// Largest angle × velocity grid a sweep will evaluate.
pub const MAX_GRID_POINTS: usize = 1_000_000;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid range for '{name}': start={start}, end={end}, step={step}")]
    InvalidRange {
        name: &'static str,
        start: f64,
        end: f64,
        step: f64,
    },

    #[error("Sweep grid has {points} points, more than the limit of {limit}")]
    GridTooLarge { points: usize, limit: usize },

    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Inclusive, evenly spaced sample points `start, start + step, ..., <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SampleRange {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let finite = self.start.is_finite() && self.end.is_finite() && self.step.is_finite();
        if !finite
            || self.step <= 0.0
            || self.end < self.start
            || self.exact_count() > MAX_RANGE_POINTS as f64
        {
            return Err(ConfigError::InvalidRange {
                name,
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        Ok(())
    }

    // Computed in f64 so a tiny step yields a huge (or infinite) count instead
    // of overflowing.
    fn exact_count(&self) -> f64 {
        ((self.end - self.start) / self.step + RANGE_EPSILON).floor() + 1.0
    }

    /// Number of sample points; never zero and at most [`MAX_RANGE_POINTS`]
    /// for a validated range.
    pub fn count(&self) -> usize {
        self.exact_count() as usize
    }

    /// Sample points computed by index so rounding does not accumulate.
    pub fn values(&self) -> Vec<f64> {
        (0..self.count())
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub reaction_type: ReactionType,
    pub activation_energy: f64,
    pub mass_a: f64,
    pub mass_b: f64,
    pub angles: SampleRange,
    pub velocities: SampleRange,
}

impl SweepConfig {
    pub fn total_points(&self) -> usize {
        self.angles.count() * self.velocities.count()
    }
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    reaction_type: Option<ReactionType>,
    activation_energy: Option<f64>,
    mass_a: Option<f64>,
    mass_b: Option<f64>,
    angles: Option<SampleRange>,
    velocities: Option<SampleRange>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reaction_type(mut self, reaction_type: ReactionType) -> Self {
        self.reaction_type = Some(reaction_type);
        self
    }
    pub fn activation_energy(mut self, energy: f64) -> Self {
        self.activation_energy = Some(energy);
        self
    }
    pub fn masses(mut self, mass_a: f64, mass_b: f64) -> Self {
        self.mass_a = Some(mass_a);
        self.mass_b = Some(mass_b);
        self
    }
    pub fn angles(mut self, range: SampleRange) -> Self {
        self.angles = Some(range);
        self
    }
    pub fn velocities(mut self, range: SampleRange) -> Self {
        self.velocities = Some(range);
        self
    }

    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let activation_energy = self
            .activation_energy
            .ok_or(ConfigError::MissingParameter("activation_energy"))?;
        if !activation_energy.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "activation_energy",
                reason: format!("must be finite, got {}", activation_energy),
            });
        }

        let mass_a = self.mass_a.ok_or(ConfigError::MissingParameter("mass_a"))?;
        let mass_b = self.mass_b.ok_or(ConfigError::MissingParameter("mass_b"))?;
        energy::reduced_mass(mass_a, mass_b).map_err(|e| ConfigError::InvalidValue {
            name: "masses",
            reason: e.to_string(),
        })?;

        let angles = self.angles.ok_or(ConfigError::MissingParameter("angles"))?;
        angles.validate("angles")?;
        let velocities = self
            .velocities
            .ok_or(ConfigError::MissingParameter("velocities"))?;
        velocities.validate("velocities")?;
        if velocities.start < 0.0 {
            return Err(ConfigError::InvalidRange {
                name: "velocities",
                start: velocities.start,
                end: velocities.end,
                step: velocities.step,
            });
        }
        let points = angles
            .count()
            .checked_mul(velocities.count())
            .unwrap_or(usize::MAX);
        if points > MAX_GRID_POINTS {
            return Err(ConfigError::GridTooLarge {
                points,
                limit: MAX_GRID_POINTS,
            });
        }

        Ok(SweepConfig {
            reaction_type: self
                .reaction_type
                .ok_or(ConfigError::MissingParameter("reaction_type"))?,
            activation_energy,
            mass_a,
            mass_b,
            angles,
            velocities,
        })
    }
}
