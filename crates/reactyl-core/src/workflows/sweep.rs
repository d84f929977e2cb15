use crate::core::models::attempt::ReactionAttempt;
use crate::engine::config::SweepConfig;
use crate::engine::detector::ReactionDetector;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument};

const ANGLE_MATCH_TOLERANCE: f64 = 1e-9;

/// One evaluated grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub angle_degrees: f64,
    pub velocity: f64,
    pub collision_energy: f64,
    pub orientation_factor: f64,
    pub effective_energy: f64,
    pub reacted: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SweepResult {
    /// Angle-major, velocity ascending.
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn reacted_count(&self) -> usize {
        self.points.iter().filter(|p| p.reacted).count()
    }

    /// Smallest sampled velocity that reacts at `angle_degrees`, if any.
    pub fn threshold_velocity(&self, angle_degrees: f64) -> Option<f64> {
        self.points
            .iter()
            .filter(|p| (p.angle_degrees - angle_degrees).abs() < ANGLE_MATCH_TOLERANCE)
            .filter(|p| p.reacted)
            .map(|p| p.velocity)
            .min_by(f64::total_cmp)
    }
}

/// Evaluates every (angle, velocity) pair of the configured grid in parallel.
#[instrument(skip_all, name = "sweep_workflow")]
pub fn run(config: &SweepConfig, reporter: &ProgressReporter) -> Result<SweepResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Feasibility Sweep",
    });

    let angles = config.angles.values();
    let velocities = config.velocities.values();
    let grid: Vec<(f64, f64)> = angles
        .iter()
        .flat_map(|&angle| velocities.iter().map(move |&velocity| (angle, velocity)))
        .collect();

    info!(
        reaction = %config.reaction_type,
        angles = angles.len(),
        velocities = velocities.len(),
        "Starting feasibility sweep over {} grid points.",
        grid.len()
    );
    reporter.report(Progress::GridStart {
        angles: angles.len(),
        velocities: velocities.len(),
    });

    let detector = ReactionDetector::new();
    let points = grid
        .par_iter()
        .map(|&(angle, velocity)| -> Result<SweepPoint, EngineError> {
            let attempt = ReactionAttempt::for_reaction(
                config.reaction_type,
                angle,
                velocity,
                (config.mass_a, config.mass_b),
                config.activation_energy,
            );
            let outcome = detector.evaluate(&attempt)?;
            reporter.report(Progress::PointEvaluated {
                angle_degrees: angle,
                reacted: outcome.reacted,
            });
            Ok(SweepPoint {
                angle_degrees: angle,
                velocity,
                collision_energy: outcome.collision_energy,
                orientation_factor: outcome.orientation_factor,
                effective_energy: outcome.effective_energy,
                reacted: outcome.reacted,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = SweepResult { points };
    let reacted = result.reacted_count();
    reporter.report(Progress::GridFinish {
        evaluated: result.points.len(),
        reacted,
    });
    info!(
        reacted,
        "Sweep finished: {} of {} grid points react.",
        reacted,
        result.points.len()
    );
    if let Some(angle) = result
        .points
        .iter()
        .filter(|p| p.reacted)
        .map(|p| p.angle_degrees)
        .min_by(f64::total_cmp)
    {
        reporter.message(|| format!("Smallest reacting approach angle: {:.1}°", angle));
    }
    reporter.report(Progress::PhaseFinish);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::reaction::ReactionType;
    use crate::engine::config::{SampleRange, SweepConfigBuilder};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn config(angles: SampleRange, velocities: SampleRange, activation_energy: f64) -> SweepConfig {
        SweepConfigBuilder::new()
            .reaction_type(ReactionType::Sn2)
            .activation_energy(activation_energy)
            .masses(10.0, 10.0)
            .angles(angles)
            .velocities(velocities)
            .build()
            .unwrap()
    }

    #[test]
    fn run_covers_whole_grid_in_angle_major_order() {
        let config = config(
            SampleRange::new(0.0, 180.0, 15.0),
            SampleRange::new(0.0, 500.0, 50.0),
            20.0,
        );

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.points.len(), config.total_points());
        let expected: Vec<(f64, f64)> = config
            .angles
            .values()
            .into_iter()
            .flat_map(|a| config.velocities.values().into_iter().map(move |v| (a, v)))
            .collect();
        let actual: Vec<(f64, f64)> = result
            .points
            .iter()
            .map(|p| (p.angle_degrees, p.velocity))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn run_is_deterministic_across_invocations() {
        let config = config(
            SampleRange::new(90.0, 180.0, 5.0),
            SampleRange::new(0.0, 20.0, 0.5),
            100.0,
        );
        let reporter = ProgressReporter::new();

        let first = run(&config, &reporter).unwrap();
        let second = run(&config, &reporter).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn angles_beyond_quarter_turn_from_ideal_never_react() {
        let config = config(
            SampleRange::new(0.0, 90.0, 10.0),
            SampleRange::new(0.0, 500.0, 100.0),
            0.5,
        );

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.reacted_count(), 0);
        assert!(result.points.iter().all(|p| p.effective_energy == 0.0));
    }

    #[test]
    fn threshold_velocity_is_smallest_reacting_velocity() {
        // mu = 5, E = 2.5 v^2; Ea = 250 needs v >= 10 at the ideal angle.
        let config = config(
            SampleRange::new(120.0, 180.0, 60.0),
            SampleRange::new(0.0, 20.0, 1.0),
            250.0,
        );

        let result = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(result.threshold_velocity(180.0), Some(10.0));
        // factor 0.5 at 120 degrees doubles the required energy: v >= sqrt(200).
        assert_eq!(result.threshold_velocity(120.0), Some(15.0));
        assert_eq!(result.threshold_velocity(45.0), None);
    }

    #[test]
    fn run_reports_each_grid_point_once() {
        let config = config(
            SampleRange::new(0.0, 180.0, 30.0),
            SampleRange::new(0.0, 100.0, 25.0),
            20.0,
        );
        let evaluated = AtomicU64::new(0);
        let reacted = AtomicU64::new(0);
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| match event {
            Progress::PointEvaluated { reacted: hit, .. } => {
                evaluated.fetch_add(1, Ordering::Relaxed);
                if hit {
                    reacted.fetch_add(1, Ordering::Relaxed);
                }
            }
            other => events.lock().unwrap().push(other),
        }));

        let result = run(&config, &reporter).unwrap();

        assert_eq!(evaluated.load(Ordering::Relaxed), config.total_points() as u64);
        assert_eq!(reacted.load(Ordering::Relaxed), result.reacted_count() as u64);
        drop(reporter);
        let events = events.into_inner().unwrap();
        assert_eq!(events[0], Progress::PhaseStart { name: "Feasibility Sweep" });
        assert_eq!(
            events[1],
            Progress::GridStart {
                angles: 7,
                velocities: 5
            }
        );
        assert_eq!(
            events[2],
            Progress::GridFinish {
                evaluated: 35,
                reacted: result.reacted_count()
            }
        );
        assert_eq!(events.last(), Some(&Progress::PhaseFinish));
    }
}
