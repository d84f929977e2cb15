use crate::cli::SweepArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use reactyl::engine::config::SweepConfig;
use reactyl::engine::progress::ProgressReporter;
use reactyl::workflows::sweep::{self, SweepResult};
use std::path::Path;
use tracing::info;

pub fn run(args: SweepArgs, quiet: bool) -> Result<()> {
    let config = PartialConfig::load(args.kinetics.config.as_deref())?
        .merge_with_cli(&args.kinetics)?;
    info!(
        "Sweeping {} grid points for {} (Ea = {})",
        config.total_points(),
        config.reaction_type,
        config.activation_energy
    );

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let result = sweep::run(&config, &reporter)?;

    write_csv(&args.output, &result)?;
    info!("Wrote {} rows to {:?}", result.points.len(), &args.output);

    println!("{}", threshold_table(&config, &result));
    println!(
        "✓ {} grid points written to: {}",
        result.points.len(),
        args.output.display()
    );
    Ok(())
}

fn write_csv(path: &Path, result: &SweepResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in &result.points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn threshold_table(config: &SweepConfig, result: &SweepResult) -> String {
    let mut lines = vec![format!("{:>10}  {}", "angle", "threshold velocity")];
    for angle in config.angles.values() {
        let threshold = result
            .threshold_velocity(angle)
            .map(|v| format!("{}", v))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("{:>10.1}  {}", angle, threshold));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactyl::core::models::reaction::ReactionType;
    use reactyl::engine::config::{SampleRange, SweepConfigBuilder};
    use tempfile::tempdir;

    fn small_config() -> SweepConfig {
        SweepConfigBuilder::new()
            .reaction_type(ReactionType::Sn2)
            .activation_energy(250.0)
            .masses(10.0, 10.0)
            .angles(SampleRange::new(90.0, 180.0, 90.0))
            .velocities(SampleRange::new(0.0, 20.0, 10.0))
            .build()
            .unwrap()
    }

    #[test]
    fn write_csv_emits_header_and_one_row_per_point() {
        let config = small_config();
        let result = sweep::run(&config, &ProgressReporter::new()).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.csv");

        write_csv(&path, &result).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some(
                "angle_degrees,velocity,collision_energy,orientation_factor,effective_energy,reacted"
            )
        );
        assert_eq!(lines.count(), config.total_points());
        assert!(content.contains("180.0,10.0,250.0,1.0,250.0,true"));
    }

    #[test]
    fn threshold_table_marks_angles_without_reaction() {
        let config = small_config();
        let result = sweep::run(&config, &ProgressReporter::new()).unwrap();

        let table = threshold_table(&config, &result);

        assert!(table.contains("      90.0  -"));
        assert!(table.contains("     180.0  10"));
    }
}
