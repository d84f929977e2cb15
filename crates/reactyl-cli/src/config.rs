mod defaults;

pub use defaults::DefaultsConfig;

use crate::cli::KineticsArgs;
use crate::error::{CliError, Result};
use reactyl::core::models::reaction::ReactionType;
use reactyl::engine::config::{SampleRange, SweepConfig, SweepConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialReactionConfig {
    #[serde(rename = "type")]
    reaction_type: Option<String>,
    activation_energy: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialMassesConfig {
    substrate: Option<f64>,
    nucleophile: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialSweepConfig {
    angle_start: Option<f64>,
    angle_end: Option<f64>,
    angle_step: Option<f64>,
    velocity_start: Option<f64>,
    velocity_end: Option<f64>,
    velocity_step: Option<f64>,
}

/// The TOML configuration file as written, every value optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    reaction: Option<PartialReactionConfig>,
    masses: Option<PartialMassesConfig>,
    sweep: Option<PartialSweepConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the file when one is given, otherwise starts from nothing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves every setting with precedence CLI flag > `--set` > file > defaults.
    pub fn merge_with_cli(mut self, args: &KineticsArgs) -> Result<SweepConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let reaction = self.reaction.take().unwrap_or_default();
        let masses = self.masses.take().unwrap_or_default();
        let sweep = self.sweep.take().unwrap_or_default();

        let reaction_type = match (args.reaction, reaction.reaction_type) {
            (Some(cli), _) => cli,
            (None, Some(tag)) => ReactionType::from_str(&tag)
                .map_err(|e| CliError::Config(format!("`reaction.type`: {}", e)))?,
            (None, None) => defaults.reaction_type,
        };

        let angles = SampleRange::new(
            sweep.angle_start.unwrap_or(defaults.angle_start),
            sweep.angle_end.unwrap_or(defaults.angle_end),
            sweep.angle_step.unwrap_or(defaults.angle_step),
        );
        let velocities = SampleRange::new(
            sweep.velocity_start.unwrap_or(defaults.velocity_start),
            sweep.velocity_end.unwrap_or(defaults.velocity_end),
            sweep.velocity_step.unwrap_or(defaults.velocity_step),
        );

        SweepConfigBuilder::new()
            .reaction_type(reaction_type)
            .activation_energy(
                args.activation_energy
                    .or(reaction.activation_energy)
                    .unwrap_or(defaults.activation_energy),
            )
            .masses(
                args.mass_a
                    .or(masses.substrate)
                    .unwrap_or(defaults.mass_substrate),
                args.mass_b
                    .or(masses.nucleophile)
                    .unwrap_or(defaults.mass_nucleophile),
            )
            .angles(angles)
            .velocities(velocities)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let key = key.trim();
            let value_str = value_str.trim();

            if key == "reaction.type" {
                self.reaction
                    .get_or_insert_with(Default::default)
                    .reaction_type = Some(value_str.to_string());
                continue;
            }

            let value: f64 = value_str.parse().map_err(|_| {
                CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
            })?;
            let slot = match key {
                "reaction.activation-energy" => {
                    &mut self
                        .reaction
                        .get_or_insert_with(Default::default)
                        .activation_energy
                }
                "masses.substrate" => &mut self.masses.get_or_insert_with(Default::default).substrate,
                "masses.nucleophile" => {
                    &mut self.masses.get_or_insert_with(Default::default).nucleophile
                }
                "sweep.angle-start" => &mut self.sweep.get_or_insert_with(Default::default).angle_start,
                "sweep.angle-end" => &mut self.sweep.get_or_insert_with(Default::default).angle_end,
                "sweep.angle-step" => &mut self.sweep.get_or_insert_with(Default::default).angle_step,
                "sweep.velocity-start" => {
                    &mut self.sweep.get_or_insert_with(Default::default).velocity_start
                }
                "sweep.velocity-end" => {
                    &mut self.sweep.get_or_insert_with(Default::default).velocity_end
                }
                "sweep.velocity-step" => {
                    &mut self.sweep.get_or_insert_with(Default::default).velocity_step
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            };
            *slot = Some(value);
        }
        Ok(())
    }
}
