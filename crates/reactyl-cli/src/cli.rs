use crate::utils::parser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use nalgebra::{Point3, Vector3};
use reactyl::core::models::reaction::ReactionType;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Reactyl Contributors",
    version,
    about = "Reactyl CLI - Reaction feasibility and attack-orientation engine for animated molecular collision demonstrations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel sweeps.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide whether a single collision reacts.
    Evaluate(EvaluateArgs),
    /// Compute the SN2 backside-attack orientation of a nucleophile.
    Orient(OrientArgs),
    /// Convert between the visual velocity slider and the energy axis.
    Scale(ScaleArgs),
    /// Evaluate a whole grid of approach angles and velocities and write it as CSV.
    Sweep(SweepArgs),
    /// Look up species in a thermochemistry table.
    Species(SpeciesArgs),
}

/// Reaction and mass settings shared by `evaluate` and `sweep`.
#[derive(Args, Debug, Clone, Default)]
pub struct KineticsArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reaction type tag (SN2, SN1, E2).
    #[arg(short, long, value_name = "TAG", value_parser = parser::parse_reaction_type)]
    pub reaction: Option<ReactionType>,

    /// Activation energy, in the same units as the collision energy.
    #[arg(short = 'e', long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub activation_energy: Option<f64>,

    /// Mass of the substrate.
    #[arg(long, value_name = "FLOAT")]
    pub mass_a: Option<f64>,

    /// Mass of the nucleophile.
    #[arg(long, value_name = "FLOAT")]
    pub mass_b: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S sweep.angle-step=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Measured approach angle in degrees.
    #[arg(short, long, value_name = "DEGREES", allow_negative_numbers = true)]
    pub angle: f64,

    /// Relative velocity of the colliding pair.
    #[arg(long, value_name = "FLOAT")]
    pub velocity: f64,

    #[command(flatten)]
    pub kinetics: KineticsArgs,
}

/// Arguments for the `orient` subcommand.
#[derive(Args, Debug)]
pub struct OrientArgs {
    /// Substrate position as "x,y,z".
    #[arg(long, value_name = "X,Y,Z", value_parser = parser::parse_point3, allow_hyphen_values = true)]
    pub substrate: Point3<f64>,

    /// Nucleophile position as "x,y,z".
    #[arg(long, value_name = "X,Y,Z", value_parser = parser::parse_point3, allow_hyphen_values = true)]
    pub nucleophile: Point3<f64>,

    /// Up-vector of the nucleophile as "x,y,z". Defaults to +Y.
    #[arg(long, value_name = "X,Y,Z", value_parser = parser::parse_vector3, allow_hyphen_values = true)]
    pub up: Option<Vector3<f64>>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleFrom {
    /// Map a slider velocity onto the energy axis.
    Velocity,
    /// Map an energy back onto the slider.
    Energy,
}

/// Arguments for the `scale` subcommand.
#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Which quantity VALUE is.
    #[arg(value_enum)]
    pub from: ScaleFrom,

    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    /// Activation energy that fixes the energy axis.
    #[arg(short = 'e', long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub activation_energy: f64,
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Path of the CSV file to write the evaluated grid to.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub kinetics: KineticsArgs,
}

/// Arguments for the `species` subcommand.
#[derive(Args, Debug)]
pub struct SpeciesArgs {
    /// Thermochemistry table: CSV, or a JSON array of records for `.json`
    /// files. Without it only the built-in demo molecules are known.
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    #[command(subcommand)]
    pub command: SpeciesCommands,
}

#[derive(Subcommand, Debug)]
pub enum SpeciesCommands {
    /// Resolve an identifier to its canonical id and display name.
    Resolve {
        #[arg(required = true)]
        name: String,
    },
    /// Standard reaction enthalpy at 298 K from formation enthalpies.
    Enthalpy {
        /// Reactant terms such as "CH3Br" or "2 H2O".
        #[arg(long, required = true, num_args(1..))]
        reactants: Vec<String>,
        /// Product terms such as "CH3OH" or "2 H2O".
        #[arg(long, required = true, num_args(1..))]
        products: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_parses_shared_kinetics_flags() {
        let cli = Cli::parse_from([
            "reactyl", "evaluate", "--angle", "150", "--velocity", "12.5", "--reaction", "sn2",
            "-e", "30", "-S", "masses.substrate=94.9",
        ]);

        let Commands::Evaluate(args) = cli.command else {
            panic!("Expected 'evaluate' subcommand");
        };
        assert_eq!(args.angle, 150.0);
        assert_eq!(args.velocity, 12.5);
        assert_eq!(args.kinetics.reaction, Some(ReactionType::Sn2));
        assert_eq!(args.kinetics.activation_energy, Some(30.0));
        assert_eq!(args.kinetics.set_values, vec!["masses.substrate=94.9"]);
    }

    #[test]
    fn orient_accepts_negative_coordinates() {
        let cli = Cli::parse_from([
            "reactyl", "orient", "--substrate", "0,0,0", "--nucleophile", "-1.5,0,-5",
        ]);

        let Commands::Orient(args) = cli.command else {
            panic!("Expected 'orient' subcommand");
        };
        assert_eq!(args.nucleophile, Point3::new(-1.5, 0.0, -5.0));
        assert!(args.up.is_none());
    }

    #[test]
    fn unknown_reaction_tag_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from([
            "reactyl", "evaluate", "--angle", "180", "--velocity", "1", "--reaction", "SN3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::parse_from(["reactyl", "scale", "velocity", "250", "-e", "20", "-vv", "-j", "2"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, Some(2));
        let Commands::Scale(args) = cli.command else {
            panic!("Expected 'scale' subcommand");
        };
        assert_eq!(args.from, ScaleFrom::Velocity);
        assert_eq!(args.value, 250.0);
    }

    #[test]
    fn species_enthalpy_collects_multiple_terms() {
        let cli = Cli::parse_from([
            "reactyl", "species", "--table", "t.csv", "enthalpy", "--reactants", "CH3Br", "OH-",
            "--products", "CH3OH", "Br-",
        ]);
        let Commands::Species(args) = cli.command else {
            panic!("Expected 'species' subcommand");
        };
        let SpeciesCommands::Enthalpy { reactants, products } = args.command else {
            panic!("Expected 'enthalpy' subcommand");
        };
        assert_eq!(reactants, vec!["CH3Br", "OH-"]);
        assert_eq!(products, vec!["CH3OH", "Br-"]);
    }
}
