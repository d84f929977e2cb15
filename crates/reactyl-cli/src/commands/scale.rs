use crate::cli::{ScaleArgs, ScaleFrom};
use crate::error::Result;
use reactyl::core::kinetics::scaling;

pub fn run(args: ScaleArgs) -> Result<()> {
    let range = scaling::energy_range(args.activation_energy);
    let converted = convert(args.from, args.value, args.activation_energy);

    match args.from {
        ScaleFrom::Velocity => println!(
            "velocity {} -> energy {:.4} (axis [{}, {}])",
            args.value, converted, range.min, range.max
        ),
        ScaleFrom::Energy => println!(
            "energy {} -> velocity {:.4} (slider [0, {}])",
            args.value,
            converted,
            scaling::MAX_VISUAL_VELOCITY
        ),
    }
    Ok(())
}

fn convert(from: ScaleFrom, value: f64, activation_energy: f64) -> f64 {
    match from {
        ScaleFrom::Velocity => scaling::energy_from_velocity(value, activation_energy),
        ScaleFrom::Energy => scaling::velocity_from_energy(value, activation_energy),
    }
}
