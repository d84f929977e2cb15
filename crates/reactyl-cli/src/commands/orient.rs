use crate::cli::OrientArgs;
use crate::error::Result;
use nalgebra::UnitQuaternion;
use reactyl::core::models::structure::{MolecularStructure, StructureRole};
use reactyl::core::utils::geometry;
use reactyl::engine::error::EngineError;
use reactyl::engine::orientation::{OrientationStrategy, Sn2Backside};
use tracing::info;

// Positions are all that matter to the orientation, so masses are placeholders.
const PLACEHOLDER_MASS: f64 = 1.0;

pub fn run(args: OrientArgs) -> Result<()> {
    let substrate =
        MolecularStructure::new(StructureRole::Substrate, args.substrate, PLACEHOLDER_MASS);
    let mut nucleophile =
        MolecularStructure::new(StructureRole::Nucleophile, args.nucleophile, PLACEHOLDER_MASS)
            .with_up(args.up.unwrap_or_else(geometry::default_up));

    let strategy = Sn2Backside;
    info!("Orienting nucleophile with strategy '{}'", strategy.name());
    let rotation = strategy
        .orient(&substrate, &mut nucleophile)
        .map_err(EngineError::from)?;

    let approach = geometry::direction_between(&nucleophile.position, &substrate.position);
    println!("{}", render(&rotation, approach.map(|d| nucleophile.forward().dot(&d))));
    Ok(())
}

fn render(rotation: &UnitQuaternion<f64>, forward_dot_approach: Option<f64>) -> String {
    let q = rotation.quaternion();
    let (roll, pitch, yaw) = rotation.euler_angles();
    let forward = geometry::forward_axis(rotation);
    let mut text = format!(
        "orientation (w, x, y, z): ({:.6}, {:.6}, {:.6}, {:.6})\n\
         euler (roll, pitch, yaw): ({:.2}, {:.2}, {:.2}) deg\n\
         forward axis            : ({:.4}, {:.4}, {:.4})",
        q.w,
        q.i,
        q.j,
        q.k,
        roll.to_degrees(),
        pitch.to_degrees(),
        yaw.to_degrees(),
        forward.x,
        forward.y,
        forward.z,
    );
    if let Some(dot) = forward_dot_approach {
        text.push_str(&format!("\nforward . approach      : {:.4}", dot));
    }
    text
}
