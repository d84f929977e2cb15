use crate::core::models::attempt::ReactionAttempt;
use crate::core::models::reaction::ReactionType;
use crate::core::models::structure::MolecularStructure;
use crate::core::utils::geometry;
use crate::engine::detector::{Outcome, ReactionDetector};
use crate::engine::error::EngineError;
use crate::engine::orientation::{OrientationError, OrientationStrategy};
use nalgebra::{UnitQuaternion, Vector3};
use tracing::{debug, instrument};

/// Kinetic inputs of a collision that do not come from the scene geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionKinetics {
    pub reaction_type: ReactionType,
    pub relative_velocity: f64,
    pub activation_energy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReport {
    /// Nu-C-LG angle measured at the substrate, in degrees.
    pub attack_angle_degrees: f64,
    pub attempt: ReactionAttempt,
    pub outcome: Outcome,
    /// Orientation written to the attacker.
    pub orientation: UnitQuaternion<f64>,
}

/// World-space direction of the substrate's bond to its leaving group when no
/// leaving-group structure is present in the scene: the substrate's local +X.
pub fn implicit_leaving_axis(substrate: &MolecularStructure) -> Vector3<f64> {
    substrate.orientation * Vector3::x()
}

fn measure_attack_angle(
    substrate: &MolecularStructure,
    attacker: &MolecularStructure,
    leaving_group: Option<&MolecularStructure>,
) -> Result<f64, OrientationError> {
    let angle = match leaving_group {
        Some(leaving) => geometry::attack_angle_degrees(
            &substrate.position,
            &attacker.position,
            &leaving.position,
        ),
        None => geometry::angle_to_axis_degrees(
            &substrate.position,
            &attacker.position,
            &implicit_leaving_axis(substrate),
        ),
    };
    angle.ok_or(OrientationError::DegenerateGeometry)
}

/// One host-loop update for a colliding pair: measures the attack angle,
/// evaluates the reaction and orients the attacker.
///
/// On error neither structure is modified.
#[instrument(skip_all, name = "collide_workflow", fields(reaction = %kinetics.reaction_type))]
pub fn run(
    substrate: &MolecularStructure,
    attacker: &mut MolecularStructure,
    leaving_group: Option<&MolecularStructure>,
    kinetics: &CollisionKinetics,
    strategy: &dyn OrientationStrategy,
) -> Result<CollisionReport, EngineError> {
    let attack_angle_degrees = measure_attack_angle(substrate, attacker, leaving_group)?;

    let attempt = ReactionAttempt::for_reaction(
        kinetics.reaction_type,
        attack_angle_degrees,
        kinetics.relative_velocity,
        (substrate.mass, attacker.mass),
        kinetics.activation_energy,
    );
    let outcome = ReactionDetector::new().evaluate(&attempt)?;

    // Orientation depends on positions only, so applying it last keeps the
    // attacker untouched whenever an earlier step fails.
    let orientation = strategy.orient(substrate, attacker)?;

    debug!(
        "Collision via '{}': angle {:.2} deg, reacted = {}",
        strategy.name(),
        attack_angle_degrees,
        outcome.reacted
    );

    Ok(CollisionReport {
        attack_angle_degrees,
        attempt,
        outcome,
        orientation,
    })
}
