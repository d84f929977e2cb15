use crate::core::models::structure::MolecularStructure;
use crate::core::utils::geometry;
use nalgebra::{UnitQuaternion, Vector3};
use thiserror::Error;
use tracing::{debug, warn};

/// Yaw about the attacker's local vertical axis that turns its reactive axis,
/// rather than its raw forward axis, toward the substrate.
pub const BACKSIDE_YAW_DEGREES: f64 = 90.0;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum OrientationError {
    #[error("substrate and attacker positions coincide, or an input is not finite")]
    DegenerateGeometry,
}

/// Computes and applies the absolute orientation of an attacking structure
/// relative to a substrate.
///
/// Implementations must derive the result from positions and the up-vector
/// only, so repeated calls with unchanged inputs are bit-identical, and must
/// leave the attacker untouched when they fail.
pub trait OrientationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn orient(
        &self,
        substrate: &MolecularStructure,
        attacker: &mut MolecularStructure,
    ) -> Result<UnitQuaternion<f64>, OrientationError>;
}

/// SN2 backside attack: the nucleophile faces the substrate's electrophilic
/// center, then yaws by [`BACKSIDE_YAW_DEGREES`] about its own vertical axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sn2Backside;

impl Sn2Backside {
    /// The target orientation without touching either structure.
    pub fn target_orientation(
        substrate: &MolecularStructure,
        nucleophile: &MolecularStructure,
    ) -> Result<UnitQuaternion<f64>, OrientationError> {
        let dir = geometry::direction_between(&nucleophile.position, &substrate.position)
            .ok_or(OrientationError::DegenerateGeometry)?;
        if !geometry::is_finite(&nucleophile.up) {
            return Err(OrientationError::DegenerateGeometry);
        }

        if geometry::is_parallel(&dir, &nucleophile.up) {
            warn!("Approach direction parallel to up-vector; substituting fallback up-vector.");
        }
        let look_at = geometry::look_at_rotation(&dir, &nucleophile.up);
        let yaw = geometry::rotation_from_axis_angle(&Vector3::y(), BACKSIDE_YAW_DEGREES);

        // Right-multiplication applies the yaw in the nucleophile's local frame.
        let rotation = look_at * yaw;
        if !rotation.coords.iter().all(|c| c.is_finite()) {
            return Err(OrientationError::DegenerateGeometry);
        }
        Ok(rotation)
    }
}

impl OrientationStrategy for Sn2Backside {
    fn name(&self) -> &'static str {
        "sn2-backside"
    }

    fn orient(
        &self,
        substrate: &MolecularStructure,
        nucleophile: &mut MolecularStructure,
    ) -> Result<UnitQuaternion<f64>, OrientationError> {
        let rotation = Self::target_orientation(substrate, nucleophile).inspect_err(|_| {
            warn!(
                "Degenerate geometry: substrate at {:?}, nucleophile at {:?}, up {:?}. Orientation left unchanged.",
                substrate.position, nucleophile.position, nucleophile.up
            );
        })?;
        nucleophile.set_orientation(rotation);
        debug!(
            "Oriented nucleophile for backside attack: {:?}",
            rotation.coords
        );
        Ok(rotation)
    }
}

/// Convenience wrapper around [`Sn2Backside`].
pub fn orient_sn2_backside(
    substrate: &MolecularStructure,
    nucleophile: &mut MolecularStructure,
) -> Result<UnitQuaternion<f64>, OrientationError> {
    Sn2Backside.orient(substrate, nucleophile)
}
