use crate::core::utils::geometry;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use std::str::FromStr;

/// The part a structure plays in a substitution or elimination event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StructureRole {
    /// The molecule carrying the electrophilic center that is attacked.
    #[default]
    Substrate,
    /// The attacking species.
    Nucleophile,
    /// The group displaced from the substrate.
    LeavingGroup,
}

/// A positioned molecular structure as seen by the engine.
///
/// Instances belong to the host scene. The engine only borrows them and, for
/// orientation strategies, writes the two orientation fields. Those fields are
/// kept as separate values because the renderer and the physics step consume
/// them independently; after every orientation update they compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct MolecularStructure {
    /// World-space position of the structure's reactive center.
    pub position: Point3<f64>,
    /// Render-space rotation.
    pub orientation: UnitQuaternion<f64>,
    /// Rotation handed to the physics step; mirrors `orientation`.
    pub physics_orientation: UnitQuaternion<f64>,
    /// Mass in the same units used for collision energies (amu in the demos).
    pub mass: f64,
    pub role: StructureRole,
    /// Reference up-vector used to resolve roll when facing a target.
    pub up: Vector3<f64>,
}

impl MolecularStructure {
    /// Creates a structure at `position` with identity orientation and the
    /// default up-vector.
    pub fn new(role: StructureRole, position: Point3<f64>, mass: f64) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
            physics_orientation: UnitQuaternion::identity(),
            mass,
            role,
            up: geometry::default_up(),
        }
    }

    pub fn with_up(mut self, up: Vector3<f64>) -> Self {
        self.up = up;
        self
    }

    /// Writes `rotation` into both orientation fields.
    #[inline]
    pub fn set_orientation(&mut self, rotation: UnitQuaternion<f64>) {
        self.orientation = rotation;
        self.physics_orientation = rotation;
    }

    #[inline]
    pub fn is_orientation_synced(&self) -> bool {
        self.orientation == self.physics_orientation
    }

    /// World-space direction of the structure's local forward axis.
    pub fn forward(&self) -> Vector3<f64> {
        geometry::forward_axis(&self.orientation)
    }
}

impl FromStr for StructureRole {
    type Err = ();

    /// Parses a role name, case-insensitively, accepting the common
    /// hyphen/underscore spellings of "leaving group".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substrate" => Ok(StructureRole::Substrate),
            "nucleophile" | "nu" => Ok(StructureRole::Nucleophile),
            "leaving-group" | "leaving_group" | "leavinggroup" | "lg" => {
                Ok(StructureRole::LeavingGroup)
            }
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_structure_has_identity_orientation_and_default_up() {
        let structure =
            MolecularStructure::new(StructureRole::Nucleophile, Point3::new(1.0, 2.0, 3.0), 17.0);

        assert_eq!(structure.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(structure.orientation, UnitQuaternion::identity());
        assert_eq!(structure.physics_orientation, UnitQuaternion::identity());
        assert_eq!(structure.up, Vector3::y());
        assert_eq!(structure.mass, 17.0);
        assert_eq!(structure.role, StructureRole::Nucleophile);
    }

    #[test]
    fn set_orientation_writes_both_fields() {
        let mut structure = MolecularStructure::new(StructureRole::Substrate, Point3::origin(), 1.0);
        let rotation = UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3);

        structure.set_orientation(rotation);

        assert_eq!(structure.orientation, rotation);
        assert_eq!(structure.physics_orientation, rotation);
        assert!(structure.is_orientation_synced());
    }

    #[test]
    fn physics_orientation_is_an_independent_copy() {
        let mut structure = MolecularStructure::new(StructureRole::Substrate, Point3::origin(), 1.0);
        structure.set_orientation(UnitQuaternion::from_euler_angles(0.0, 0.5, 0.0));

        structure.orientation = UnitQuaternion::identity();

        assert_ne!(structure.physics_orientation, UnitQuaternion::identity());
        assert!(!structure.is_orientation_synced());
    }

    #[test]
    fn forward_of_identity_orientation_is_negative_z() {
        let structure = MolecularStructure::new(StructureRole::Substrate, Point3::origin(), 1.0);
        assert_eq!(structure.forward(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn with_up_overrides_reference_vector() {
        let structure = MolecularStructure::new(StructureRole::Substrate, Point3::origin(), 1.0)
            .with_up(Vector3::z());
        assert_eq!(structure.up, Vector3::z());
    }

    #[test]
    fn from_str_parses_valid_roles() {
        assert_eq!(StructureRole::from_str("substrate"), Ok(StructureRole::Substrate));
        assert_eq!(StructureRole::from_str("Nucleophile"), Ok(StructureRole::Nucleophile));
        assert_eq!(StructureRole::from_str("NU"), Ok(StructureRole::Nucleophile));
        assert_eq!(StructureRole::from_str("leaving-group"), Ok(StructureRole::LeavingGroup));
        assert_eq!(StructureRole::from_str("Leaving_Group"), Ok(StructureRole::LeavingGroup));
        assert_eq!(StructureRole::from_str("lg"), Ok(StructureRole::LeavingGroup));
    }

    #[test]
    fn from_str_returns_err_for_invalid_role() {
        assert_eq!(StructureRole::from_str("catalyst"), Err(()));
        assert_eq!(StructureRole::from_str(""), Err(()));
    }
}
