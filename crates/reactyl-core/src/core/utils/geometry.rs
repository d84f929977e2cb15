use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

const DEGENERATE_LENGTH: f64 = 1e-12;
const PARALLEL_EPSILON: f64 = 1e-12;

/// Canonical forward axis of a structure in its local frame.
#[inline]
pub fn local_forward() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -1.0)
}

#[inline]
pub fn default_up() -> Vector3<f64> {
    Vector3::y()
}

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(*axis), angle_degrees.to_radians())
}

#[inline]
pub fn is_finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Unit vector pointing from `from` to `to`, or `None` when the points coincide
/// or either one has a non-finite coordinate.
pub fn direction_between(from: &Point3<f64>, to: &Point3<f64>) -> Option<Vector3<f64>> {
    let delta = to - from;
    if !is_finite(&delta) {
        return None;
    }
    delta.try_normalize(DEGENERATE_LENGTH)
}

pub fn is_parallel(dir: &Vector3<f64>, up: &Vector3<f64>) -> bool {
    dir.cross(up).norm_squared() <= PARALLEL_EPSILON * up.norm_squared()
}

/// Returns `up` unless it cannot disambiguate roll for `dir`, in which case a
/// fixed world axis that is not parallel to `dir` is substituted.
pub fn resolve_up_vector(dir: &Vector3<f64>, up: &Vector3<f64>) -> Vector3<f64> {
    if !is_parallel(dir, up) {
        return *up;
    }
    if !is_parallel(dir, &Vector3::z()) {
        Vector3::z()
    } else {
        Vector3::x()
    }
}

/// Rotation that turns [`local_forward`] onto the unit vector `dir`, with roll
/// fixed by `up`.
pub fn look_at_rotation(dir: &Vector3<f64>, up: &Vector3<f64>) -> UnitQuaternion<f64> {
    let up = resolve_up_vector(dir, up);
    // face_towards maps local +Z onto its argument.
    UnitQuaternion::face_towards(&(-dir), &up)
}

#[inline]
pub fn forward_axis(orientation: &UnitQuaternion<f64>) -> Vector3<f64> {
    orientation * local_forward()
}

/// Angle in degrees at `center` between the bonds to `attacker` and `leaving`.
pub fn attack_angle_degrees(
    center: &Point3<f64>,
    attacker: &Point3<f64>,
    leaving: &Point3<f64>,
) -> Option<f64> {
    let to_attacker = direction_between(center, attacker)?;
    let to_leaving = direction_between(center, leaving)?;
    Some(to_attacker.angle(&to_leaving).to_degrees())
}

/// Angle in degrees between the bond to `attacker` and a direction given in
/// world space.
pub fn angle_to_axis_degrees(
    center: &Point3<f64>,
    attacker: &Point3<f64>,
    axis: &Vector3<f64>,
) -> Option<f64> {
    let to_attacker = direction_between(center, attacker)?;
    let axis = axis.try_normalize(DEGENERATE_LENGTH)?;
    Some(to_attacker.angle(&axis).to_degrees())
}
