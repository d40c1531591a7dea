//! The few vector operations cgmath does not provide in the form the physics needs

use super::*;

/// Normalizes the vector, or returns +X if it is too short to have a meaningful direction
pub fn safe_normalize(v: Vector3<f64>) -> Vector3<f64> {
    let len = v.magnitude();
    if len < EPSILON {
        Vector3::unit_x()
    } else {
        v / len
    }
}

/// Reflects v about the plane with the given unit normal: v - 2(v·n)n
pub fn reflect(v: Vector3<f64>, normal: Vector3<f64>) -> Vector3<f64> {
    v - normal * (2.0 * v.dot(normal))
}
