//! Ray-sphere intersection via the quadratic form.

use crate::types::{Ray, SphereCollider};

/// Distance along `ray` to the surface of `sphere`.
///
/// Returns `None` when the ray misses, points away from the sphere, or
/// starts inside it.
#[must_use]
pub fn ray_sphere_distance(ray: Ray, sphere: &SphereCollider) -> Option<f32> {
    let oc = ray.origin - sphere.center;
    let c = oc.dot(oc) - sphere.radius * sphere.radius;
    if c <= 0.0 {
        // Origin on or inside the surface.
        return None;
    }
    let b = oc.dot(ray.dir);
    if b >= 0.0 {
        // Pointing away from the sphere center.
        return None;
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
