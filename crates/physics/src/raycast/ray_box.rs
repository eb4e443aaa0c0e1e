//! Ray versus axis-aligned box intersection using the slab method.

use crate::types::{BoxCollider, Ray};

/// Directions with a smaller axis component are treated as parallel to
/// that axis' slabs.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Distance along `ray` to the surface of the axis-aligned box `aabb`.
///
/// Returns `None` when the ray misses, the box lies behind the origin,
/// or the origin is inside the box.
#[must_use]
pub fn ray_box_distance(ray: Ray, aabb: &BoxCollider) -> Option<f32> {
    let min = aabb.center - aabb.half_extents;
    let max = aabb.center + aabb.half_extents;

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let (o, d, lo, hi) = match axis {
            0 => (ray.origin.x, ray.dir.x, min.x, max.x),
            1 => (ray.origin.y, ray.dir.y, min.y, max.y),
            _ => (ray.origin.z, ray.dir.z, min.z, max.z),
        };
        if d.abs() < PARALLEL_EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t1, t2) = {
            let a = (lo - o) * inv;
            let b = (hi - o) * inv;
            if a < b { (a, b) } else { (b, a) }
        };
        t_enter = t_enter.max(t1);
        t_exit = t_exit.min(t2);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        // Box entirely behind the origin.
        return None;
    }
    if t_enter < 0.0 {
        // Origin inside the box.
        return None;
    }
    Some(t_enter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColliderTag, Vec3};

    fn x_ray(origin: Vec3) -> Ray {
        Ray::new(origin, Vec3::new(1.0, 0.0, 0.0))
    }

    fn unit_box_at(x: f32) -> BoxCollider {
        BoxCollider::new(
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            ColliderTag::Wall,
        )
    }

    #[test]
    fn ray_hits_box_face() {
        let t = ray_box_distance(x_ray(Vec3::ZERO), &unit_box_at(4.0)).unwrap();
        assert!((t - 3.0).abs() < 1e-5, "t={t}");
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        // Parallel to the box faces, offset above the y slab.
        let ray = x_ray(Vec3::new(0.0, 5.0, 0.0));
        assert!(ray_box_distance(ray, &unit_box_at(4.0)).is_none());
    }

    #[test]
    fn parallel_ray_inside_slab_hits() {
        let ray = x_ray(Vec3::new(0.0, 0.5, 0.5));
        let t = ray_box_distance(ray, &unit_box_at(4.0)).unwrap();
        assert!((t - 3.0).abs() < 1e-5, "t={t}");
    }

    #[test]
    fn origin_inside_box_reports_no_hit() {
        let aabb = BoxCollider::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0), ColliderTag::Wall);
        assert!(ray_box_distance(x_ray(Vec3::ZERO), &aabb).is_none());
    }

    #[test]
    fn box_behind_origin_is_ignored() {
        assert!(ray_box_distance(x_ray(Vec3::ZERO), &unit_box_at(-4.0)).is_none());
    }

    #[test]
    fn diagonal_ray_enters_box_corner_region() {
        let aabb = BoxCollider::new(
            Vec3::new(3.0, 0.0, 3.0),
            Vec3::new(1.0, 1.0, 1.0),
            ColliderTag::Block,
        );
        let inv_sqrt2 = 1.0 / 2.0_f32.sqrt();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(inv_sqrt2, 0.0, inv_sqrt2));
        let t = ray_box_distance(ray, &aabb).unwrap();
        // Entry face at x=2 along the diagonal: t = 2 * sqrt(2).
        assert!((t - 2.0 * 2.0_f32.sqrt()).abs() < 1e-4, "t={t}");
    }
}
