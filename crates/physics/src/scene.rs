//! # Scene
//!
//! A static collection of tagged colliders and the nearest-hit
//! [`RayQuery`] implementation over it.
//!
//! Scenes never move: agents and their dynamics live outside, and only
//! consult the scene through ray casts.

use crate::raycast::{ray_box_distance, ray_sphere_distance, RayQuery};
use crate::types::{BoxCollider, ColliderTag, Ray, RayHit, SphereCollider, Vec3};

/// Static collider set queried by environments.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub boxes: Vec<BoxCollider>,
    pub spheres: Vec<SphereCollider>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an axis-aligned box collider.
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3, tag: ColliderTag) {
        self.boxes.push(BoxCollider::new(center, half_extents, tag));
    }

    /// Adds a sphere collider.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, tag: ColliderTag) {
        self.spheres.push(SphereCollider::new(center, radius, tag));
    }

    /// Number of colliders of either shape.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len() + self.spheres.len()
    }

    /// True when the scene holds no colliders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty() && self.spheres.is_empty()
    }

    /// Builds a square arena bounded by four wall colliders.
    ///
    /// The playable region spans `[-extent, extent]` on x and z. Walls
    /// overlap at the corners so diagonal rays cannot slip through.
    #[must_use]
    pub fn walled_square(extent: f32, wall_height: f32, wall_thickness: f32) -> Self {
        let mut scene = Self::new();
        let offset = extent + wall_thickness / 2.0;
        let half_len = extent + wall_thickness;
        let h = wall_height / 2.0;
        let t = wall_thickness / 2.0;

        scene.add_box(
            Vec3::new(offset, 0.0, 0.0),
            Vec3::new(t, h, half_len),
            ColliderTag::Wall,
        );
        scene.add_box(
            Vec3::new(-offset, 0.0, 0.0),
            Vec3::new(t, h, half_len),
            ColliderTag::Wall,
        );
        scene.add_box(
            Vec3::new(0.0, 0.0, offset),
            Vec3::new(half_len, h, t),
            ColliderTag::Wall,
        );
        scene.add_box(
            Vec3::new(0.0, 0.0, -offset),
            Vec3::new(half_len, h, t),
            ColliderTag::Wall,
        );
        scene
    }
}

impl RayQuery for Scene {
    fn cast(&self, ray: Ray, max_dist: f32) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;

        let mut consider = |distance: f32, tag: ColliderTag| {
            if distance > max_dist {
                return;
            }
            match nearest {
                Some(hit) if hit.distance <= distance => {}
                _ => nearest = Some(RayHit { distance, tag }),
            }
        };

        for aabb in &self.boxes {
            if let Some(t) = ray_box_distance(ray, aabb) {
                consider(t, aabb.tag);
            }
        }
        for sphere in &self.spheres {
            if let Some(t) = ray_sphere_distance(ray, sphere) {
                consider(t, sphere.tag);
            }
        }
        nearest
    }
}
