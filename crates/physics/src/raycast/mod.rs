//! # Ray Intersection
//!
//! Analytic ray tests against the collider shapes in [`crate::types`],
//! plus the [`RayQuery`] trait that environments use to scan their
//! surroundings without owning the scene geometry.
//!
//! All tests report entering hits only: a ray that starts inside a
//! collider misses it. Distances are in multiples of the ray direction,
//! which callers keep at unit length.

mod ray_box;
mod ray_sphere;

pub use ray_box::*;
pub use ray_sphere::*;

use crate::types::{Ray, RayHit};

/// Anything that can answer nearest-hit ray queries.
///
/// Environments take this as a type parameter so tests can substitute
/// scripted responses for real geometry.
pub trait RayQuery {
    /// Casts `ray` and returns the nearest entering hit within
    /// `max_dist`, or `None` if nothing is struck.
    fn cast(&self, ray: Ray, max_dist: f32) -> Option<RayHit>;
}
