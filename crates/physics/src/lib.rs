#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Arena Physics
//!
//! A small kinematic physics layer for episodic navigation arenas.
//!
//! This crate provides the geometric backbone for the reinforcement
//! learning environments built on top of it. It deliberately skips
//! forces, contacts, and constraint solving: agents in these arenas are
//! velocity-driven points, and the only spatial queries they need are
//! distances between positions and ray casts against static scenery.
//!
//! ## Key Components
//!
//! -   **Math and Bodies:** [`Vec3`] and the kinematic [`Body`] live in
//!     the [`types`] module, alongside the tagged collider shapes
//!     ([`BoxCollider`], [`SphereCollider`]) and ray types.
//! -   **Ray Casting:** The [`raycast`] module implements entering-hit
//!     intersection tests and defines [`RayQuery`], the trait through
//!     which environments scan their surroundings.
//! -   **Scenes:** [`Scene`] in the [`scene`] module collects colliders
//!     and answers nearest-hit queries. [`Scene::walled_square`] builds
//!     the bounded square arena most environments run in.
//!
//! ## Usage
//!
//! A typical caller assembles a scene once and then casts rays against
//! it every step:
//!
//! ```rust,ignore
//! use physics::{ColliderTag, Ray, RayQuery, Scene, Vec3};
//!
//! let mut scene = Scene::walled_square(4.0, 2.0, 0.5);
//! scene.add_box(Vec3::new(2.0, 0.0, 2.0), Vec3::new(0.5, 0.5, 0.5), ColliderTag::Block);
//!
//! let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
//! if let Some(hit) = scene.cast(ray, 5.0) {
//!     println!("struck a {:?} at {}", hit.tag, hit.distance);
//! }
//! ```

pub mod raycast;
pub mod scene;
pub mod types;

pub use raycast::{ray_box_distance, ray_sphere_distance, RayQuery};
pub use scene::Scene;
pub use types::{Body, BoxCollider, ColliderTag, Ray, RayHit, SphereCollider, Vec3};
