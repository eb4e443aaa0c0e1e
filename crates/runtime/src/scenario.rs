//! # Scenario Files
//!
//! JSON descriptions of an arena: environment tuning plus the scenery
//! the side scans run against. Missing sections fall back to the same
//! defaults the built-in arena uses.

use anyhow::Result;
use physics::{ColliderTag, Scene, Vec3};
use rl::AvoidConfig;
use serde::Deserialize;

/// Top level scenario document.
#[derive(Deserialize)]
pub struct Scenario {
    /// Environment tuning, all fields optional.
    #[serde(default)]
    pub env: AvoidConfig,
    /// Bounding walls, omitted for an open field.
    #[serde(default)]
    pub arena: Option<ArenaDef>,
    /// Extra scenery colliders.
    #[serde(default)]
    pub colliders: Vec<ColliderDef>,
}

/// Walled square boundary.
#[derive(Deserialize)]
pub struct ArenaDef {
    pub extent: f32,
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
}

fn default_wall_height() -> f32 {
    2.0
}

fn default_wall_thickness() -> f32 {
    0.5
}

/// One scenery collider.
#[derive(Deserialize)]
#[serde(tag = "shape")]
pub enum ColliderDef {
    #[serde(rename = "box")]
    Box {
        center: [f32; 3],
        half_extents: [f32; 3],
        tag: TagDef,
    },
    #[serde(rename = "sphere")]
    Sphere {
        center: [f32; 3],
        radius: f32,
        tag: TagDef,
    },
}

/// Scan tag as written in scenario files.
#[derive(Deserialize, Copy, Clone, Debug)]
pub enum TagDef {
    #[serde(rename = "block")]
    Block,
    #[serde(rename = "wall")]
    Wall,
}

impl From<TagDef> for ColliderTag {
    fn from(tag: TagDef) -> Self {
        match tag {
            TagDef::Block => ColliderTag::Block,
            TagDef::Wall => ColliderTag::Wall,
        }
    }
}

fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

impl Scenario {
    /// Parses a scenario document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or names unknown
    /// shapes or tags.
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Splits the scenario into environment tuning and built scenery.
    #[must_use]
    pub fn into_parts(self) -> (AvoidConfig, Scene) {
        let mut scene = match &self.arena {
            Some(arena) => {
                Scene::walled_square(arena.extent, arena.wall_height, arena.wall_thickness)
            }
            None => Scene::new(),
        };
        for collider in self.colliders {
            match collider {
                ColliderDef::Box {
                    center,
                    half_extents,
                    tag,
                } => scene.add_box(vec3(center), vec3(half_extents), tag.into()),
                ColliderDef::Sphere {
                    center,
                    radius,
                    tag,
                } => scene.add_sphere(vec3(center), radius, tag.into()),
            }
        }
        (self.env, scene)
    }
}
