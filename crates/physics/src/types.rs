use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Returns a unit-length copy, or `Vec3::ZERO` for near-zero vectors.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 1e-6 {
            self / len
        } else {
            Self::ZERO
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Kinematic body state: position and velocity, nothing else.
///
/// The navigation task drives bodies directly (desired velocity in,
/// position out) rather than through forces, so mass and material
/// properties are not modeled.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Body {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Body {
    #[must_use]
    pub const fn new(pos: Vec3, vel: Vec3) -> Self {
        Self { pos, vel }
    }

    /// Body at rest at the given position.
    #[must_use]
    pub const fn at(pos: Vec3) -> Self {
        Self::new(pos, Vec3::ZERO)
    }

    /// One explicit Euler step: `pos += vel * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Marker carried by scene colliders, mirrored into ray hits.
///
/// Reward shaping distinguishes beacon blocks from boundary walls by
/// this tag alone; geometry is irrelevant to the reward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColliderTag {
    Block,
    Wall,
}

/// Axis-aligned box collider.
#[derive(Copy, Clone, Debug)]
pub struct BoxCollider {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub tag: ColliderTag,
}

impl BoxCollider {
    #[must_use]
    pub const fn new(center: Vec3, half_extents: Vec3, tag: ColliderTag) -> Self {
        Self { center, half_extents, tag }
    }
}

/// Sphere collider.
#[derive(Copy, Clone, Debug)]
pub struct SphereCollider {
    pub center: Vec3,
    pub radius: f32,
    pub tag: ColliderTag,
}

impl SphereCollider {
    #[must_use]
    pub const fn new(center: Vec3, radius: f32, tag: ColliderTag) -> Self {
        Self { center, radius, tag }
    }
}

/// A ray with origin and direction. Direction is expected to be unit
/// length; intersection distances are measured in multiples of it.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[must_use]
    pub const fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

/// Nearest intersection reported by a ray query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub tag: ColliderTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn length_and_distance() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
        let d = Vec3::ZERO.distance(Vec3::new(0.0, 0.0, 2.0));
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_handles_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        let n = Vec3::new(0.0, 10.0, 0.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn euler_integration_moves_body() {
        let mut body = Body::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -2.0));
        body.integrate(0.5);
        assert_eq!(body.pos, Vec3::new(0.5, 0.0, -1.0));
    }
}
