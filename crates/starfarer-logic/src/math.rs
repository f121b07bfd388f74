//! Math and randomness helpers.
//!
//! Every draw takes the random source explicitly; nothing here touches a
//! thread-local generator.

use glam::Vec3;
use rand::Rng;
use uuid::Uuid;

/// Uniform float in `[min, max)`. Returns `min` for an empty range.
pub fn random_float(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Uniform integer in `[min, max]` (both ends inclusive).
pub fn random_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform index into a table of `len` entries.
///
/// # Panics
///
/// Panics if `len` is zero. Callers index fixed tables or check for an empty
/// planet list first.
pub fn random_index(rng: &mut impl Rng, len: usize) -> usize {
    assert!(len > 0, "random_index on empty table");
    rng.gen_range(0..len)
}

/// Bernoulli draw: true when a uniform roll in `[0, 1)` exceeds `threshold`.
pub fn roll_above(rng: &mut impl Rng, threshold: f32) -> bool {
    rng.gen::<f32>() > threshold
}

/// Version-4 UUID built from the game RNG, so seeded runs get stable ids.
pub fn generate_uuid(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Euclidean distance between two points.
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Limit `value` to `[min, max]`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp(t, 0.0, 1.0)
}

pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Distance along a ray to the first point on a sphere.
///
/// Returns `Some(0.0)` when the origin is already inside the sphere and
/// `None` when the ray misses or the sphere lies behind the origin.
pub fn ray_sphere_intersection(
    origin: Vec3,
    direction: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO || radius <= 0.0 {
        return None;
    }

    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(0.0)
    } else {
        None
    }
}
