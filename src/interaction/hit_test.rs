//! Pointer rays and ray–sphere hit testing

use bevy::prelude::*;
use std::cmp::Ordering;

use crate::bodies::BodyId;

/// Ray in world space with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PickRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }
}

impl From<Ray3d> for PickRay {
    fn from(ray: Ray3d) -> Self {
        Self {
            origin: ray.origin,
            direction: *ray.direction,
        }
    }
}

/// Pointer ray through `cursor` (logical viewport pixels) for the given
/// camera, using the camera's own inverse projection.
pub fn pointer_ray(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor: Vec2,
) -> Option<PickRay> {
    camera
        .viewport_to_world(camera_transform, cursor)
        .ok()
        .map(PickRay::from)
}

/// Distance along `ray` to the first surface point of the sphere in front of
/// the origin, if any.
pub fn ray_sphere_distance(ray: &PickRay, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near > 0.0 {
        Some(near)
    } else if far > 0.0 {
        // Origin inside the sphere.
        Some(far)
    } else {
        None
    }
}

/// Nearest body hit by `ray`.
///
/// Equal distances resolve to the lexicographically smaller identifier.
pub fn hit_test(
    ray: &PickRay,
    spheres: impl IntoIterator<Item = (BodyId, Vec3, f32)>,
) -> Option<BodyId> {
    let mut best: Option<(BodyId, f32)> = None;

    for (id, center, radius) in spheres {
        let Some(t) = ray_sphere_distance(ray, center, radius) else {
            continue;
        };
        let replace = match best {
            None => true,
            Some((best_id, best_t)) => match t.partial_cmp(&best_t) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => id.as_str() < best_id.as_str(),
                _ => false,
            },
        };
        if replace {
            best = Some((id, t));
        }
    }

    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::SolarSystem;

    const EPSILON: f32 = 1e-4;

    fn ray_towards(eye: Vec3, target: Vec3) -> PickRay {
        PickRay::new(eye, target - eye).unwrap()
    }

    #[test]
    fn test_ray3d_conversion_keeps_direction() {
        let ray = Ray3d::new(Vec3::new(1.0, 2.0, 3.0), Dir3::NEG_Z);
        let pick = PickRay::from(ray);
        assert_eq!(pick.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pick.direction, Vec3::NEG_Z);
    }

    #[test]
    fn test_new_rejects_zero_direction() {
        assert!(PickRay::new(Vec3::ONE, Vec3::ZERO).is_none());
        let ray = PickRay::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)).unwrap();
        assert!((ray.direction.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ray_sphere_distance() {
        let ray = PickRay::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z).unwrap();
        let t = ray_sphere_distance(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < EPSILON);
        assert!(ray_sphere_distance(&ray, Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
        // Sphere behind the origin.
        assert!(ray_sphere_distance(&ray, Vec3::new(0.0, 0.0, 20.0), 2.0).is_none());
        // Origin inside the sphere.
        let inside = ray_sphere_distance(&ray, Vec3::new(0.0, 0.0, 10.0), 3.0).unwrap();
        assert!((inside - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_ray_through_body_center_hits_it() {
        let system = SolarSystem::default();
        // Looking straight down so no body hides another.
        let eye = Vec3::new(0.0, 150.0, 0.0);

        for id in BodyId::ALL {
            let ray = ray_towards(eye, system.get(id).render_position());
            assert_eq!(hit_test(&ray, system.bounding_spheres()), Some(id), "missed {}", id);
        }
    }

    #[test]
    fn test_ray_missing_everything() {
        let system = SolarSystem::default();
        let ray = PickRay::new(Vec3::new(0.0, 50.0, 0.0), Vec3::Y).unwrap();
        assert_eq!(hit_test(&ray, system.bounding_spheres()), None);
    }

    #[test]
    fn test_nearest_hit_wins() {
        let ray = PickRay::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z).unwrap();
        let spheres = [
            (BodyId::Sun, Vec3::ZERO, 5.0),
            (BodyId::Venus, Vec3::new(0.0, 0.0, 40.0), 1.0),
            (BodyId::Mars, Vec3::new(0.0, 0.0, 20.0), 1.0),
        ];
        assert_eq!(hit_test(&ray, spheres), Some(BodyId::Venus));
    }

    #[test]
    fn test_equidistant_tie_breaks_by_identifier() {
        let ray = PickRay::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z).unwrap();
        let spheres = [
            (BodyId::Venus, Vec3::ZERO, 1.0),
            (BodyId::Mars, Vec3::ZERO, 1.0),
            (BodyId::Earth, Vec3::ZERO, 1.0),
        ];
        assert_eq!(hit_test(&ray, spheres), Some(BodyId::Earth));
        let reversed = [spheres[2], spheres[1], spheres[0]];
        assert_eq!(hit_test(&ray, reversed), Some(BodyId::Earth));
    }
}
