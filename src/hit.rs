use crate::{Aabb, MaterialId, Ray};
use nalgebra::Vector3;

/// Anything a ray can strike.
///
/// Implementations are shared read-only between query threads once a scene
/// is built, hence the `Send + Sync` bound.
pub trait Hit: Send + Sync {
    /// Nearest intersection with `t_min <= t <= t_max`, or `None` when the
    /// ray misses inside that interval.
    fn hit(&self, ray: Ray, t_min: f64, t_max: f64) -> Option<Record>;

    /// Box enclosing the shape over `time0..time1`. `None` means the shape
    /// cannot be bounded and must be kept out of any hierarchy.
    fn bounding_box(&self, time0: f64, time1: f64) -> Option<Aabb>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub point: Vector3<f64>,
    /// Unit normal facing against the incoming ray.
    pub normal: Vector3<f64>,
    pub t: f64,
    pub front_face: bool,
    pub material: MaterialId,
}

impl Record {
    /// Orients `outward_normal` against `ray`. A non-negative dot product is
    /// a back face, so grazing hits count as inside.
    pub fn new(
        ray: Ray,
        t: f64,
        point: Vector3<f64>,
        outward_normal: Vector3<f64>,
        material: MaterialId,
    ) -> Self {
        let front_face = ray.direction.dot(&outward_normal) < 0.0;
        Self {
            point,
            normal: if front_face {
                outward_normal
            } else {
                -outward_normal
            },
            t,
            front_face,
            material,
        }
    }
}
