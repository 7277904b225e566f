use nalgebra::Vector3;

use crate::Ray;

/// Axis-aligned box spanning `minimum..=maximum` on every axis.
///
/// A box whose minimum exceeds its maximum on some axis contains no points,
/// but the slab test does not reject it, so only build boxes from geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub minimum: Vector3<f64>,
    pub maximum: Vector3<f64>,
}

impl Aabb {
    pub fn new(minimum: Vector3<f64>, maximum: Vector3<f64>) -> Self {
        Self { minimum, maximum }
    }

    /// Slab test against `ray` restricted to `t_min..t_max`.
    ///
    /// A zero direction component divides to an infinity and so leaves that
    /// axis unconstrained when the origin lies between its planes.
    pub fn hit(&self, ray: Ray, mut t_min: f64, mut t_max: f64) -> bool {
        for axis in 0..3 {
            let near = (self.minimum[axis] - ray.origin[axis]) / ray.direction[axis];
            let far = (self.maximum[axis] - ray.origin[axis]) / ray.direction[axis];
            let t0 = near.min(far);
            let t1 = near.max(far);
            t_min = t0.max(t_min);
            t_max = t1.min(t_max);
            if t_max <= t_min {
                return false;
            }
        }
        true
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(
            self.minimum.zip_map(&other.minimum, f64::min),
            self.maximum.zip_map(&other.maximum, f64::max),
        )
    }

    pub fn extent(&self) -> Vector3<f64> {
        self.maximum - self.minimum
    }

    pub fn surface_area(&self) -> f64 {
        let e = self.extent();
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }

    /// Index of the widest axis. Comparisons are strict, so an axis only wins
    /// over a later one when it is strictly wider.
    pub fn longest_axis(&self) -> usize {
        let e = self.extent();
        if e.x > e.y && e.x > e.z {
            0
        } else if e.y > e.z {
            1
        } else {
            2
        }
    }

    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        (0..3).all(|axis| (self.minimum[axis]..=self.maximum[axis]).contains(&point[axis]))
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.minimum[axis] > self.maximum[axis])
    }
}
