use crate::{
    hit::{Hit, Record},
    Aabb, MaterialId, Ray,
};
use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f64>,
    pub radius: f64,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: Ray, t_min: f64, t_max: f64) -> Option<Record> {
        let interval = t_min..=t_max;
        let oc = ray.origin - self.center;
        let a = ray.direction.norm_squared();
        let half_b = ray.direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let d = (half_b * half_b) - (a * c);

        if d < 0.0 {
            return None;
        }

        // Near root first; the far root covers rays starting inside. NaN
        // roots from a zero-length direction fail `contains`.
        let mut root = (-half_b - d.sqrt()) / a;

        if !interval.contains(&root) {
            root = (-half_b + d.sqrt()) / a;
            if !interval.contains(&root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;
        Some(Record::new(ray, root, point, outward_normal, self.material))
    }

    fn bounding_box(&self, _time0: f64, _time1: f64) -> Option<Aabb> {
        let half = Vector3::repeat(self.radius);
        Some(Aabb::new(self.center - half, self.center + half))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, MaterialTable};

    fn sphere(center: Vector3<f64>, radius: f64) -> Sphere {
        let material = MaterialTable::new().insert(Material::Diffuse {
            albedo: Vector3::repeat(0.5),
        });
        Sphere::new(center, radius, material)
    }

    #[test]
    fn hit_from_outside_is_front_face() {
        let s = sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        let record = s.hit(ray, 0.0, f64::INFINITY).unwrap();
        assert_eq!(record.t, 0.5);
        assert_eq!(record.point, Vector3::new(0.0, 0.0, -0.5));
        assert_eq!(record.normal, Vector3::new(0.0, 0.0, 1.0));
        assert!(record.front_face);
        assert_eq!(record.material, s.material);
    }

    #[test]
    fn hit_from_inside_reports_exit() {
        let s = sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, -1.0));
        let record = s.hit(ray, 0.0, f64::INFINITY).unwrap();
        assert_eq!(record.t, 0.5);
        assert_eq!(record.point, Vector3::new(0.0, 0.0, -1.5));
        assert_eq!(record.normal, Vector3::new(0.0, 0.0, 1.0));
        assert!(!record.front_face);
    }

    #[test]
    fn unnormalized_direction_scales_t() {
        let s = sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -2.0));
        let record = s.hit(ray, 0.0, f64::INFINITY).unwrap();
        assert_eq!(record.t, 0.25);
        assert_eq!(record.point, Vector3::new(0.0, 0.0, -0.5));
    }

    #[test]
    fn miss_beside_sphere() {
        let s = sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(s.hit(ray, 0.0, f64::INFINITY), None);
    }

    #[test]
    fn sphere_behind_ray_misses() {
        let s = sphere(Vector3::new(0.0, 0.0, 1.0), 0.5);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(s.hit(ray, 0.0, f64::INFINITY), None);
    }

    #[test]
    fn interval_selects_root() {
        let s = sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(s.hit(ray, 0.6, f64::INFINITY).unwrap().t, 1.5);
        assert_eq!(s.hit(ray, 0.0, 0.4), None);
        assert_eq!(s.hit(ray, 0.6, 1.4), None);
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let s = sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(s.hit(ray, 0.5, 0.5).unwrap().t, 0.5);
        assert_eq!(s.hit(ray, 0.0, 0.5).unwrap().t, 0.5);
    }

    #[test]
    fn zero_direction_never_hits() {
        let s = sphere(Vector3::new(0.0, 0.0, -1.0), 0.5);
        let outside = Ray::new(Vector3::zeros(), Vector3::zeros());
        let inside = Ray::new(Vector3::new(0.0, 0.0, -1.0), Vector3::zeros());
        assert_eq!(s.hit(outside, 0.0, f64::INFINITY), None);
        assert_eq!(s.hit(inside, 0.0, f64::INFINITY), None);
    }

    #[test]
    fn bounding_box_is_center_plus_minus_radius() {
        let s = sphere(Vector3::new(1.0, 2.0, 3.0), 0.5);
        let aabb = s.bounding_box(0.0, 1.0).unwrap();
        assert_eq!(aabb.minimum, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.maximum, Vector3::new(1.5, 2.5, 3.5));
    }
}
