use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
    pub time: f64,
}

impl Ray {
    pub fn new(origin: Vector3<f64>, direction: Vector3<f64>) -> Self {
        Self::with_time(origin, direction, 0.0)
    }

    pub fn with_time(origin: Vector3<f64>, direction: Vector3<f64>, time: f64) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    /// Point at parameter `t`. `direction` is not assumed to be unit length.
    pub fn at(&self, t: f64) -> Vector3<f64> {
        self.origin + t * self.direction
    }
}
