use std::sync::Arc;

use nalgebra::Vector3;

/// Color lookup used by shading at a hit point.
pub trait Texture: Send + Sync {
    fn value(&self, u: f64, v: f64, point: &Vector3<f64>) -> Vector3<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidColor(pub Vector3<f64>);

impl Texture for SolidColor {
    fn value(&self, _u: f64, _v: f64, _point: &Vector3<f64>) -> Vector3<f64> {
        self.0
    }
}

/// 3-D checker pattern alternating between two textures in world space.
#[derive(Clone)]
pub struct Checker {
    pub even: Arc<dyn Texture>,
    pub odd: Arc<dyn Texture>,
}

impl Checker {
    pub fn new(even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self { even, odd }
    }

    pub fn from_colors(even: Vector3<f64>, odd: Vector3<f64>) -> Self {
        Self::new(Arc::new(SolidColor(even)), Arc::new(SolidColor(odd)))
    }
}

impl Texture for Checker {
    fn value(&self, u: f64, v: f64, point: &Vector3<f64>) -> Vector3<f64> {
        let sines = (10.0 * point.x).sin() * (10.0 * point.y).sin() * (10.0 * point.z).sin();
        if sines < 0.0 {
            self.odd.value(u, v, point)
        } else {
            self.even.value(u, v, point)
        }
    }
}
