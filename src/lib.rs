//! Ray–geometry intersection: rays, bounding boxes, spheres and a flat
//! scene aggregate behind one [`Hit`] trait.

mod aabb;
mod error;
mod hit;
mod list;
mod material;
mod ray;
pub mod scene;
mod sphere;
mod texture;

pub use aabb::Aabb;
pub use error::SceneError;
pub use hit::{Hit, Record};
pub use list::HitList;
pub use material::{Material, MaterialId, MaterialTable};
pub use ray::Ray;
pub use scene::Scene;
pub use sphere::Sphere;
pub use texture::{Checker, SolidColor, Texture};
