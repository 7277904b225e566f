//! JSON scene descriptions.
//!
//! A description names its materials and lists primitives that refer to
//! them by name:
//!
//! ```json
//! {
//!   "materials": { "ground": { "type": "Diffuse", "albedo": [0.5, 0.5, 0.5] } },
//!   "primitives": [
//!     { "type": "Sphere", "center": [0, -100.5, -1], "radius": 100, "material": "ground" }
//!   ]
//! }
//! ```

use std::{collections::BTreeMap, fs, path::Path, sync::Arc};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Hit, HitList, Material, MaterialId, MaterialTable, SceneError, Sphere};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialData {
    Diffuse {
        albedo: [f64; 3],
    },
    Metal {
        albedo: [f64; 3],
        #[serde(default)]
        fuzz: f64,
    },
    Glass {
        refractive_index: f64,
    },
    Light {
        emission: [f64; 3],
        #[serde(default = "unit_intensity")]
        intensity: f64,
    },
}

fn unit_intensity() -> f64 {
    1.0
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        match data {
            MaterialData::Diffuse { albedo } => Material::Diffuse {
                albedo: albedo.into(),
            },
            MaterialData::Metal { albedo, fuzz } => Material::Metal {
                albedo: albedo.into(),
                fuzz,
            },
            MaterialData::Glass { refractive_index } => Material::Glass { refractive_index },
            MaterialData::Light {
                emission,
                intensity,
            } => Material::Light {
                emission: emission.into(),
                intensity,
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: [f64; 3],
        radius: f64,
        material: String,
    },
}

impl PrimitiveData {
    pub fn transform(
        self,
        material_mapping: &BTreeMap<String, MaterialId>,
    ) -> Result<Arc<dyn Hit>, SceneError> {
        match self {
            Self::Sphere {
                center,
                radius,
                material,
            } => {
                let id = *material_mapping
                    .get(&material)
                    .ok_or(SceneError::UnknownMaterial(material))?;
                Ok(Arc::new(Sphere::new(Vector3::from(center), radius, id)))
            }
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneData {
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialData>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveData>,
}

/// A finished scene: the material table and the shapes referring into it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub materials: MaterialTable,
    pub world: HitList,
}

impl Scene {
    pub fn from_json(input: &str) -> Result<Self, SceneError> {
        serde_json::from_str::<SceneData>(input)?.try_into()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = input.len(), "read scene file");
        Self::from_json(&input)
    }
}

impl TryFrom<SceneData> for Scene {
    type Error = SceneError;

    /// Ids follow the sorted material names, so the same file always yields
    /// the same handles.
    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        let mut materials = MaterialTable::new();
        let material_mapping: BTreeMap<String, MaterialId> = data
            .materials
            .into_iter()
            .map(|(name, material)| (name, materials.insert(material.into())))
            .collect();

        let world = data
            .primitives
            .into_iter()
            .map(|primitive| primitive.transform(&material_mapping))
            .collect::<Result<HitList, _>>()?;

        debug!(
            materials = materials.len(),
            primitives = world.len(),
            "built scene"
        );
        Ok(Scene { materials, world })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ray;

    const SCENE: &str = r#"{
        "materials": {
            "ground": { "type": "Diffuse", "albedo": [0.5, 0.5, 0.5] },
            "glass": { "type": "Glass", "refractive_index": 1.5 },
            "lamp": { "type": "Light", "emission": [1, 1, 1] }
        },
        "primitives": [
            { "type": "Sphere", "center": [0, -100.5, -1], "radius": 100, "material": "ground" },
            { "type": "Sphere", "center": [0, 0, -1], "radius": 0.5, "material": "glass" }
        ]
    }"#;

    #[test]
    fn loads_literal_scene() {
        let scene = Scene::from_json(SCENE).unwrap();
        assert_eq!(scene.materials.len(), 3);
        assert_eq!(scene.world.len(), 2);

        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
        let record = scene.world.hit(ray, 0.001, f64::INFINITY).unwrap();
        assert_eq!(record.t, 0.5);
        assert_eq!(
            scene.materials[record.material],
            Material::Glass {
                refractive_index: 1.5
            }
        );
    }

    #[test]
    fn material_ids_follow_sorted_names() {
        let scene = Scene::from_json(SCENE).unwrap();
        let names: Vec<_> = scene.materials.iter().map(|(_, material)| *material).collect();
        assert_eq!(
            names,
            [
                Material::Glass {
                    refractive_index: 1.5
                },
                Material::Diffuse {
                    albedo: Vector3::repeat(0.5)
                },
                Material::Light {
                    emission: Vector3::repeat(1.0),
                    intensity: 1.0
                },
            ]
        );
    }

    #[test]
    fn unknown_material_is_reported() {
        let input = r#"{
            "primitives": [
                { "type": "Sphere", "center": [0, 0, 0], "radius": 1, "material": "chrome" }
            ]
        }"#;
        match Scene::from_json(input) {
            Err(SceneError::UnknownMaterial(name)) => assert_eq!(name, "chrome"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Scene::from_json("{ \"primitives\": [ { \"type\": \"Cube\" } ] }"),
            Err(SceneError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Scene::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn empty_description_is_an_empty_scene() {
        let scene = Scene::from_json("{}").unwrap();
        assert!(scene.materials.is_empty());
        assert!(scene.world.is_empty());
        assert_eq!(scene.world.bounding_box(0.0, 1.0), None);
    }
}
