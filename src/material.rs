use std::ops::Index;

use nalgebra::Vector3;

/// Surface description consumed by shading. Intersection never reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Diffuse {
        albedo: Vector3<f64>,
    },
    Metal {
        albedo: Vector3<f64>,
        fuzz: f64,
    },
    Glass {
        refractive_index: f64,
    },
    Light {
        emission: Vector3<f64>,
        intensity: f64,
    },
}

/// Handle into a [`MaterialTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaterialId(usize);

impl MaterialId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every material of a scene; shapes refer to entries by [`MaterialId`].
#[derive(Clone, Debug, Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.materials
            .iter()
            .enumerate()
            .map(|(i, material)| (MaterialId(i), material))
    }
}

impl Index<MaterialId> for MaterialTable {
    type Output = Material;

    fn index(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }
}
