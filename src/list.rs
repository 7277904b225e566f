use std::{fmt, sync::Arc};

use crate::{
    hit::{Hit, Record},
    Aabb, Ray,
};

/// Flat, ordered collection of shapes answering queries as a single shape.
#[derive(Clone, Default)]
pub struct HitList {
    objects: Vec<Arc<dyn Hit>>,
}

impl HitList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(object: Arc<dyn Hit>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    pub fn add(&mut self, object: Arc<dyn Hit>) {
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Arc<dyn Hit>] {
        &self.objects
    }
}

impl Hit for HitList {
    /// Each member is queried up to the closest hit found so far, so a later
    /// member only wins when it is at least as close.
    fn hit(&self, ray: Ray, t_min: f64, t_max: f64) -> Option<Record> {
        self.objects.iter().fold(None, |closest, object| {
            let closest_so_far = closest.map_or(t_max, |record: Record| record.t);
            object.hit(ray, t_min, closest_so_far).or(closest)
        })
    }

    /// Union of every member's box. Empty lists and lists holding any
    /// unbounded member have no box.
    fn bounding_box(&self, time0: f64, time1: f64) -> Option<Aabb> {
        let (first, rest) = self.objects.split_first()?;
        rest.iter()
            .try_fold(first.bounding_box(time0, time1)?, |aabb, object| {
                Some(aabb.union(&object.bounding_box(time0, time1)?))
            })
    }
}

impl FromIterator<Arc<dyn Hit>> for HitList {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Hit>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Extend<Arc<dyn Hit>> for HitList {
    fn extend<I: IntoIterator<Item = Arc<dyn Hit>>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}

impl fmt::Debug for HitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitList")
            .field("len", &self.objects.len())
            .finish()
    }
}
