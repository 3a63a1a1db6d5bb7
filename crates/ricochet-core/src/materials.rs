//! Physical materials referenced by hit results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::PhysMaterialId;

/// Surface response parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalMaterial {
    pub name: String,
    /// Fraction of speed retained after a bounce.
    pub restitution: f32,
}

/// Registry of materials. A [`PhysMaterialId`] is valid while its entry exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialLibrary {
    materials: HashMap<PhysMaterialId, PhysicalMaterial>,
    next_id: u32,
}

impl PhysicalMaterial {
    pub fn new(name: impl Into<String>, restitution: f32) -> Self {
        Self {
            name: name.into(),
            restitution,
        }
    }
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material and return its handle.
    pub fn insert(&mut self, material: PhysicalMaterial) -> PhysMaterialId {
        let id = PhysMaterialId(self.next_id);
        self.next_id += 1;
        self.materials.insert(id, material);
        id
    }

    /// Remove a material. Handles to it become invalid.
    pub fn remove(&mut self, id: PhysMaterialId) -> Option<PhysicalMaterial> {
        self.materials.remove(&id)
    }

    pub fn get(&self, id: PhysMaterialId) -> Option<&PhysicalMaterial> {
        self.materials.get(&id)
    }

    /// Restitution for an optional handle; `None` if absent or no longer valid.
    pub fn restitution(&self, id: Option<PhysMaterialId>) -> Option<f32> {
        id.and_then(|id| self.get(id)).map(|m| m.restitution)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
