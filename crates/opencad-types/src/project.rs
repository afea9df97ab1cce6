use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::boxes::BoxSolid;

/// Display unit preference. Stored values are always meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub boxes: Vec<BoxSolid>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_system: UnitSystem::default(),
            boxes: Vec::new(),
        }
    }

    pub fn find_box(&self, id: Uuid) -> Option<&BoxSolid> {
        self.boxes.iter().find(|b| b.id == id)
    }
}

/// A saved group of boxes that can be placed into projects repeatedly.
///
/// Placing a template copies its boxes; the copies never share ids with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    pub id: Uuid,
    pub name: String,
    pub boxes: Vec<BoxSolid>,
}

impl ComponentTemplate {
    pub fn new(name: impl Into<String>, boxes: Vec<BoxSolid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            boxes,
        }
    }
}
