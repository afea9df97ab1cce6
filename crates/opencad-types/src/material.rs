use serde::{Deserialize, Serialize};

use crate::boxes::Dimensions;

const INCH: f64 = 0.0254;

/// How a material is counted when it is bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    BoardFeet,
    SquareFeet,
    CubicFeet,
    LinearFeet,
    Count,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub unit_type: UnitType,
    /// Display color as `#rrggbb`.
    pub color: String,
    pub default_dimensions: Dimensions,
}

impl Material {
    /// Catalog entry with its stock size given in inches.
    fn stock(id: &str, name: &str, unit_type: UnitType, color: &str, inches: [f64; 3]) -> Self {
        let [w, h, d] = inches;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            unit_type,
            color: color.to_string(),
            default_dimensions: Dimensions::new(w * INCH, h * INCH, d * INCH),
        }
    }
}

/// The built-in material catalog. Order matters: it breaks ties when new
/// boxes are spread across materials.
#[rustfmt::skip]
pub fn default_materials() -> Vec<Material> {
    use UnitType::*;
    vec![
        Material::stock("2x4-lumber",   "2×4 Lumber",    BoardFeet,  "#E8C9A0", [1.5, 3.5, 96.0]),
        Material::stock("2x6-lumber",   "2×6 Lumber",    BoardFeet,  "#DEBB9B", [1.5, 5.5, 96.0]),
        Material::stock("4x4-post",     "4×4 Post",      BoardFeet,  "#D4AD8C", [3.5, 3.5, 96.0]),
        Material::stock("plywood-3-4",  "Plywood 3/4\"", SquareFeet, "#C9A96E", [48.0, 0.75, 96.0]),
        Material::stock("plywood-1-2",  "Plywood 1/2\"", SquareFeet, "#D4B07A", [48.0, 0.5, 96.0]),
        Material::stock("cedar-boards", "Cedar Boards",  SquareFeet, "#E0B88A", [0.75, 5.5, 96.0]),
        Material::stock("concrete",     "Concrete",      CubicFeet,  "#C8C8C8", [12.0, 12.0, 12.0]),
        Material::stock("insulation",   "Insulation",    SquareFeet, "#F5E6C8", [3.5, 15.0, 93.0]),
        Material::stock("trim",         "Trim",          LinearFeet, "#EDDCC8", [0.75, 2.5, 96.0]),
        Material::stock("heater",       "Sauna Heater",  Count,      "#7A7A7A", [20.0, 20.0, 20.0]),
    ]
}
