//! Finding free space for new boxes and placed templates.
//!
//! Both packers scan along +X from the origin in fixed steps, keeping at
//! least `spacing` between the new footprint and every existing one. The
//! scan is deterministic and always terminates for a finite set of boxes.

use std::collections::HashMap;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use opencad_types::{BoxSolid, ComponentTemplate, Dimensions, Material, Point3d, Rotation3, Vec3};

use crate::config::PackerConfig;
use crate::geometry::bounds::BoundingBox;

/// First offset along X at which `candidate(offset)` clears all `occupied`.
fn scan_x(
    occupied: &[BoundingBox],
    step: f64,
    spacing: f64,
    candidate: impl Fn(f64) -> BoundingBox,
) -> f64 {
    let mut offset = 0.0;
    let mut steps = 0usize;
    while occupied
        .iter()
        .any(|other| candidate(offset).footprint_overlaps(other, spacing))
    {
        offset += step;
        steps += 1;
    }
    debug!(offset, steps, "found free slot");
    offset
}

fn occupied_bounds(boxes: &[BoxSolid]) -> Vec<BoundingBox> {
    boxes.iter().map(BoundingBox::of_box).collect()
}

/// Corner position for a new unrotated box of `dimensions`, centered on the
/// first free X offset, on the Z origin, resting on the ground.
#[instrument(skip_all, fields(existing = existing.len()))]
pub fn pack_single_default(
    existing: &[BoxSolid],
    dimensions: &Dimensions,
    config: &PackerConfig,
) -> Point3d {
    let half = dimensions.half_extents();
    let footprint_at = |x: f64| {
        BoundingBox::new(
            Point3d::new(x - half.x, 0.0, -half.z),
            Point3d::new(x + half.x, dimensions.height, half.z),
        )
    };
    let occupied = occupied_bounds(existing);
    let step = dimensions.width + config.spacing;
    let x = scan_x(&occupied, step, config.spacing, footprint_at);
    Point3d::new(x - half.x, 0.0, -half.z)
}

/// Copy `boxes` with fresh ids for every box and cut.
///
/// Boxes that shared a group keep sharing one, under a new group id.
pub fn remap_ids(boxes: &[BoxSolid]) -> Vec<BoxSolid> {
    let mut groups: HashMap<Uuid, Uuid> = HashMap::new();
    boxes
        .iter()
        .map(|b| {
            let mut copy = b.reissued();
            copy.group_id = b
                .group_id
                .map(|g| *groups.entry(g).or_insert_with(Uuid::new_v4));
            copy
        })
        .collect()
}

/// Relocate copies of `template_boxes` into free space beside `existing`.
///
/// The group's bounding box is scanned along X in steps of its own width,
/// then every copy is shifted so the group's min X lands on the free offset
/// and the group is centered on Z = 0. Heights are left unchanged.
#[instrument(skip_all, fields(members = template_boxes.len()))]
pub fn pack_template(
    template_boxes: &[BoxSolid],
    existing: &[BoxSolid],
    config: &PackerConfig,
) -> Vec<BoxSolid> {
    let Some(bounds) = template_boxes
        .iter()
        .map(BoundingBox::of_box)
        .reduce(|acc, b| acc.union(&b))
    else {
        return Vec::new();
    };

    let size = bounds.size();
    let footprint_at = |x: f64| {
        BoundingBox::new(
            Point3d::new(x, bounds.min.y, -size.z / 2.0),
            Point3d::new(x + size.x, bounds.max.y, size.z / 2.0),
        )
    };
    let occupied = occupied_bounds(existing);
    let step = size.x + config.spacing;
    let offset = scan_x(&occupied, step, config.spacing, footprint_at);

    let shift = Vec3::new(offset - bounds.min.x, 0.0, -bounds.center().z);
    let placed: Vec<BoxSolid> = remap_ids(template_boxes)
        .into_iter()
        .map(|mut b| {
            b.position = b.position + shift;
            b
        })
        .collect();

    info!(offset, count = placed.len(), "placed template boxes");
    placed
}

pub fn place_template(
    template: &ComponentTemplate,
    existing: &[BoxSolid],
    config: &PackerConfig,
) -> Vec<BoxSolid> {
    pack_template(&template.boxes, existing, config)
}

/// The catalog material used by the fewest boxes; ties go to the earliest
/// catalog entry. `None` only for an empty catalog.
pub fn pick_least_used_material<'a>(
    catalog: &'a [Material],
    boxes: &[BoxSolid],
) -> Option<&'a Material> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for b in boxes {
        *counts.entry(b.material_id.as_str()).or_default() += 1;
    }

    let mut best: Option<(&Material, usize)> = None;
    for material in catalog {
        let count = counts.get(material.id.as_str()).copied().unwrap_or(0);
        if best.map_or(true, |(_, c)| count < c) {
            best = Some((material, count));
        }
    }
    best.map(|(m, _)| m)
}

/// A new default-sized box in free space, using `material_id` or else the
/// least used catalog material.
pub fn new_default_box(
    existing: &[BoxSolid],
    catalog: &[Material],
    material_id: Option<&str>,
    config: &PackerConfig,
) -> Option<BoxSolid> {
    let material_id = match material_id {
        Some(id) => id.to_string(),
        None => pick_least_used_material(catalog, existing)?.id.clone(),
    };
    let dimensions = config.default_dimensions;
    let position = pack_single_default(existing, &dimensions, config);
    let b = BoxSolid::new(position, dimensions, Rotation3::ZERO, material_id);
    info!(id = %b.id, material = %b.material_id, x = position.x, "added default box");
    Some(b)
}

/// Y for `moving`'s stored corner when dropped with its corner at `x`, `z`:
/// its lowest point rests on the highest box it overlaps in XZ, or on the
/// ground. `moving` itself is ignored if present in `others`.
pub fn rest_height(moving: &BoxSolid, x: f64, z: f64, others: &[BoxSolid]) -> f64 {
    let current = BoundingBox::of_box(moving);
    let dropped = current.translated(Vec3::new(x - moving.position.x, 0.0, z - moving.position.z));

    let support = others
        .iter()
        .filter(|o| o.id != moving.id)
        .map(BoundingBox::of_box)
        .filter(|o| dropped.footprint_overlaps(o, 0.0))
        .fold(0.0_f64, |top, o| top.max(o.max.y));

    support - (current.min.y - moving.position.y)
}
