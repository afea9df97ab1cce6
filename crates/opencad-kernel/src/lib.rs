pub mod config;
pub mod connector;
pub mod cuts;
pub mod geometry;
pub mod placement;
pub mod snap;
pub mod validate;

// Re-export the engine entry points at crate root for convenience.
pub use config::{ConnectorConfig, PackerConfig, SnapConfig};
pub use connector::{create_angled_board, AngledBoard, CrossSection};
pub use cuts::{
    build_cut_plane_visualization, build_cutter, CutConventions, CutPlaneVisualization,
    CutterParams,
};
pub use geometry::bounds::{box_corners, BoundingBox};
pub use geometry::rotation::{
    apply_rotation, corner_from_visual_center, rotate_around_axis, visual_center,
};
pub use placement::{
    new_default_box, pack_single_default, pack_template, pick_least_used_material, place_template,
    remap_ids, rest_height,
};
pub use snap::{
    find_nearest_snap_point, measure_distance, project_to_screen, CameraView, PerspectiveCamera,
    Projection, ScreenPoint,
};
pub use validate::{clamp_cut_angle, validate_cut, validate_dimensions, GeometryError};
