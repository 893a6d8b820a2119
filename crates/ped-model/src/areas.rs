//! Geometry pipeline: lane network → accessible/excluded area rings.

use tracing::{info, warn};

use ped_core::ModelConfig;
use ped_geom::{AreaSet, GeomError, MIN_HOLE_AREA, ShapeStore, build_walkable_region, export_areas, polygon_wkt};
use ped_net::LaneNetwork;

use crate::ModelResult;

/// Build the engine-ready area set for a network.
///
/// Dilates every sidewalk lane, unions the primitives, keeps the largest
/// connected component, and exports its rings together with any explicitly
/// tagged shapes from `store`.  A network yielding no walkable surface is
/// an error the caller must escalate.
///
/// When [`ModelConfig::geometry_dump`] is set, the selected polygon is also
/// written there as WKT; a dump failure is logged and otherwise ignored.
pub fn build_walkable_areas(
    net: &LaneNetwork,
    config: &ModelConfig,
    store: &ShapeStore,
) -> ModelResult<AreaSet> {
    let region = build_walkable_region(net);
    let polygon = region.largest().ok_or(GeomError::EmptyRegion)?;
    info!(
        components = region.components().0.len(),
        "walkable surface built"
    );

    if let Some(path) = &config.geometry_dump {
        if let Err(err) = std::fs::write(path, polygon_wkt(polygon)) {
            warn!(path = %path.display(), %err, "walkable-polygon dump failed");
        }
    }

    Ok(export_areas(polygon, MIN_HOLE_AREA, store)?)
}
