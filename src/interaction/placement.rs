use glam::{Vec2, Vec3};

use crate::assets::AssetSource;
use crate::camera::Camera;
use crate::interaction::hit_test::{hit_test, HitTestFilter};
use crate::scene_graph::node::NodeId;
use crate::scene_graph::scene::Scene;

/// Lifts a placed object so its visual base rests on the surface instead of
/// burying its origin in it.
pub const RESTING_HEIGHT_OFFSET: f32 = 0.122;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPose {
    pub position: Vec3,
}

/// Resolves a screen point to a placement pose on the nearest tracked surface
/// under it. Horizontal coordinates come verbatim from the intersection; the
/// vertical coordinate gets the resting-height offset. Purely a function of
/// the current surface set and the point.
pub fn resolve_placement(
    scene: &Scene,
    camera: &Camera,
    resolution: Vec2,
    point: Vec2,
) -> Option<PlacementPose> {
    let ray = camera.screen_ray(point, resolution);
    let hit = hit_test(scene, &ray, HitTestFilter::SurfacesWithinExtent)
        .into_iter()
        .next()?;

    Some(PlacementPose {
        position: hit.world_point + Vec3::Y * RESTING_HEIGHT_OFFSET,
    })
}

/// Turns taps into placed objects. Every tap that resolves to a pose adds one
/// new independent node under the scene root; misses do nothing.
pub struct ObjectPlacementController {
    asset_path: String,
    node_name: String,
}

impl ObjectPlacementController {
    pub fn new(asset_path: impl Into<String>, node_name: impl Into<String>) -> Self {
        Self {
            asset_path: asset_path.into(),
            node_name: node_name.into(),
        }
    }

    pub fn place(
        &self,
        scene: &mut Scene,
        assets: &dyn AssetSource,
        camera: &Camera,
        resolution: Vec2,
        point: Vec2,
    ) -> Option<NodeId> {
        let pose = resolve_placement(scene, camera, resolution, point)?;

        let Some(template) = assets.load_named_object(&self.asset_path, &self.node_name) else {
            log::warn!(
                "object {:?} not found in {:?}",
                self.node_name,
                self.asset_path
            );
            return None;
        };

        let mut node = template.instantiate();
        node.transform.set_translation(pose.position);
        let id = scene.add_node(node, scene.root());
        log::info!("placed {:?} at {:?}", self.node_name, pose.position);
        Some(id)
    }
}
