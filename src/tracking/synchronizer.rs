use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

use glam::Quat;

use crate::scene_graph::node::{Geometry, Node, NodeId, Tint};
use crate::scene_graph::scene::Scene;
use crate::tracking::anchor::{AnchorEvent, AnchorId, AnchorKind, TrackedAnchor};

/// Tint applied once an anchor starts receiving refinement updates. The
/// initial visual is fully transparent so surfaces stay hit-testable without
/// being drawn.
const TRACKED_TINT: Tint = Tint::rgba(0.0, 0.0, 1.0, 0.2);

struct AnchorNodes {
    container: NodeId,
    surface: NodeId,
}

/// Keeps the scene graph coherent with the tracking engine's plane-anchor
/// stream. Each live horizontal anchor owns a container node with exactly one
/// surface visual nested under it; updates mutate that visual in place so its
/// node identity survives for hit testing.
pub struct PlaneSurfaceSynchronizer {
    registry: HashMap<AnchorId, AnchorNodes>,
}

impl PlaneSurfaceSynchronizer {
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    pub fn apply(&mut self, scene: &mut Scene, event: AnchorEvent) {
        match event {
            AnchorEvent::Added(anchor) => self.on_added(scene, anchor),
            AnchorEvent::Updated(anchor) => self.on_updated(scene, anchor),
            AnchorEvent::Removed(id) => self.on_removed(scene, id),
        }
    }

    fn on_added(&mut self, scene: &mut Scene, anchor: TrackedAnchor) {
        if anchor.kind != AnchorKind::HorizontalPlane {
            return;
        }
        if self.registry.contains_key(&anchor.id) {
            log::debug!("ignoring duplicate add for anchor {}", anchor.id);
            return;
        }

        let container = scene.add_node(Node::new(format!("anchor-{}", anchor.id)), scene.root());

        let mut surface = Node::with_geometry(
            format!("anchor-{}-surface", anchor.id),
            Geometry::Plane {
                width: anchor.extent.x,
                height: anchor.extent.y,
                tint: Tint::CLEAR,
            },
        );
        surface.transform.set_translation(anchor.center);
        // Plane geometry lives in local X/Y; lay it flat.
        surface
            .transform
            .set_rotation(Quat::from_rotation_x(-FRAC_PI_2));
        let surface = scene.add_node(surface, container);

        log::debug!(
            "anchor {} added, surface {:.2}x{:.2} at {:?}",
            anchor.id,
            anchor.extent.x,
            anchor.extent.y,
            anchor.center
        );
        self.registry
            .insert(anchor.id, AnchorNodes { container, surface });
    }

    fn on_updated(&mut self, scene: &mut Scene, anchor: TrackedAnchor) {
        if anchor.kind != AnchorKind::HorizontalPlane {
            return;
        }
        // An update for an unregistered anchor is a normal miss, not a fault.
        let Some(nodes) = self.registry.get(&anchor.id) else {
            return;
        };
        let surface = nodes.surface;

        let Some(node) = scene.get_node_mut(surface) else {
            return;
        };
        if let Some(Geometry::Plane {
            width,
            height,
            tint,
        }) = node.geometry.as_mut()
        {
            *width = anchor.extent.x;
            *height = anchor.extent.y;
            *tint = TRACKED_TINT;
        }

        scene.set_node_translation(surface, anchor.center);
    }

    fn on_removed(&mut self, scene: &mut Scene, id: AnchorId) {
        let Some(nodes) = self.registry.remove(&id) else {
            return;
        };

        scene.remove_subtree(nodes.container);
        log::debug!("anchor {} removed", id);
    }

    /// Surface visual registered for an anchor, if it is still tracked.
    pub fn surface_for(&self, id: AnchorId) -> Option<NodeId> {
        self.registry.get(&id).map(|nodes| nodes.surface)
    }

    pub fn surface_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for PlaneSurfaceSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}
