use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::interaction::gesture::PressId;
use crate::interaction::hit_test::{hit_test, HitTestFilter};
use crate::scene_graph::action::{ActiveAction, RotateBy};
use crate::scene_graph::node::NodeId;
use crate::scene_graph::scene::Scene;

/// One full revolution per second while a press is held.
const REVOLUTION_DURATION: f32 = 1.0;

/// Per-press two-state machine: a press that begins over an object engages it
/// and spins it until that same press ends. The target is captured at begin
/// time and never re-resolved, so it still receives the stop even if it
/// rotates or drifts out from under the finger.
pub struct ManipulationController {
    engagements: HashMap<PressId, NodeId>,
}

impl ManipulationController {
    pub fn new() -> Self {
        Self {
            engagements: HashMap::new(),
        }
    }

    pub fn press_began(
        &mut self,
        scene: &mut Scene,
        camera: &Camera,
        resolution: Vec2,
        press: PressId,
        location: Vec2,
    ) {
        let ray = camera.screen_ray(location, resolution);
        // A begin over empty space leaves the press idle.
        let Some(hit) = hit_test(scene, &ray, HitTestFilter::AnyGeometry)
            .into_iter()
            .next()
        else {
            return;
        };

        scene.run_action(
            hit.node,
            ActiveAction::repeat_forever(RotateBy {
                axis: Vec3::Y,
                angle: TAU,
                duration: REVOLUTION_DURATION,
            }),
        );
        self.engagements.insert(press, hit.node);
    }

    pub fn press_ended(&mut self, scene: &mut Scene, press: PressId) {
        // An end without a matching engagement is a no-op.
        let Some(node) = self.engagements.remove(&press) else {
            return;
        };

        scene.remove_all_actions(node);
    }

    pub fn is_engaged(&self, press: PressId) -> bool {
        self.engagements.contains_key(&press)
    }

    pub fn engaged_target(&self, press: PressId) -> Option<NodeId> {
        self.engagements.get(&press).copied()
    }
}

impl Default for ManipulationController {
    fn default() -> Self {
        Self::new()
    }
}
