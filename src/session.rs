use std::collections::VecDeque;

use glam::Vec2;

use crate::assets::AssetSource;
use crate::camera::Camera;
use crate::interaction::gesture::{GestureEvent, PressPhase};
use crate::interaction::manipulation::ManipulationController;
use crate::interaction::placement::ObjectPlacementController;
use crate::scene_graph::node::NodeId;
use crate::scene_graph::scene::Scene;
use crate::tracking::anchor::AnchorEvent;
use crate::tracking::synchronizer::PlaneSurfaceSynchronizer;

/// Anchor events queued between frames. The tracking engine should never get
/// this far ahead of the frame loop; events past the cap are dropped.
const MAX_PENDING_EVENTS: usize = 256;

/// Owns the scene and wires the tracking and gesture streams into it. Anchor
/// events are queued as they arrive and drained in order once per `step`, so
/// every mutation happens on the frame thread and an add always lands before
/// the updates that follow it.
pub struct Session {
    pub scene: Scene,
    pub camera: Camera,
    resolution: Vec2,
    pending_events: VecDeque<AnchorEvent>,
    synchronizer: PlaneSurfaceSynchronizer,
    placement: ObjectPlacementController,
    manipulation: ManipulationController,
    assets: Box<dyn AssetSource>,
    placement_paused: bool,
}

impl Session {
    pub fn new(
        camera: Camera,
        resolution: Vec2,
        assets: Box<dyn AssetSource>,
        placement: ObjectPlacementController,
    ) -> Self {
        Self {
            scene: Scene::new(),
            camera,
            resolution,
            pending_events: VecDeque::new(),
            synchronizer: PlaneSurfaceSynchronizer::new(),
            placement,
            manipulation: ManipulationController::new(),
            assets,
            placement_paused: false,
        }
    }

    /// Tracking-engine callback: queues an anchor event for the next frame.
    pub fn enqueue_anchor_event(&mut self, event: AnchorEvent) {
        if self.pending_events.len() >= MAX_PENDING_EVENTS {
            log::warn!("anchor event queue full, dropping {:?}", event);
            return;
        }
        self.pending_events.push_back(event);
    }

    pub fn on_tracking_failed(&mut self, error: &str) {
        log::error!("tracking session failed: {error}");
    }

    pub fn on_tracking_interrupted(&mut self) {
        log::warn!("tracking interrupted, pausing placement");
        self.placement_paused = true;
    }

    pub fn on_tracking_resumed(&mut self) {
        log::info!("tracking resumed");
        self.placement_paused = false;
    }

    /// Advances one frame: drains queued anchor events in arrival order,
    /// steps running actions, and refreshes world transforms so hit tests see
    /// the current frame's surfaces.
    pub fn step(&mut self, dt: f32) {
        while let Some(event) = self.pending_events.pop_front() {
            self.synchronizer.apply(&mut self.scene, event);
        }

        self.scene.advance_actions(dt);
        self.scene.update_transforms();
    }

    /// Routes a gesture to placement or manipulation. Returns the placed node
    /// when a tap lands on a surface.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<NodeId> {
        match event {
            GestureEvent::Tap { location } => {
                if self.placement_paused {
                    log::debug!("placement paused, ignoring tap");
                    return None;
                }

                let placed = self.placement.place(
                    &mut self.scene,
                    self.assets.as_ref(),
                    &self.camera,
                    self.resolution,
                    location,
                );
                if placed.is_some() {
                    self.scene.update_transforms();
                }
                placed
            }
            GestureEvent::Press {
                id,
                location,
                phase: PressPhase::Began,
            } => {
                self.manipulation.press_began(
                    &mut self.scene,
                    &self.camera,
                    self.resolution,
                    id,
                    location,
                );
                None
            }
            GestureEvent::Press {
                id,
                phase: PressPhase::Ended,
                ..
            } => {
                self.manipulation.press_ended(&mut self.scene, id);
                None
            }
        }
    }

    pub fn surface_count(&self) -> usize {
        self.synchronizer.surface_count()
    }

    pub fn is_placement_paused(&self) -> bool {
        self.placement_paused
    }
}
