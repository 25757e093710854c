use anyhow::{Context, Result};
use glam::{Vec2, Vec3};

use groundplane::assets::AssetCatalog;
use groundplane::camera::Camera;
use groundplane::interaction::gesture::{
    GestureEvent, LongPressRecognizer, DEFAULT_MIN_PRESS_DURATION,
};
use groundplane::interaction::placement::ObjectPlacementController;
use groundplane::math::bounds::BoundingSphere;
use groundplane::session::Session;
use groundplane::tracking::anchor::{AnchorEvent, AnchorId, AnchorKind, TrackedAnchor};

const RESOLUTION: Vec2 = Vec2::new(1170.0, 2532.0);

/// Scripted stand-in for a live tracking session: a tabletop plane appears
/// and refines, an object is tapped onto it, then a long press spins it.
fn main() -> Result<()> {
    pretty_env_logger::init();

    let camera = Camera {
        eye: Vec3::new(0.0, 1.4, -1.2),
        target: Vec3::ZERO,
        up: Vec3::Y,
    };

    let mut catalog = AssetCatalog::new();
    catalog.register(
        "assets/ship.glb",
        "ship",
        BoundingSphere::new(Vec3::ZERO, 0.12),
    );

    let placement = ObjectPlacementController::new("assets/ship.glb", "ship");
    let mut session = Session::new(camera, RESOLUTION, Box::new(catalog), placement);

    // The engine reports a detected tabletop, then grows the estimate.
    let table = AnchorId(1);
    session.enqueue_anchor_event(AnchorEvent::Added(TrackedAnchor {
        id: table,
        kind: AnchorKind::HorizontalPlane,
        center: Vec3::ZERO,
        extent: Vec2::new(0.5, 0.5),
    }));
    session.enqueue_anchor_event(AnchorEvent::Updated(TrackedAnchor {
        id: table,
        kind: AnchorKind::HorizontalPlane,
        center: Vec3::new(0.1, 0.0, 0.2),
        extent: Vec2::new(1.2, 0.9),
    }));
    session.step(1.0 / 60.0);
    log::info!("tracking {} surface(s)", session.surface_count());

    // Tap the middle of the surface to place the ship.
    let tap_point = session
        .camera
        .screen_point(Vec3::new(0.1, 0.0, 0.2), RESOLUTION)
        .context("surface center is behind the camera")?;
    let placed = session
        .handle_gesture(GestureEvent::Tap {
            location: tap_point,
        })
        .context("tap missed every tracked surface")?;
    let position = session
        .scene
        .get_node_transform(placed)
        .context("placed node vanished")?
        .translation();
    log::info!("ship resting at {position:?}");

    // Hold on the ship for half a second to spin it.
    let mut recognizer = LongPressRecognizer::new(DEFAULT_MIN_PRESS_DURATION);
    let press_point = session
        .camera
        .screen_point(position, RESOLUTION)
        .context("ship is behind the camera")?;

    let mut now = 0.0;
    recognizer.pointer_down(press_point, now);
    for _ in 0..30 {
        now += 1.0 / 60.0;
        if let Some(event) = recognizer.update(now) {
            session.handle_gesture(event);
        }
        session.step(1.0 / 60.0);
    }
    if let Some(event) = recognizer.pointer_up(press_point, now) {
        session.handle_gesture(event);
    }

    let rotation = session
        .scene
        .get_node_transform(placed)
        .context("placed node vanished")?
        .rotation();
    log::info!("ship released at rotation {rotation:?}");

    Ok(())
}
