use glam::{Vec2, Vec3};

/// Opaque identifier assigned by the tracking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u64);

impl std::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    HorizontalPlane,
    Other,
}

/// Snapshot of a tracking-engine plane estimate. The engine owns the anchor;
/// events carry copies of its state at delivery time.
#[derive(Debug, Clone, Copy)]
pub struct TrackedAnchor {
    pub id: AnchorId,
    pub kind: AnchorKind,
    /// Center of the estimated plane, in the anchor's local space.
    pub center: Vec3,
    /// Width and depth of the estimated plane.
    pub extent: Vec2,
}

#[derive(Debug, Clone, Copy)]
pub enum AnchorEvent {
    Added(TrackedAnchor),
    Updated(TrackedAnchor),
    Removed(AnchorId),
}
