use glam::Vec3;
use id_arena::Id;

use crate::math::bounds::BoundingSphere;
use crate::scene_graph::action::ActiveAction;
use crate::scene_graph::scene::Scene;
use crate::scene_graph::transform::Transform;

pub type NodeId = Id<Node>;

/// Flat RGBA tint applied to surface geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Tint {
    pub const CLEAR: Tint = Tint::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Tint {
        Tint { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Geometry {
    /// A finite rectangle in the node's local X/Y plane, centered on the
    /// origin. Lies flat once the owning node is rotated -90 degrees about X.
    Plane { width: f32, height: f32, tint: Tint },
    /// Loaded object geometry, reduced to its bounding sphere. The renderer
    /// owns the actual mesh; hit testing only needs the bounds.
    Mesh { bounds: BoundingSphere },
}

pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub geometry: Option<Geometry>,
    pub parent_id: Option<NodeId>,
    pub child_ids: Vec<NodeId>,
    pub actions: Vec<ActiveAction>,
    pub alive: bool,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Node {
        Node {
            name: name.into(),
            ..Node::default()
        }
    }

    pub fn with_geometry(name: impl Into<String>, geometry: Geometry) -> Node {
        Node {
            name: name.into(),
            geometry: Some(geometry),
            ..Node::default()
        }
    }

    pub fn parent<'a>(&self, scene: &'a Scene) -> Option<&'a Node> {
        self.parent_id.and_then(|id| scene.get_node(id))
    }

    pub fn children<'a, 'b>(&'a self, scene: &'b Scene) -> impl Iterator<Item = &'b Node> + 'b
    where
        'a: 'b,
    {
        self.child_ids
            .iter()
            .filter_map(move |id| scene.get_node(*id))
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Transform::from_translation(Vec3::ZERO),
            geometry: None,
            parent_id: None,
            child_ids: Vec::new(),
            actions: Vec::new(),
            alive: true,
        }
    }
}
