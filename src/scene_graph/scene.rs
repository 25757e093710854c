use glam::{Mat4, Quat, Vec3};
use id_arena::Arena;

use crate::scene_graph::action::ActiveAction;
use crate::scene_graph::node::{Node, NodeId};
use crate::scene_graph::transform::Transform;

pub struct Scene {
    pub nodes: Arena<Node>,
    root: NodeId,
}

impl Scene {
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::new("root"));
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn add_node(&mut self, node: Node, parent: NodeId) -> NodeId {
        let id = self.nodes.alloc(node);
        self.set_node_parent(id, Some(parent));
        id
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).filter(|node| node.alive)
    }

    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id).filter(|node| node.alive)
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.alive && node.name == name)
            .map(|(id, _)| id)
    }

    /// Sets the parent of a node and updates child relationships
    pub fn set_node_parent(&mut self, child_id: NodeId, new_parent_id: Option<NodeId>) {
        // Remove from old parent's children list
        if let Some(child) = self.nodes.get(child_id) {
            if let Some(old_parent_id) = child.parent_id {
                if let Some(old_parent) = self.nodes.get_mut(old_parent_id) {
                    old_parent.child_ids.retain(|&id| id != child_id);
                }
            }
        }

        // Set new parent and add to new parent's children list
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parent_id = new_parent_id;

            if let Some(new_parent_id) = new_parent_id {
                if let Some(new_parent) = self.nodes.get_mut(new_parent_id) {
                    new_parent.child_ids.push(child_id);
                }
            }
        }

        self.invalidate_node_hierarchy(child_id);
    }

    /// Detaches a node from its parent and marks it and all its descendants
    /// dead. Arena slots are tombstoned rather than reused; dead nodes are
    /// invisible to lookups, traversal, and hit testing.
    pub fn remove_subtree(&mut self, id: NodeId) {
        self.set_node_parent(id, None);
        self.mark_dead_recursive(id);
    }

    fn mark_dead_recursive(&mut self, id: NodeId) {
        let child_ids = match self.nodes.get_mut(id) {
            Some(node) => {
                node.alive = false;
                node.actions.clear();
                node.child_ids.clone()
            }
            None => return,
        };

        for child_id in child_ids {
            self.mark_dead_recursive(child_id);
        }
    }

    pub fn set_node_translation(&mut self, id: NodeId, translation: Vec3) {
        if let Some(node) = self.get_node_mut(id) {
            node.transform.set_translation(translation);
        }
        self.invalidate_node_hierarchy(id);
    }

    pub fn set_node_rotation(&mut self, id: NodeId, rotation: Quat) {
        if let Some(node) = self.get_node_mut(id) {
            node.transform.set_rotation(rotation);
        }
        self.invalidate_node_hierarchy(id);
    }

    pub fn get_node_transform(&self, id: NodeId) -> Option<&Transform> {
        self.get_node(id).map(|node| &node.transform)
    }

    /// World matrix of a node as of the last `update_transforms` pass.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        self.get_node(id)
            .map(|node| *node.transform.get_world_matrix())
    }

    /// Invalidates world transforms for a node and all its descendants
    pub fn invalidate_node_hierarchy(&self, id: NodeId) {
        if let Some(node) = self.get_node(id) {
            node.transform.invalidate_world();

            for &child_id in &node.child_ids {
                self.invalidate_node_hierarchy(child_id);
            }
        }
    }

    /// Updates all node transforms in hierarchical order
    pub fn update_transforms(&self) {
        self.update_node_transform_recursive(self.root, Mat4::IDENTITY);
    }

    fn update_node_transform_recursive(&self, id: NodeId, parent_world_matrix: Mat4) {
        if let Some(node) = self.get_node(id) {
            if node.transform.is_world_dirty() {
                let local_matrix = *node.transform.get_local_matrix();
                let world_matrix = parent_world_matrix * local_matrix;
                node.transform.set_world_matrix(world_matrix);
            }

            let world_matrix = *node.transform.get_world_matrix();
            for &child_id in &node.child_ids {
                self.update_node_transform_recursive(child_id, world_matrix);
            }
        }
    }

    pub fn run_action(&mut self, id: NodeId, action: ActiveAction) {
        if let Some(node) = self.get_node_mut(id) {
            node.actions.push(action);
        }
    }

    /// Stops every running action on the node. The node keeps whatever
    /// rotation the actions had applied so far.
    pub fn remove_all_actions(&mut self, id: NodeId) {
        if let Some(node) = self.get_node_mut(id) {
            node.actions.clear();
        }
    }

    /// Advances all running actions by `dt` seconds, applying their rotation
    /// steps and dropping the ones that finished.
    pub fn advance_actions(&mut self, dt: f32) {
        let mut rotated = Vec::new();

        for (id, node) in self.nodes.iter_mut() {
            if !node.alive || node.actions.is_empty() {
                continue;
            }

            let mut delta = Quat::IDENTITY;
            node.actions.retain_mut(|action| {
                let (step, running) = action.advance(dt);
                delta = step * delta;
                running
            });

            node.transform.rotate(delta);
            rotated.push(id);
        }

        for id in rotated {
            self.invalidate_node_hierarchy(id);
        }
    }

    /// Live nodes that carry geometry, in arena order.
    pub fn geometry_nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.alive && node.geometry.is_some())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
