use std::collections::HashMap;

use crate::math::bounds::BoundingSphere;
use crate::scene_graph::node::{Geometry, Node};

/// Instantiable description of a named object inside an asset. Mesh data
/// stays with the renderer; placement only needs a name and bounds.
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    pub name: String,
    pub bounds: BoundingSphere,
}

impl NodeTemplate {
    pub fn instantiate(&self) -> Node {
        Node::with_geometry(
            self.name.clone(),
            Geometry::Mesh {
                bounds: self.bounds,
            },
        )
    }
}

pub trait AssetSource {
    /// Looks up a named node inside an asset. `None` is an expected miss, not
    /// an error.
    fn load_named_object(&self, asset_path: &str, node_name: &str) -> Option<NodeTemplate>;
}

/// In-memory asset source. Stands in for a real loader in tests and the demo.
pub struct AssetCatalog {
    templates: HashMap<(String, String), NodeTemplate>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn register(&mut self, asset_path: &str, node_name: &str, bounds: BoundingSphere) {
        self.templates.insert(
            (asset_path.to_string(), node_name.to_string()),
            NodeTemplate {
                name: node_name.to_string(),
                bounds,
            },
        );
    }
}

impl AssetSource for AssetCatalog {
    fn load_named_object(&self, asset_path: &str, node_name: &str) -> Option<NodeTemplate> {
        self.templates
            .get(&(asset_path.to_string(), node_name.to_string()))
            .cloned()
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
