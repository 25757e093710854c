pub mod action;
pub mod node;
pub mod scene;
pub mod transform;
