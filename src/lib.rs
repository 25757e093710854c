pub mod assets;
pub mod camera;
pub mod interaction;
pub mod math;
pub mod scene_graph;
pub mod session;
pub mod tracking;
