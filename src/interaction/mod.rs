pub mod gesture;
pub mod hit_test;
pub mod manipulation;
pub mod placement;
