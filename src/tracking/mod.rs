pub mod anchor;
pub mod synchronizer;
