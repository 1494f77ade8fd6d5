mod topology;

pub use topology::{edge_key, Edge, EdgeKey, Network, Node};

pub type Path = Vec<usize>;

pub const DEFAULT_PROCESSING_DELAY: f64 = 1.0;
pub const DEFAULT_NODE_RELIABILITY: f64 = 0.99;
pub const DEFAULT_BANDWIDTH: i64 = 100;
pub const DEFAULT_LINK_DELAY: f64 = 10.0;
pub const DEFAULT_LINK_RELIABILITY: f64 = 0.99;
