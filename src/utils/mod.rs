pub mod delivery;
pub mod rate_loader;
pub mod region_graph;
