pub mod common;
pub mod degree;
pub mod hierarchy;

pub use common::{GraphView, NodeId};
pub use degree::{
    connected_pair_count, degree_summary, density_percent, incident_degree_summary, DegreeSummary,
};
pub use hierarchy::{hierarchy_levels, HierarchyLevels};
