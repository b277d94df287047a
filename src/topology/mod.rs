//! Leveled layout of department role graphs.
//!
//! Role nodes are split into breadth-first levels from the in-degree-0
//! roots, each level becomes a centered row, and edges are trimmed to the
//! node boundaries for drawing.

mod edges;
mod layout;
mod levels;
mod types;

pub use edges::{DrawableEdge, Segment, trim_segment};
pub use layout::{LayoutConfig, Point, TopologyLayout, layout_nodes};
pub use levels::build_levels;
pub use types::{EdgeKind, RoleNode, TopologyEdge, display_title};
