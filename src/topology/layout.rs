use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::edges::{DrawableEdge, trim_segment};
use super::levels::build_levels;
use super::types::{RoleNode, TopologyEdge};

/// Geometry of the role topology diagram, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
	/// Radius of a role circle.
	pub node_radius: f64,
	/// Vertical distance between level centers.
	pub level_height: f64,
	/// Horizontal space between two circles of a level.
	pub node_gap: f64,
	/// Added above the first level.
	pub top_padding: f64,
	/// Added to the widest level to get the canvas width.
	pub margin_x: f64,
	/// Added to the stacked levels to get the canvas height.
	pub margin_y: f64,
	/// Canvas never gets narrower than this.
	pub min_width: f64,
	/// Gap left between an edge end and the circle it points at.
	pub edge_margin: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			node_radius: 28.0,
			level_height: 72.0,
			node_gap: 24.0,
			top_padding: 8.0,
			margin_x: 32.0,
			margin_y: 24.0,
			min_width: 280.0,
			edge_margin: 4.0,
		}
	}
}

impl LayoutConfig {
	/// Center-to-center distance of two neighbours in a level.
	pub fn step(&self) -> f64 {
		self.node_radius * 2.0 + self.node_gap
	}

	/// Width taken by a level of `n` nodes.
	pub fn level_width(&self, n: usize) -> f64 {
		if n == 0 {
			return 0.0;
		}
		(n - 1) as f64 * self.step() + self.node_radius * 2.0
	}

	/// How far edges are pulled back from node centers.
	pub fn edge_offset(&self) -> f64 {
		self.node_radius + self.edge_margin
	}
}

/// A node center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Result of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TopologyLayout {
	/// Levels as built by [`build_levels`], topmost first.
	pub levels: Vec<Vec<RoleNode>>,
	/// Center of every laid out node, keyed by role id.
	pub positions: HashMap<String, Point>,
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	edge_offset: f64,
}

impl TopologyLayout {
	/// Position of `id`, if it was laid out.
	pub fn position(&self, id: &str) -> Option<Point> {
		self.positions.get(id).copied()
	}

	/// Edges that can be drawn, trimmed to the node boundaries.
	///
	/// Edges with an unknown endpoint, or whose endpoints coincide, are left
	/// out.
	pub fn drawable_edges<'e>(&self, edges: &'e [TopologyEdge]) -> Vec<DrawableEdge<'e>> {
		edges
			.iter()
			.filter_map(|edge| {
				let from = self.position(&edge.from_role_id)?;
				let to = self.position(&edge.to_role_id)?;
				let segment = trim_segment(from, to, self.edge_offset)?;
				Some(DrawableEdge { edge, segment })
			})
			.collect()
	}
}

/// Lays `nodes` out in centered rows, one per breadth-first level.
pub fn layout_nodes(nodes: &[RoleNode], edges: &[TopologyEdge], config: &LayoutConfig) -> TopologyLayout {
	let levels = build_levels(nodes, edges);

	let max_width = levels
		.iter()
		.map(|level| config.level_width(level.len()))
		.fold(0.0, f64::max);
	let width = (max_width + config.margin_x).max(config.min_width);
	let height = levels.len() as f64 * config.level_height + config.margin_y;
	let axis = width / 2.0;

	let mut positions = HashMap::with_capacity(nodes.len());
	for (li, level) in levels.iter().enumerate() {
		let y = li as f64 * config.level_height + config.node_radius + config.top_padding;
		let start_x = axis - config.level_width(level.len()) / 2.0 + config.node_radius;
		for (i, node) in level.iter().enumerate() {
			positions.insert(node.id.clone(), Point::new(start_x + i as f64 * config.step(), y));
		}
	}

	log::debug!(
		"laid out {} roles in {} levels ({}x{})",
		positions.len(),
		levels.len(),
		width,
		height
	);

	TopologyLayout {
		levels: levels
			.into_iter()
			.map(|level| level.into_iter().cloned().collect())
			.collect(),
		positions,
		width,
		height,
		edge_offset: config.edge_offset(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str) -> RoleNode {
		RoleNode::new(id, id, id)
	}

	#[test]
	fn empty_input_gets_minimum_canvas() {
		let layout = layout_nodes(&[], &[], &LayoutConfig::default());

		assert!(layout.levels.is_empty());
		assert!(layout.positions.is_empty());
		assert_eq!(layout.width, 280.0);
		assert_eq!(layout.height, 24.0);
	}

	#[test]
	fn single_node_sits_on_the_axis() {
		let layout = layout_nodes(&[node("solo")], &[], &LayoutConfig::default());

		assert_eq!(layout.position("solo"), Some(Point::new(140.0, 36.0)));
		assert_eq!(layout.width, 280.0);
		assert_eq!(layout.height, 96.0);
	}

	#[test]
	fn wide_level_sets_canvas_width() {
		let nodes: Vec<RoleNode> = (0..5).map(|i| node(&format!("n{i}"))).collect();
		let layout = layout_nodes(&nodes, &[], &LayoutConfig::default());

		// 4 * 80 + 56 + 32
		assert_eq!(layout.width, 408.0);
		assert_eq!(layout.position("n0").map(|p| p.x), Some(44.0));
		assert_eq!(layout.position("n4").map(|p| p.x), Some(364.0));
	}

	#[test]
	fn levels_stack_downwards() {
		let nodes = [node("top"), node("mid"), node("low")];
		let edges = [TopologyEdge::reports_to("top", "mid"), TopologyEdge::reports_to("mid", "low")];
		let layout = layout_nodes(&nodes, &edges, &LayoutConfig::default());

		let ys: Vec<f64> = ["top", "mid", "low"]
			.iter()
			.filter_map(|id| layout.position(id))
			.map(|p| p.y)
			.collect();
		assert_eq!(ys, [36.0, 108.0, 180.0]);
		assert_eq!(layout.height, 240.0);
	}

	#[test]
	fn custom_config_is_honoured() {
		let config = LayoutConfig {
			node_radius: 10.0,
			node_gap: 0.0,
			min_width: 0.0,
			margin_x: 0.0,
			..LayoutConfig::default()
		};
		let layout = layout_nodes(&[node("a"), node("b")], &[], &config);

		assert_eq!(layout.width, 40.0);
		assert_eq!(layout.position("a").map(|p| p.x), Some(10.0));
		assert_eq!(layout.position("b").map(|p| p.x), Some(30.0));
	}
}
