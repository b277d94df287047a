//! Properties of the leveled role layout, checked through the public API.

// dependencies belong to the library target
#![allow(unused_crate_dependencies)]

use agent_cluster_dashboard::topology::{
	LayoutConfig, Point, RoleNode, TopologyEdge, build_levels, layout_nodes,
};

fn role(id: &str) -> RoleNode {
	RoleNode::new(id, id.to_uppercase(), format!("{id} role"))
}

fn ids(levels: &[Vec<&RoleNode>]) -> Vec<Vec<String>> {
	levels
		.iter()
		.map(|level| level.iter().map(|n| n.id.clone()).collect())
		.collect()
}

/// A small org chart: one head, two leads, three reports, one lateral link.
fn org() -> (Vec<RoleNode>, Vec<TopologyEdge>) {
	let nodes = ["head", "lead-a", "lead-b", "ic-1", "ic-2", "ic-3"]
		.into_iter()
		.map(role)
		.collect();
	let edges = vec![
		TopologyEdge::reports_to("head", "lead-a"),
		TopologyEdge::reports_to("head", "lead-b"),
		TopologyEdge::reports_to("lead-a", "ic-1"),
		TopologyEdge::reports_to("lead-b", "ic-2"),
		TopologyEdge::reports_to("lead-b", "ic-3"),
		TopologyEdge::collaborates_with("lead-a", "lead-b"),
	];
	(nodes, edges)
}

#[test]
fn layout_is_deterministic() {
	let (nodes, edges) = org();
	let config = LayoutConfig::default();

	let first = layout_nodes(&nodes, &edges, &config);
	let second = layout_nodes(&nodes, &edges, &config);
	assert_eq!(first, second);
}

#[test]
fn roots_are_nodes_without_incoming_edges() {
	let (nodes, edges) = org();
	let levels = build_levels(&nodes, &edges);

	assert_eq!(
		ids(&levels),
		vec![
			vec!["head".to_string()],
			vec!["lead-a".into(), "lead-b".into()],
			vec!["ic-1".into(), "ic-2".into(), "ic-3".into()],
		]
	);
}

#[test]
fn rootless_cycle_falls_back_to_one_level() {
	let nodes = vec![role("a"), role("b"), role("c")];
	let edges = vec![
		TopologyEdge::reports_to("a", "b"),
		TopologyEdge::reports_to("b", "c"),
		TopologyEdge::collaborates_with("c", "a"),
	];
	let levels = build_levels(&nodes, &edges);

	assert_eq!(ids(&levels), vec![vec!["a".to_string(), "b".into(), "c".into()]]);
}

#[test]
fn disconnected_node_is_a_root() {
	let (mut nodes, edges) = org();
	nodes.push(role("loner"));
	let levels = build_levels(&nodes, &edges);

	assert_eq!(ids(&levels)[0], vec!["head".to_string(), "loner".into()]);
	assert_eq!(levels.len(), 3);
}

#[test]
fn every_level_is_centered_on_the_canvas_axis() {
	let (nodes, edges) = org();
	let layout = layout_nodes(&nodes, &edges, &LayoutConfig::default());
	let axis = layout.width / 2.0;

	for level in &layout.levels {
		let xs: Vec<f64> = level.iter().map(|n| layout.positions[&n.id].x).collect();
		let mid = (xs[0] + xs[xs.len() - 1]) / 2.0;
		assert!((mid - axis).abs() < 1e-9, "level {xs:?} is off axis {axis}");
	}
	// widest level is 216 + 32 margin, below the minimum width
	assert_eq!(layout.width, 280.0);
	assert_eq!(layout.height, 3.0 * 72.0 + 24.0);
}

#[test]
fn dangling_edges_are_not_drawn() {
	let nodes = vec![role("a"), role("b")];
	let edges = vec![
		TopologyEdge::reports_to("a", "b"),
		TopologyEdge::reports_to("a", "ghost"),
		TopologyEdge::collaborates_with("ghost", "b"),
	];
	let layout = layout_nodes(&nodes, &edges, &LayoutConfig::default());
	let drawn = layout.drawable_edges(&edges);

	assert_eq!(drawn.len(), 1);
	assert_eq!(drawn[0].edge.to_role_id, "b");
	// unknown ids are never laid out
	assert_eq!(layout.positions.len(), 2);
}

#[test]
fn single_node_sits_at_the_top_center() {
	let layout = layout_nodes(&[role("solo")], &[], &LayoutConfig::default());

	assert_eq!(layout.levels.len(), 1);
	assert_eq!(layout.position("solo"), Some(Point::new(140.0, 36.0)));
	assert_eq!((layout.width, layout.height), (280.0, 96.0));
}

#[test]
fn empty_input_gives_minimum_canvas() {
	let layout = layout_nodes(&[], &[], &LayoutConfig::default());

	assert!(layout.levels.is_empty());
	assert!(layout.positions.is_empty());
	assert_eq!((layout.width, layout.height), (280.0, 24.0));
	assert!(layout.drawable_edges(&[TopologyEdge::reports_to("a", "b")]).is_empty());
}

#[test]
fn self_loop_is_skipped_when_drawing() {
	let nodes = vec![role("a"), role("b")];
	let edges = vec![
		TopologyEdge::reports_to("a", "b"),
		TopologyEdge::collaborates_with("b", "b"),
	];
	let layout = layout_nodes(&nodes, &edges, &LayoutConfig::default());
	let drawn = layout.drawable_edges(&edges);

	assert_eq!(drawn.len(), 1);
	for d in &drawn {
		assert!(d.segment.start.x.is_finite() && d.segment.end.y.is_finite());
	}
}
