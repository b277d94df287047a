use std::collections::{HashMap, HashSet};

use super::types::{RoleNode, TopologyEdge};

/// Splits `nodes` into breadth-first levels, topmost first.
///
/// Level 0 holds every node without an incoming edge (of any kind), in input
/// order. Each following level is the first-seen union of the children of
/// the previous one, minus already placed or unknown ids. Nodes that the
/// walk never reaches (cycles without a root, for instance) end up together
/// in one trailing level.
pub fn build_levels<'a>(nodes: &'a [RoleNode], edges: &[TopologyEdge]) -> Vec<Vec<&'a RoleNode>> {
	let by_id: HashMap<&str, &RoleNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
	let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
	let mut has_incoming: HashSet<&str> = HashSet::new();

	for edge in edges {
		has_incoming.insert(edge.to_role_id.as_str());
		children
			.entry(edge.from_role_id.as_str())
			.or_default()
			.push(edge.to_role_id.as_str());
	}

	let mut levels: Vec<Vec<&RoleNode>> = Vec::new();
	let mut placed: HashSet<&str> = HashSet::new();
	let mut current: Vec<&RoleNode> = nodes
		.iter()
		.filter(|n| !has_incoming.contains(n.id.as_str()))
		.collect();

	while !current.is_empty() {
		placed.extend(current.iter().map(|n| n.id.as_str()));

		let mut seen: HashSet<&str> = HashSet::new();
		let next: Vec<&RoleNode> = current
			.iter()
			.flat_map(|n| children.get(n.id.as_str()).into_iter().flatten())
			.copied()
			.filter(|id| seen.insert(*id))
			.filter(|id| !placed.contains(id))
			.filter_map(|id| by_id.get(id).copied())
			.collect();

		levels.push(std::mem::replace(&mut current, next));
	}

	let remaining: Vec<&RoleNode> = nodes
		.iter()
		.filter(|n| !placed.contains(n.id.as_str()))
		.collect();
	if !remaining.is_empty() {
		log::debug!("{} role(s) unreachable from roots, grouped last", remaining.len());
		levels.push(remaining);
	}

	levels
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str) -> RoleNode {
		RoleNode::new(id, id.to_uppercase(), id)
	}

	fn ids(levels: &[Vec<&RoleNode>]) -> Vec<Vec<String>> {
		levels
			.iter()
			.map(|level| level.iter().map(|n| n.id.clone()).collect())
			.collect()
	}

	#[test]
	fn empty_input_has_no_levels() {
		assert!(build_levels(&[], &[]).is_empty());
	}

	#[test]
	fn roots_are_nodes_without_incoming_edges() {
		let nodes = [node("a"), node("b"), node("c")];
		let edges = [TopologyEdge::reports_to("a", "b")];

		assert_eq!(ids(&build_levels(&nodes, &edges)), [vec!["a", "c"], vec!["b"]]);
	}

	#[test]
	fn collaboration_edges_also_count_as_incoming() {
		let nodes = [node("lead"), node("x"), node("y")];
		let edges = [
			TopologyEdge::reports_to("lead", "x"),
			TopologyEdge::collaborates_with("x", "y"),
		];

		assert_eq!(
			ids(&build_levels(&nodes, &edges)),
			[vec!["lead"], vec!["x"], vec!["y"]]
		);
	}

	#[test]
	fn cycle_without_root_falls_back_to_one_level() {
		let nodes = [node("a"), node("b")];
		let edges = [TopologyEdge::reports_to("a", "b"), TopologyEdge::reports_to("b", "a")];

		assert_eq!(ids(&build_levels(&nodes, &edges)), [vec!["a", "b"]]);
	}

	#[test]
	fn node_reached_twice_is_placed_at_first_depth() {
		// cmo -> creative -> copywriter, cmo -> art -> designer, copywriter ~> designer
		let nodes = [node("cmo"), node("creative"), node("art"), node("copywriter"), node("designer")];
		let edges = [
			TopologyEdge::reports_to("cmo", "creative"),
			TopologyEdge::reports_to("creative", "art"),
			TopologyEdge::reports_to("creative", "copywriter"),
			TopologyEdge::reports_to("art", "designer"),
			TopologyEdge::collaborates_with("copywriter", "designer"),
		];

		assert_eq!(
			ids(&build_levels(&nodes, &edges)),
			[
				vec!["cmo"],
				vec!["creative"],
				vec!["art", "copywriter"],
				vec!["designer"],
			]
		);
	}

	#[test]
	fn unknown_ids_are_skipped_and_unreached_cycle_trails() {
		let nodes = [node("root"), node("child"), node("p"), node("q")];
		let edges = [
			TopologyEdge::reports_to("root", "child"),
			TopologyEdge::reports_to("root", "ghost"),
			TopologyEdge::reports_to("p", "q"),
			TopologyEdge::reports_to("q", "p"),
		];

		assert_eq!(
			ids(&build_levels(&nodes, &edges)),
			[vec!["root"], vec!["child"], vec!["p", "q"]]
		);
	}
}
