use serde::{Deserialize, Serialize};

use super::types::Status;

// Every HUB_SPACING-th node aggregates the ones after it.
const HUB_SPACING: usize = 6;

/// A physical node of the agent cluster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterNode {
	/// Unique id.
	pub id: String,
	/// Drawn next to the node when present.
	pub label: Option<String>,
	/// Drives the node color.
	pub status: Status,
}

/// Network link between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
}

/// The node mesh shown on the home page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterTopology {
	/// All nodes.
	pub nodes: Vec<ClusterNode>,
	/// Links; endpoints missing from `nodes` are ignored by the canvas.
	pub links: Vec<ClusterLink>,
}

impl ClusterTopology {
	/// Number of nodes in `status`.
	pub fn count(&self, status: Status) -> usize {
		self.nodes.iter().filter(|n| n.status == status).count()
	}
}

fn status_for(i: usize) -> Status {
	if i % 8 == 0 {
		Status::Warning
	} else if i % 12 == 0 {
		Status::Error
	} else if i % 15 == 0 {
		Status::Idle
	} else {
		Status::Healthy
	}
}

/// Deterministic hub-and-spoke mesh of `n` nodes.
///
/// Nodes are grouped six at a time behind the first node of each group, and
/// the hubs are chained into a ring.
pub fn simulated_cluster(n: usize) -> ClusterTopology {
	let id = |i: usize| format!("node-{i:02}");

	let nodes = (0..n)
		.map(|i| {
			let status = status_for(i);
			let is_hub = i % HUB_SPACING == 0;
			ClusterNode {
				id: id(i),
				label: (is_hub || status != Status::Healthy).then(|| format!("Node-{i:02}")),
				status,
			}
		})
		.collect();

	let hubs: Vec<usize> = (0..n).step_by(HUB_SPACING).collect();
	let mut links: Vec<ClusterLink> = (0..n)
		.filter(|i| i % HUB_SPACING != 0)
		.map(|i| ClusterLink {
			source: id(i),
			target: id(i - i % HUB_SPACING),
		})
		.collect();
	links.extend(hubs.windows(2).map(|pair| ClusterLink {
		source: id(pair[0]),
		target: id(pair[1]),
	}));
	if hubs.len() > 2 {
		links.push(ClusterLink {
			source: id(hubs[hubs.len() - 1]),
			target: id(hubs[0]),
		});
	}

	ClusterTopology { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn statuses_follow_node_index() {
		let cluster = simulated_cluster(24);

		assert_eq!(cluster.nodes.len(), 24);
		assert_eq!(cluster.count(Status::Warning), 3);
		assert_eq!(cluster.count(Status::Error), 1);
		assert_eq!(cluster.count(Status::Idle), 1);
		assert_eq!(cluster.count(Status::Healthy), 19);
		assert_eq!(cluster.nodes[12].status, Status::Error);
	}

	#[test]
	fn spokes_attach_to_hubs_and_hubs_form_a_ring() {
		let cluster = simulated_cluster(24);
		let has = |s: &str, t: &str| cluster.links.iter().any(|l| l.source == s && l.target == t);

		assert_eq!(cluster.links.len(), 24);
		assert!(has("node-07", "node-06"));
		assert!(has("node-12", "node-18"));
		assert!(has("node-18", "node-00"));
	}

	#[test]
	fn tiny_clusters_have_no_ring() {
		assert!(simulated_cluster(0).links.is_empty());
		assert_eq!(simulated_cluster(1).links.len(), 0);
		// five spokes plus the single hub-to-hub link
		assert_eq!(simulated_cluster(7).links.len(), 6);
	}
}
