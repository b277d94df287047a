use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::data::{ClusterTopology, Status};

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 12.0;
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 4.0;

// Radius of the ring the nodes start on.
const SEED_RADIUS: f64 = 90.0;

#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub label: Option<String>,
	pub status: Status,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

// Hover emphasis: wait before fading in, then ease towards the target.
const HOVER_DELAY: f64 = 0.08;
const FADE_IN_RATE: f64 = 1.8;
const FADE_OUT_RATE: f64 = 1.26;
const FADE_DONE: f64 = 0.01;

/// A hovered node and the peers it is linked to.
#[derive(Clone, Debug)]
pub struct Focus {
	pub node: DefaultNodeIdx,
	pub peers: HashSet<DefaultNodeIdx>,
	/// Peers in `Warning` or `Error`.
	pub degraded: HashSet<DefaultNodeIdx>,
}

impl Focus {
	fn contains(&self, idx: DefaultNodeIdx) -> bool {
		self.node == idx || self.peers.contains(&idx)
	}
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub focus: Option<Focus>,
	/// Previous focus, kept while its highlight fades out.
	pub fading: Option<Focus>,
	pub highlight_t: f64,
	delay_t: f64,
}

impl HoverState {
	fn shown(&self) -> Option<&Focus> {
		self.focus.as_ref().or(self.fading.as_ref())
	}
}

pub struct ClusterGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub pulse_time: f64,
	peers: HashMap<DefaultNodeIdx, Vec<DefaultNodeIdx>>,
	statuses: HashMap<DefaultNodeIdx, Status>,
	link_count: usize,
}

impl ClusterGraphState {
	pub fn new(topology: &ClusterTopology, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 120.0,
			force_spring: 0.06,
			force_max: 80.0,
			node_speed: 2000.0,
			damping_factor: 0.85,
		});
		let mut id_to_idx = HashMap::new();
		let mut statuses = HashMap::new();
		let mut peers: HashMap<DefaultNodeIdx, Vec<DefaultNodeIdx>> = HashMap::new();
		let mut link_count = 0;
		let count = topology.nodes.len().max(1) as f64;

		for (i, node) in topology.nodes.iter().enumerate() {
			// Graph space is centered on the origin; the view transform recenters it.
			let angle = i as f64 * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (SEED_RADIUS * angle.cos()) as f32,
				y: (SEED_RADIUS * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					status: node.status,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
			statuses.insert(idx, node.status);
		}

		for link in &topology.links {
			let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(link.source.as_str()), id_to_idx.get(link.target.as_str()))
			else {
				log::debug!("skipping link {} -> {}", link.source, link.target);
				continue;
			};
			graph.add_edge(src, tgt, EdgeData::default());
			peers.entry(src).or_default().push(tgt);
			peers.entry(tgt).or_default().push(src);
			link_count += 1;
		}

		Self {
			graph,
			peers,
			statuses,
			link_count,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			pulse_time: 0.0,
		}
	}

	pub fn link_count(&self) -> usize {
		self.link_count
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// world-space, scales with zoom
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Zooms by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	fn focus_on(&self, node: DefaultNodeIdx) -> Focus {
		let peers: HashSet<_> = self.peers.get(&node).into_iter().flatten().copied().collect();
		let degraded = peers
			.iter()
			.copied()
			.filter(|idx| matches!(self.statuses.get(idx), Some(Status::Warning | Status::Error)))
			.collect();
		Focus { node, peers, degraded }
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.focus.as_ref().map(|f| f.node) == node {
			return;
		}
		let previous = self.hover.focus.take();

		match node {
			Some(idx) => {
				// moving between nodes keeps the current emphasis level
				if previous.is_none() {
					self.hover.delay_t = 0.0;
				}
				self.hover.fading = None;
				self.hover.focus = Some(self.focus_on(idx));
			}
			None => self.hover.fading = previous,
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.shown().is_some_and(|f| f.contains(idx))
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.shown().is_some_and(|f| f.node == idx)
	}

	/// Whether `idx` is a troubled peer of the hovered node.
	pub fn is_degraded_peer(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.shown().is_some_and(|f| f.degraded.contains(&idx))
	}

	/// Troubled peers of the hovered node, if any node is hovered.
	pub fn degraded_peer_count(&self) -> Option<usize> {
		self.hover.shown().map(|f| f.degraded.len())
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.shown().is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		let dt = dt as f64;
		self.pulse_time += dt;

		let hover = &mut self.hover;
		if hover.focus.is_some() {
			hover.delay_t = (hover.delay_t + dt).min(HOVER_DELAY);
			if hover.delay_t >= HOVER_DELAY {
				hover.highlight_t += (1.0 - hover.highlight_t) * FADE_IN_RATE * dt;
			}
		} else {
			hover.highlight_t -= hover.highlight_t * FADE_OUT_RATE * dt;
			if hover.highlight_t < FADE_DONE {
				hover.highlight_t = 0.0;
				hover.fading = None;
			}
		}
	}

	/// Adopts a new canvas size, keeping the graph centered.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}
