use leptos::prelude::*;

use crate::topology::{
	EdgeKind, LayoutConfig, Point, RoleNode, Segment, TopologyEdge, TopologyLayout, display_title,
	layout_nodes,
};

const LINE_COLOR: &str = "rgb(100 116 139)";
const ARROW_ID: &str = "role-arrowhead";

/// One line of the diagram.
#[derive(Clone, Debug, PartialEq)]
struct EdgeLine {
	key: String,
	kind: EdgeKind,
	segment: Segment,
}

/// A role circle and its two text lines.
#[derive(Clone, Debug, PartialEq)]
struct RoleMark {
	id: String,
	label: String,
	title: String,
	center: Point,
}

/// Everything the SVG needs, derived from one layout pass.
#[derive(Clone, Debug, PartialEq)]
struct RoleScene {
	width: f64,
	height: f64,
	lines: Vec<EdgeLine>,
	marks: Vec<RoleMark>,
}

impl RoleScene {
	fn build(roles: &[RoleNode], edges: &[TopologyEdge], config: &LayoutConfig) -> Self {
		let layout: TopologyLayout = layout_nodes(roles, edges, config);
		let lines = layout
			.drawable_edges(edges)
			.into_iter()
			.map(|d| EdgeLine {
				key: format!("{}-{}", d.edge.from_role_id, d.edge.to_role_id),
				kind: d.edge.kind,
				segment: d.segment,
			})
			.collect();
		let marks = roles
			.iter()
			.filter_map(|role| {
				Some(RoleMark {
					id: role.id.clone(),
					label: role.label.clone(),
					title: display_title(&role.role_title).into_owned(),
					center: layout.position(&role.id)?,
				})
			})
			.collect();
		Self {
			width: layout.width,
			height: layout.height,
			lines,
			marks,
		}
	}
}

/// Leveled org chart of a department's roles.
///
/// `reports_to` edges are solid, `collaborates_with` edges dashed; both end in
/// an arrowhead at the target.
#[component]
pub fn RoleTopology(
	#[prop(into)] roles: Signal<Vec<RoleNode>>,
	#[prop(into)] edges: Signal<Vec<TopologyEdge>>,
	#[prop(into, default = "Node Topology".to_string())] title: String,
) -> impl IntoView {
	let config = LayoutConfig::default();
	let radius = config.node_radius;
	let scene = Memo::new(move |_| {
		roles.with(|roles| edges.with(|edges| RoleScene::build(roles, edges, &config)))
	});

	let diagram = move || {
		if roles.with(Vec::is_empty) {
			return view! {
				<div class="topology-empty">
					<p>"No role topology for this department."</p>
				</div>
			}
			.into_any();
		}
		let RoleScene {
			width,
			height,
			lines,
			marks,
		} = scene.get();

		let lines = lines
			.into_iter()
			.map(|line| {
				let Segment { start, end } = line.segment;
				view! {
					<line
						data-edge=line.key
						x1=start.x
						y1=start.y
						x2=end.x
						y2=end.y
						stroke=LINE_COLOR
						stroke-width="1.5"
						stroke-dasharray=line.kind.dash_array()
						marker-end=format!("url(#{ARROW_ID})")
					/>
				}
			})
			.collect_view();
		let marks = marks
			.into_iter()
			.map(|mark| {
				let Point { x, y } = mark.center;
				view! {
					<g class="role-node" data-role=mark.id>
						<circle
							cx=x
							cy=y
							r={radius - 2.0}
							fill="rgb(30 41 59)"
							stroke="rgb(37 99 235)"
							stroke-width="2"
						/>
						<text x=x y={y - 6.0} text-anchor="middle" class="role-label">
							{mark.label}
						</text>
						<text x=x y={y + 8.0} text-anchor="middle" class="role-title">
							{mark.title}
						</text>
					</g>
				}
			})
			.collect_view();

		view! {
			<div class="topology-scroll">
				<svg width=width height=height class="role-topology">
					<defs>
						<marker
							id=ARROW_ID
							markerWidth="8"
							markerHeight="6"
							refX="7"
							refY="3"
							orient="auto"
						>
							<polygon points="0 0, 8 3, 0 6" fill=LINE_COLOR />
						</marker>
					</defs>
					{lines}
					{marks}
				</svg>
			</div>
		}
		.into_any()
	};

	view! {
		<section class="card panel">
			<h4 class="panel-title">{title}</h4>
			{diagram}
			<div class="legend">
				<span class="legend-item">
					<span class="legend-line"></span>
					"Reports to"
				</span>
				<span class="legend-item">
					<span class="legend-line dashed"></span>
					"Collaborates with"
				</span>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scene_has_one_mark_per_role_and_skips_dangling_edges() {
		let roles = vec![
			RoleNode::new("cfo", "CFO", "Chief Financial Officer"),
			RoleNode::new("ap", "AP", "Payables"),
		];
		let edges = vec![
			TopologyEdge::reports_to("cfo", "ap"),
			TopologyEdge::collaborates_with("ap", "ghost"),
		];
		let scene = RoleScene::build(&roles, &edges, &LayoutConfig::default());

		assert_eq!(scene.marks.len(), 2);
		assert_eq!(scene.marks[0].title, "Chief Financ\u{2026}");
		assert_eq!(scene.lines.len(), 1);
		assert_eq!(scene.lines[0].key, "cfo-ap");
		assert_eq!(scene.lines[0].kind, EdgeKind::ReportsTo);
		// 28 + 4 below the cfo center, 28 + 4 above the ap center
		assert_eq!(scene.lines[0].segment.start, Point::new(140.0, 68.0));
		assert_eq!(scene.lines[0].segment.end, Point::new(140.0, 76.0));
	}

	#[test]
	fn empty_scene_keeps_minimum_canvas() {
		let scene = RoleScene::build(&[], &[], &LayoutConfig::default());
		assert!(scene.marks.is_empty() && scene.lines.is_empty());
		assert_eq!((scene.width, scene.height), (280.0, 24.0));
	}
}
