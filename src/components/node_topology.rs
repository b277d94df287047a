use leptos::prelude::*;

use super::force_graph::ClusterCanvas;
use crate::data::{AlertSeverity, Status};
use crate::hooks::use_fetch;

/// Alerts raised by this panel are overlaid on the canvas.
const ALERT_SOURCE: &str = "Node Topology";

const LEGEND: [Status; 4] = [Status::Healthy, Status::Warning, Status::Error, Status::Idle];

/// The simulated cluster mesh with a status legend.
#[component]
pub fn NodeTopology() -> impl IntoView {
	let topology = use_fetch(|service| async move { service.cluster_topology().await });
	let alerts = use_fetch(|service| async move { service.alerts().await });
	let mesh = Signal::derive(move || topology.value.get().unwrap_or_default());

	let overlay = move || {
		alerts
			.value
			.get()
			.unwrap_or_default()
			.into_iter()
			.filter(|a| a.source.as_deref() == Some(ALERT_SOURCE))
			.map(|alert| {
				let class = match alert.severity {
					AlertSeverity::Error => "canvas-alert error",
					_ => "canvas-alert",
				};
				view! { <div class=class>{alert.message}</div> }
			})
			.collect_view()
	};

	let legend = LEGEND
		.iter()
		.map(|&status| {
			let count = move || {
				topology
					.value
					.with(|t| t.as_ref().map(|t| t.count(status)).unwrap_or_default())
			};
			view! {
				<span class="legend-item">
					<span class="legend-dot" style:background-color=status.color()></span>
					{status.label()}
					" ("
					{count}
					")"
				</span>
			}
		})
		.collect_view();

	view! {
		<section class="card panel">
			<h4 class="panel-title">"Node Topology"</h4>
			<div class="canvas-frame">
				<ClusterCanvas topology=mesh />
				<div class="canvas-overlay">{overlay}</div>
			</div>
			<div class="legend">{legend}</div>
		</section>
	}
}
