use leptos::prelude::*;

use super::charts::Donut;
use super::panel::fetch_status;
use crate::hooks::use_fetch;

/// Agent frameworks as a donut chart, followed by the top token consumers.
#[component]
pub fn ClusterDistribution() -> impl IntoView {
	let distribution = use_fetch(|service| async move { service.agent_distribution().await });
	let consumers = use_fetch(|service| async move { service.top_consumers().await });
	let donut = Donut::default();

	let chart = move || {
		let entries = distribution.value.get()?;
		let values: Vec<f64> = entries.iter().map(|e| f64::from(e.value)).collect();
		let slices = donut
			.segments(&values)
			.into_iter()
			.map(|segment| {
				let entry = &entries[segment.index];
				view! {
					<path d=segment.path fill=entry.color.clone()>
						<title>{format!("{}: {}", entry.name, entry.value)}</title>
					</path>
				}
			})
			.collect_view();
		let legend = entries
			.iter()
			.map(|entry| {
				view! {
					<div class="legend-row">
						<span class="legend-swatch" style:background-color=entry.color.clone()></span>
						<span class="legend-name">{entry.name.clone()}</span>
						<span class="legend-value">{format!("{} Agents", entry.value)}</span>
					</div>
				}
			})
			.collect_view();
		Some(view! {
			<svg class="donut" viewBox="0 0 200 200" width="200" height="200">
				{slices}
			</svg>
			<div class="legend-list">{legend}</div>
		})
	};

	let top = move || {
		consumers
			.value
			.get()
			.unwrap_or_default()
			.into_iter()
			.map(|consumer| {
				view! {
					<div class="consumer-row">
						<div>
							<p class="consumer-name">{consumer.name}</p>
							<p class="consumer-role">{consumer.role}</p>
						</div>
						<div class="consumer-tokens">
							<p>{consumer.tokens}</p>
							<p class="caption">"TOKENS"</p>
						</div>
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<section class="card panel">
			<h4 class="panel-title">"Cluster Distribution"</h4>
			{fetch_status(distribution)}
			{chart}
			<div class="panel-divider"></div>
			<h5 class="panel-subtitle">"Top Token Consumers"</h5>
			{fetch_status(consumers)}
			<div class="consumer-list">{top}</div>
		</section>
	}
}
