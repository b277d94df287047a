use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{
	ClusterDistribution, KpiCard, LlmCostPanel, NodeTopology, Panel, StatusDot, TokenTrend,
	fetch_status,
};
use crate::data::{
	AlertSeverity, ClusterSummary, process_utilization, running_process_count, total_process_count,
};
use crate::hooks::use_fetch;

fn summary_kpis(summary: ClusterSummary) -> impl IntoView {
	let rows = [
		("Healthy Nodes", summary.healthy_nodes, "healthy"),
		("Warning State", summary.warning_nodes, "warning"),
		("Idle/Sleep", summary.idle_nodes, "idle"),
		("Error", summary.error_nodes, "error"),
	]
	.into_iter()
	// the error row only shows up when something is failing
	.filter(|&(label, n, _)| label != "Error" || n > 0)
	.map(|(label, n, class)| {
		view! {
			<div class="kpi-row">
				<span>{label}</span>
				<span class=format!("kpi-count {class}")>{n}</span>
			</div>
		}
	})
	.collect_view();

	view! {
		<KpiCard title="Total Agents">
			<h3 class="kpi-value">{summary.total_agents}</h3>
			<p class="kpi-delta">{format!("\u{2197} {}", summary.total_agents_delta)}</p>
		</KpiCard>
		<KpiCard title="Total Tokens (24h)">
			<h3 class="kpi-value">{summary.tokens_24h}</h3>
			<p class="kpi-delta">{format!("\u{2197} {}", summary.tokens_delta)}</p>
			<div class="progress-track">
				<div class="progress-fill" style:width=format!("{}%", summary.tokens_threshold_pct)></div>
			</div>
			<p class="caption">
				{format!("{}% of daily threshold reached", summary.tokens_threshold_pct)}
			</p>
		</KpiCard>
		<KpiCard title="Avg Workload">
			<h3 class="kpi-value">{format!("{}%", summary.avg_workload)}</h3>
			<p class="caption">{summary.avg_workload_label}</p>
			<p class="caption">{format!("{} nodes optimal", summary.nodes_optimal)}</p>
		</KpiCard>
		<KpiCard title="Cluster Status">
			<div class="kpi-rows">{rows}</div>
		</KpiCard>
	}
}

/// Cluster-wide dashboard.
#[component]
pub fn Home() -> impl IntoView {
	let summary = use_fetch(|service| async move { service.cluster_summary().await });
	let alerts = use_fetch(|service| async move { service.alerts().await });
	let departments = use_fetch(|service| async move { service.departments().await });

	let kpis = move || summary.value.get().map(summary_kpis);

	let alert_list = move || {
		alerts
			.value
			.get()
			.unwrap_or_default()
			.into_iter()
			.map(|alert| {
				let class = match alert.severity {
					AlertSeverity::Error => "alert error",
					AlertSeverity::Warning => "alert warning",
					AlertSeverity::Info => "alert info",
				};
				view! {
					<div class=class>
						<p class="alert-message">{alert.message}</p>
						{alert.source.map(|s| view! { <p class="alert-source">{s}</p> })}
					</div>
				}
			})
			.collect_view()
	};

	let health = move || {
		departments
			.value
			.get()
			.unwrap_or_default()
			.into_iter()
			.map(|dept| {
				view! {
					<A href=format!("/department/{}", dept.id) attr:class="health-cell">
						<StatusDot status=dept.status />
						<span title=dept.name.clone()>{dept.short_name().to_owned()}</span>
					</A>
				}
			})
			.collect_view()
	};

	let processes = move || {
		departments.value.with(|d| {
			let d = d.as_deref().unwrap_or_default();
			let pct = process_utilization(d) * 100.0;
			view! {
				<div class="active-count">
					<span class="kpi-value">{running_process_count(d)}</span>
					<span class="caption">
						{format!("of {} processes running", total_process_count(d))}
					</span>
				</div>
				<div class="progress-track">
					<div class="progress-fill" style:width=format!("{pct:.0}%")></div>
				</div>
			}
		})
	};

	view! {
		<main class="page">
			<header class="page-header">
				<nav class="breadcrumb">"Home"</nav>
				<h2>"Dashboard"</h2>
			</header>

			<section class="kpi-grid">{fetch_status(summary)} {kpis}</section>

			<section class="grid-3">
				<Panel title="\u{26A0} Recent Alerts">
					{fetch_status(alerts)}
					<div class="alert-list">{alert_list}</div>
				</Panel>
				<Panel title="Department Health">
					{fetch_status(departments)}
					<div class="health-grid">{health}</div>
				</Panel>
				<Panel title="Active Processes">{processes}</Panel>
			</section>

			<section class="grid-main">
				<div class="column-wide">
					<Panel title="Token Usage (7 days)">
						<TokenTrend />
					</Panel>
					<NodeTopology />
				</div>
				<div class="column-narrow">
					<ClusterDistribution />
					<LlmCostPanel />
				</div>
			</section>
		</main>
	}
}
