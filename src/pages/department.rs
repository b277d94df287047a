use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::{
	AdCreatives, ClusterDistribution, CreativeProviders, KpiCard, RoleTopology, StatusBadge,
	TaskWorkflowCard, fetch_status,
};
use crate::data::{Department, Process, Status};
use crate::hooks::{use_fetch, use_keyed_fetch};

/// Only this department runs the advertising pipeline.
const MARKETING_ID: &str = "marketing";

fn process_glyph(status: Status) -> &'static str {
	match status {
		Status::Healthy => "\u{2714}",
		Status::Warning => "\u{26A0}",
		Status::Running => "\u{21BB}",
		Status::Idle | Status::Error => "\u{23F2}",
	}
}

/// The selected process, falling back to the department's first one.
fn active_process<'a>(department: &'a Department, selected: Option<&str>) -> Option<&'a Process> {
	selected
		.and_then(|id| department.process(id))
		.or_else(|| department.processes.first())
}

/// Processes, task flows and role graph of one department.
///
/// Unknown or missing department ids redirect to the dashboard.
#[component]
pub fn DepartmentPage() -> impl IntoView {
	let params = use_params_map();
	let dept_id = move || params.with(|p| p.get("dept_id")).filter(|id| !id.is_empty());

	let department = use_keyed_fetch(dept_id, |service, id| async move { service.department(&id).await });
	let node_count =
		use_keyed_fetch(dept_id, |service, id| async move { service.department_node_count(&id).await });
	let topology =
		use_keyed_fetch(dept_id, |service, id| async move { service.department_topology(&id).await });
	let summary = use_fetch(|service| async move { service.cluster_summary().await });
	let agents = use_fetch(|service| async move { service.agents().await });
	let ads = use_fetch(|service| async move { service.ad_assets(None).await });

	let navigate = use_navigate();
	Effect::new(move |_| {
		let missing = dept_id().is_none();
		let unknown = !department.loading.get() && department.value.with(|v| matches!(v, Some(None)));
		if missing || unknown {
			log::info!("no department {:?}, back to the dashboard", dept_id());
			navigate(
				"/",
				NavigateOptions {
					replace: true,
					..Default::default()
				},
			);
		}
	});

	let current = Memo::new(move |_| department.value.get().flatten());
	let loaded = Memo::new(move |_| current.with(Option::is_some));
	let (selected, set_selected) = signal(None::<String>);
	// selection does not carry over to another department
	Effect::new(move |_| {
		let _ = dept_id();
		set_selected.set(None);
	});

	let agent_list = Signal::derive(move || agents.value.get().unwrap_or_default());
	let roles = Signal::derive(move || {
		topology.value.get().flatten().map(|t| t.roles).unwrap_or_default()
	});
	let edges = Signal::derive(move || {
		topology.value.get().flatten().map(|t| t.edges).unwrap_or_default()
	});
	let is_marketing = move || current.with(|d| d.as_ref().is_some_and(|d| d.id == MARKETING_ID));
	let short_name =
		move || current.with(|d| d.as_ref().map(|d| d.short_name().to_owned()).unwrap_or_default());

	let header = move || {
		current.get().map(|dept| {
			view! {
				<header class="page-header">
					<nav class="breadcrumb">
						<A href="/">"Home"</A>
						" / "
						<span>{dept.short_name().to_owned()}</span>
					</nav>
					<h2>{dept.name.clone()}</h2>
					<StatusBadge status=dept.status />
				</header>
			}
		})
	};

	let kpis = move || {
		let summary = summary.value.get()?;
		Some(view! {
			<KpiCard title=format!("Nodes allocated to {}", short_name())>
				<h3 class="kpi-value">{move || node_count.value.get().unwrap_or_default()}</h3>
				<p class="caption">"cluster nodes"</p>
			</KpiCard>
			<KpiCard title="Total Agents">
				<h3 class="kpi-value">{summary.total_agents}</h3>
				<p class="kpi-delta">{summary.total_agents_delta}</p>
			</KpiCard>
			<KpiCard title="Total Tokens (24h)">
				<h3 class="kpi-value">{summary.tokens_24h}</h3>
				<p class="kpi-delta">{summary.tokens_delta}</p>
			</KpiCard>
			<KpiCard title="Cluster Status">
				<p class="caption">{format!("{} healthy nodes", summary.healthy_nodes)}</p>
				<p class="caption">{format!("{} warning", summary.warning_nodes)}</p>
				<p class="caption">{format!("{} error", summary.error_nodes)}</p>
			</KpiCard>
		})
	};

	let process_list = move || {
		let dept = current.get()?;
		let active_id = selected.with(|s| active_process(&dept, s.as_deref()).map(|p| p.id.clone()));
		let rows = dept
			.processes
			.iter()
			.map(|process| {
				let id = process.id.clone();
				let is_active = active_id.as_deref() == Some(process.id.as_str());
				view! {
					<button
						class="process-row"
						class:active=is_active
						on:click=move |_| set_selected.set(Some(id.clone()))
					>
						<span class=format!("process-icon {}", process.status.css_class())>
							{process_glyph(process.status)}
						</span>
						<span class="process-text">
							<span class="process-name">{process.name.clone()}</span>
							<span class="caption">{process.description.clone()}</span>
						</span>
						<span class="process-load">
							<span>{format!("{}% Workload", process.workload)}</span>
							<span class=format!("caption {}", process.status.css_class())>
								{format!("{} Tokens", process.tokens)}
							</span>
						</span>
					</button>
				}
			})
			.collect_view();
		let empty = dept.processes.is_empty().then(|| {
			view! { <div class="empty-note">"No active processes in this department."</div> }
		});
		Some(view! {
			<section class="card panel process-list">
				<div class="panel-header">
					<h4 class="panel-title">{format!("{} Cluster", dept.name)}</h4>
					<span class="tag">{format!("{} Active Processes", dept.processes.len())}</span>
				</div>
				{rows}
				{empty}
			</section>
		})
	};

	let task_flow = move || {
		let dept = current.get()?;
		let process = selected.with(|s| active_process(&dept, s.as_deref()).cloned())?;
		if process.tasks.is_empty() {
			return None;
		}
		let cards = process
			.tasks
			.into_iter()
			.map(|task| view! { <TaskWorkflowCard task=task agents=agent_list /> })
			.collect_view();
		Some(view! {
			<section class="card panel">
				<h4 class="panel-title">{format!("{}: Task Flow", process.name)}</h4>
				<p class="panel-subtitle">"Assigned agents and workflow steps"</p>
				<div class="task-flow">{cards}</div>
			</section>
		})
	};

	let body = move || {
		if !loaded.get() {
			return view! {
				<div class="page-loading">
					{fetch_status(department)}
					<p>"Loading department\u{2026}"</p>
				</div>
			}
			.into_any();
		}
		view! {
			<section class="kpi-grid">{kpis}</section>
			<section class="grid-main">
				<div class="column-wide">
					{process_list}
					{task_flow}
					<Show when=is_marketing>
						<AdCreatives assets=ads />
					</Show>
				</div>
				<div class="column-narrow">
					<RoleTopology
						roles=roles
						edges=edges
						title=format!("{} \u{2013} Role Topology", short_name())
					/>
					<Show when=is_marketing>
						<CreativeProviders />
					</Show>
					<ClusterDistribution />
				</div>
			</section>
		}
		.into_any()
	};

	view! {
		<main class="page">
			{header}
			{body}
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::DepartmentIcon;

	fn process(id: &str) -> Process {
		Process {
			id: id.into(),
			name: id.to_uppercase(),
			status: Status::Running,
			workload: 50,
			tokens: "1k".into(),
			description: String::new(),
			tasks: Vec::new(),
		}
	}

	#[test]
	fn active_process_prefers_selection_then_first() {
		let dept = Department {
			id: "finance".into(),
			name: "Finance".into(),
			icon: DepartmentIcon::TrendingUp,
			status: Status::Healthy,
			node_count: 4,
			processes: vec![process("close"), process("audit")],
		};

		assert_eq!(active_process(&dept, Some("audit")).map(|p| p.id.as_str()), Some("audit"));
		assert_eq!(active_process(&dept, Some("gone")).map(|p| p.id.as_str()), Some("close"));
		assert_eq!(active_process(&dept, None).map(|p| p.id.as_str()), Some("close"));

		let empty = Department {
			processes: Vec::new(),
			..dept
		};
		assert!(active_process(&empty, None).is_none());
	}
}
