use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::department_glyph;
use super::panel::fetch_status;
use super::status_badge::StatusDot;
use crate::hooks::use_fetch;

/// Navigation: the dashboard followed by one entry per department.
#[component]
pub fn Sidebar() -> impl IntoView {
	let departments = use_fetch(|service| async move { service.departments().await });

	view! {
		<nav class="sidebar">
			<div class="sidebar-brand">
				<span class="brand-mark">"\u{2B22}"</span>
				<span class="brand-name">"Agent Cluster"</span>
			</div>
			<A href="/" attr:class="nav-item" exact=true>
				<span class="nav-icon">"\u{25A6}"</span>
				<span>"Dashboard"</span>
			</A>
			<p class="nav-heading">"Departments"</p>
			{fetch_status(departments)}
			<For
				each=move || departments.value.get().unwrap_or_default()
				key=|d| d.id.clone()
				let:department
			>
				<A href=format!("/department/{}", department.id) attr:class="nav-item">
					<span class="nav-icon">{department_glyph(department.icon)}</span>
					<span class="nav-label">{department.short_name().to_owned()}</span>
					<StatusDot status=department.status />
				</A>
			</For>
		</nav>
	}
}
