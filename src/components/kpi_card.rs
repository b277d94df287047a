use leptos::prelude::*;

/// Titled KPI tile.
#[component]
pub fn KpiCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
	view! {
		<div class="card kpi-card">
			<p class="kpi-title">{title}</p>
			{children()}
		</div>
	}
}
