use leptos::prelude::*;

use crate::data::Status;

/// Pill with a colored dot and the status name.
#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
	view! {
		<div class=format!("status-badge {}", status.css_class())>
			<span class="status-dot" class:pulse={status == Status::Running}></span>
			{status.label()}
		</div>
	}
}

/// Bare status dot, for lists.
#[component]
pub fn StatusDot(status: Status) -> impl IntoView {
	view! { <span class=format!("status-dot {}", status.css_class()) title=status.label()></span> }
}
