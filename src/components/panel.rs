use leptos::prelude::*;

use crate::hooks::Fetch;

/// Card with a section heading.
#[component]
pub fn Panel(
	#[prop(into)] title: String,
	#[prop(optional, into)] class: String,
	children: Children,
) -> impl IntoView {
	view! {
		<section class=format!("card panel {class}")>
			<h4 class="panel-title">{title}</h4>
			{children()}
		</section>
	}
}

/// Skeleton while `fetch` is loading, its error once it failed, nothing otherwise.
pub fn fetch_status<T: Send + Sync + 'static>(fetch: Fetch<T>) -> impl IntoView {
	move || {
		if let Some(err) = fetch.error.get() {
			Some(view! { <p class="fetch-error">{err.to_string()}</p> }.into_any())
		} else if fetch.loading.get() {
			Some(view! { <div class="skeleton"></div> }.into_any())
		} else {
			None
		}
	}
}
