use leptos::prelude::*;

use crate::data::{AssetKind, CreativeProvider, creative_providers};

fn provider_row(provider: &'static CreativeProvider) -> impl IntoView {
	let glyph = if provider.supports(AssetKind::Video) {
		"\u{1F3AC}"
	} else {
		"\u{1F5BC}"
	};
	let connection = if provider.connected {
		view! { <span class="provider-connected">"Connected"</span> }.into_any()
	} else {
		view! {
			<span class="provider-key" title=format!("Set {}", provider.env_key)>
				"\u{1F511} Add key"
			</span>
		}
		.into_any()
	};
	view! {
		<div class="provider-row">
			<div class="provider-icon">{glyph}</div>
			<div class="provider-text">
				<p class="provider-name">{provider.name}</p>
				<p class="provider-summary">{provider.summary()}</p>
			</div>
			{connection}
		</div>
	}
}

/// Generative providers of the advertising pipeline and their key status.
#[component]
pub fn CreativeProviders() -> impl IntoView {
	view! {
		<section class="card panel">
			<h4 class="panel-title">"Advertising pipeline"</h4>
			<p class="panel-subtitle">
				"Image and video generation for campaigns. Add API keys in env to enable."
			</p>
			<div class="provider-list">
				{creative_providers().iter().map(provider_row).collect_view()}
			</div>
		</section>
	}
}
