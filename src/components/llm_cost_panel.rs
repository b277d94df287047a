use leptos::prelude::*;

use super::charts::{bar_domain_max, bar_length};
use super::panel::fetch_status;
use crate::data::{LlmModel, LlmProvider, total_llm_cost};
use crate::hooks::use_fetch;

// Axis never shrinks below $0.50, so all-free periods still draw a scale.
const MIN_DOMAIN_USD: f64 = 0.5;
const MIN_BAR: f64 = 2.0;
const LABEL_WIDTH: f64 = 100.0;
const BAR_SPAN: f64 = 180.0;
const ROW_HEIGHT: f64 = 22.0;

fn cost_label(model: &LlmModel) -> String {
	let cost = model.cost_usd.unwrap_or(0.0);
	if cost == 0.0 {
		"$0.00 (free)".to_string()
	} else {
		format!("${cost:.2}")
	}
}

/// Routing provider, total spend and per-model cost bars.
#[component]
pub fn LlmCostPanel() -> impl IntoView {
	let models = use_fetch(|service| async move { service.llm_models().await });
	let provider = use_fetch(|service| async move { service.llm_provider().await });

	let provider_badge = move || {
		let current = provider.value.get();
		let glyph = match current {
			Some(LlmProvider::OpenRouter) => "\u{1F310}",
			_ => "\u{1F511}",
		};
		let label = current.map_or("\u{2014}", LlmProvider::label);
		view! {
			<span class="provider-badge" title=label>
				{glyph}
				" "
				{label}
			</span>
		}
	};

	let total = move || {
		let cost = models.value.with(|m| m.as_deref().map_or(0.0, total_llm_cost));
		format!("${cost:.2}")
	};

	let bars = move || {
		let models = models.value.get()?;
		let costs: Vec<f64> = models.iter().map(|m| m.cost_usd.unwrap_or(0.0)).collect();
		let domain = bar_domain_max(&costs, MIN_DOMAIN_USD);
		let height = models.len() as f64 * ROW_HEIGHT;
		let rows = models
			.iter()
			.zip(&costs)
			.enumerate()
			.map(|(i, (model, &cost))| {
				let y = i as f64 * ROW_HEIGHT;
				let fill = if model.in_use {
					"#258cf4"
				} else {
					"rgba(51, 65, 72, 0.6)"
				};
				let usage = if model.in_use { "In use" } else { "Not in use" };
				view! {
					<g class="cost-row">
						<text x={LABEL_WIDTH - 6.0} y={y + 15.0} text-anchor="end" class="cost-model">
							{model.name.clone()}
						</text>
						<rect
							x=LABEL_WIDTH
							y={y + 4.0}
							width={bar_length(cost, domain, BAR_SPAN, MIN_BAR)}
							height={ROW_HEIGHT - 8.0}
							rx="4"
							fill=fill
						>
							<title>{format!("{}: {} ({usage})", model.name, cost_label(model))}</title>
						</rect>
					</g>
				}
			})
			.collect_view();
		Some(view! {
			<svg
				class="cost-bars"
				viewBox=format!("0 0 {} {height}", LABEL_WIDTH + BAR_SPAN)
				width="100%"
				height=height
			>
				{rows}
			</svg>
		})
	};

	let in_use = move || {
		models
			.value
			.get()
			.unwrap_or_default()
			.into_iter()
			.filter(|m| m.in_use)
			.map(|m| view! { <span class="tag">{format!("{} (in use)", m.name)}</span> })
			.collect_view()
	};

	view! {
		<section class="card panel">
			<h4 class="panel-title">"\u{1F4B2} Token Cost & LLM"</h4>
			<div class="provider-line">
				<span class="caption">"Provider"</span>
				{provider_badge}
			</div>
			<p class="caption">"Total token cost (current period)"</p>
			<p class="cost-total">{total}</p>
			{fetch_status(models)}
			{bars}
			<div class="tag-list">{in_use}</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn model(cost: Option<f64>) -> LlmModel {
		LlmModel {
			id: "m".into(),
			name: "M".into(),
			cost_usd: cost,
			in_use: cost.is_some(),
		}
	}

	#[test]
	fn free_and_missing_costs_read_as_free() {
		assert_eq!(cost_label(&model(None)), "$0.00 (free)");
		assert_eq!(cost_label(&model(Some(0.0))), "$0.00 (free)");
		assert_eq!(cost_label(&model(Some(1.234))), "$1.23");
	}
}
