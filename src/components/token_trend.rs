use leptos::prelude::*;

use super::charts::sparkline;
use super::panel::fetch_status;
use crate::hooks::use_fetch;

const WIDTH: f64 = 300.0;
const HEIGHT: f64 = 80.0;

/// Seven-day token usage as an area sparkline.
#[component]
pub fn TokenTrend() -> impl IntoView {
	let trend = use_fetch(|service| async move { service.token_trend().await });

	let chart = move || {
		let values = trend.value.get()?;
		let spark = sparkline(&values, WIDTH, HEIGHT)?;
		Some(view! {
			<svg
				class="sparkline"
				viewBox=format!("0 0 {WIDTH} {HEIGHT}")
				preserveAspectRatio="none"
			>
				<defs>
					<linearGradient id="trend-fill" x1="0" y1="0" x2="0" y2="1">
						<stop offset="5%" stop-color="#258cf4" stop-opacity="0.3" />
						<stop offset="95%" stop-color="#258cf4" stop-opacity="0" />
					</linearGradient>
				</defs>
				<path d=spark.area fill="url(#trend-fill)" />
				<path d=spark.line fill="none" stroke="#258cf4" stroke-width="2" />
			</svg>
		})
	};

	view! {
		<div class="token-trend">
			{fetch_status(trend)}
			{chart}
		</div>
	}
}
