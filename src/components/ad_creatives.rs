use std::collections::HashSet;

use leptos::prelude::*;

use super::panel::fetch_status;
use crate::data::{AdAsset, AssetKind};
use crate::hooks::Fetch;

fn kind_glyph(kind: AssetKind) -> &'static str {
	match kind {
		AssetKind::Image => "\u{1F5BC}",
		AssetKind::Video => "\u{1F3AC}",
	}
}

/// Grid of advertising pipeline creatives, newest first.
///
/// Thumbnails that fail to load are replaced with a placeholder for the rest
/// of the session.
#[component]
pub fn AdCreatives(
	assets: Fetch<Vec<AdAsset>>,
	#[prop(into, default = "Campaign creatives".to_string())] title: String,
	#[prop(into, default = "Advertising pipeline: digital ads and video".to_string())]
	subtitle: String,
) -> impl IntoView {
	let (failed, set_failed) = signal(HashSet::<String>::new());

	let tile = move |asset: AdAsset| {
		let thumb = asset.thumbnail_url.clone();
		let preview = move || match &thumb {
			Some(url) if !failed.with(|f| f.contains(url)) => {
				let (src, url) = (url.clone(), url.clone());
				view! {
					<img
						src=src
						alt=""
						loading="lazy"
						on:error=move |_| {
							log::debug!("thumbnail failed to load: {url}");
							set_failed.update(|f| {
								f.insert(url.clone());
							});
						}
					/>
				}
				.into_any()
			}
			_ => view! {
				<div class="thumb-placeholder">{kind_glyph(asset.kind)}</div>
			}
			.into_any(),
		};

		let body = view! {
			<div class="ad-tile">
				<div class="ad-thumb">
					{preview}
					<span class="ad-kind">{asset.kind.label()}</span>
				</div>
				<div class="ad-meta">
					<p class="ad-brand" title=asset.campaign_name.clone()>
						{asset.brand_or_placeholder}
					</p>
					<p class="ad-campaign">{asset.campaign_name}</p>
				</div>
			</div>
		};
		match asset.external_url {
			Some(href) => view! {
				<a class="ad-link" href=href target="_blank" rel="noopener noreferrer">
					{body}
				</a>
			}
			.into_any(),
			None => body.into_any(),
		}
	};

	let grid = move || {
		let assets = assets.value.get()?;
		Some(if assets.is_empty() {
			view! {
				<div class="empty-note">
					"No campaign creatives yet. Assets will appear here when the advertising pipeline runs."
				</div>
			}
			.into_any()
		} else {
			view! { <div class="ad-grid">{assets.into_iter().map(tile).collect_view()}</div> }
				.into_any()
		})
	};

	view! {
		<section class="card panel">
			<h4 class="panel-title">{title}</h4>
			<p class="panel-subtitle">{subtitle}</p>
			{fetch_status(assets)}
			{grid}
		</section>
	}
}
