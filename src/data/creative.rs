//! Generative providers behind the advertising pipeline.
//!
//! None of them is wired to a real API yet: the generate calls always fail
//! with [`DataError::ProviderNotConfigured`], naming the key to set.

use serde::Serialize;

use super::types::{AssetKind, CreativeProviderId};
use crate::error::DataError;

/// Static description of a generative provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreativeProvider {
	/// Stable id.
	pub id: CreativeProviderId,
	/// Display name.
	pub name: &'static str,
	/// One-sentence pitch shown on the card.
	pub description: &'static str,
	/// Media kinds the provider can produce.
	pub capabilities: &'static [AssetKind],
	/// Whether an API key is configured.
	pub connected: bool,
	/// Environment variable expected to hold the key.
	pub env_key: &'static str,
}

impl CreativeProvider {
	/// Whether the provider produces `kind`.
	pub fn supports(&self, kind: AssetKind) -> bool {
		self.capabilities.contains(&kind)
	}

	/// One-line capability summary.
	pub fn summary(&self) -> &'static str {
		match (self.supports(AssetKind::Image), self.supports(AssetKind::Video)) {
			(true, true) => "Image & video",
			(_, true) => "Short-form video ads",
			_ => "Static and concept art",
		}
	}

	fn not_configured(&self) -> DataError {
		DataError::ProviderNotConfigured {
			provider: self.name,
			env_key: self.env_key,
		}
	}
}

static PROVIDERS: [CreativeProvider; 3] = [
	CreativeProvider {
		id: CreativeProviderId::Higgsfield,
		name: "Higgsfield",
		description: "AI video generation. Connect Higgsfield API for short-form video ads.",
		capabilities: &[AssetKind::Video],
		connected: false,
		env_key: "HIGGSFIELD_API_KEY",
	},
	CreativeProvider {
		id: CreativeProviderId::Krea,
		name: "KREA",
		description: "AI image generation. Connect KREA API for static and concept art.",
		capabilities: &[AssetKind::Image],
		connected: false,
		env_key: "KREA_API_KEY",
	},
	CreativeProvider {
		id: CreativeProviderId::Fal,
		name: "FAL",
		description: "fal.ai image & video models. Connect FAL API for fast iteration.",
		capabilities: &[AssetKind::Image, AssetKind::Video],
		connected: false,
		env_key: "FAL_KEY",
	},
];

/// All providers, in display order.
pub fn creative_providers() -> &'static [CreativeProvider] {
	&PROVIDERS
}

/// Provider by id.
pub fn creative_provider(id: CreativeProviderId) -> Option<&'static CreativeProvider> {
	PROVIDERS.iter().find(|p| p.id == id)
}

fn provider(id: CreativeProviderId) -> &'static CreativeProvider {
	// every id has an entry in PROVIDERS
	&PROVIDERS[id as usize]
}

/// Parameters of a short video ad.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VideoRequest {
	/// Text prompt.
	pub prompt: Option<String>,
	/// Clip length.
	pub duration_seconds: Option<u32>,
	/// e.g. `9:16`.
	pub aspect_ratio: Option<String>,
}

/// Parameters of a static image ad.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
	/// Text prompt.
	pub prompt: Option<String>,
	/// Pixels.
	pub width: Option<u32>,
	/// Pixels.
	pub height: Option<u32>,
}

/// Parameters of a generic image or video generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MediaRequest {
	/// Image or video.
	pub kind: AssetKind,
	/// Text prompt.
	pub prompt: Option<String>,
	/// Provider model id; the provider default when absent.
	pub model: Option<String>,
}

/// Queues a video on Higgsfield, returning the job id.
pub async fn generate_video(request: &VideoRequest) -> Result<String, DataError> {
	log::debug!("higgsfield video request: {request:?}");
	Err(provider(CreativeProviderId::Higgsfield).not_configured())
}

/// Generates an image on KREA, returning its URL.
pub async fn generate_image(request: &ImageRequest) -> Result<String, DataError> {
	log::debug!("krea image request: {request:?}");
	Err(provider(CreativeProviderId::Krea).not_configured())
}

/// Generates an image or video on FAL, returning its URL.
pub async fn generate(request: &MediaRequest) -> Result<String, DataError> {
	log::debug!("fal {:?} request: {request:?}", request.kind);
	Err(provider(CreativeProviderId::Fal).not_configured())
}
