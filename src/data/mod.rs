//! Data access for the dashboard.
//!
//! Components never reach for mock records directly: they ask the
//! [`DataService`] found in context, which [`provide_data_service`] installs
//! at the root of the app.

mod cluster;
mod creative;
mod metrics;
mod mock;
mod service;
mod types;

pub use cluster::{ClusterLink, ClusterNode, ClusterTopology, simulated_cluster};
pub use creative::{
	CreativeProvider, ImageRequest, MediaRequest, VideoRequest, creative_provider, creative_providers, generate,
	generate_image, generate_video,
};
pub use metrics::{process_utilization, running_process_count, total_llm_cost, total_process_count};
pub use mock::{DEFAULT_AD_ASSET_LIMIT, MockDataService};
pub use service::{DataService, provide_data_service, use_data_service};
pub use types::*;
