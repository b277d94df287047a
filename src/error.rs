use std::sync::Arc;

use thiserror::Error;

/// Failures of the data layer.
///
/// Cheap to clone so it can be stored in signals.
#[derive(Debug, Clone, Error)]
pub enum DataError {
	/// The embedded mock fixture does not match the domain types.
	#[error("mock fixture is malformed: {0}")]
	Fixture(#[source] Arc<serde_json::Error>),
	/// A generative provider was called without credentials.
	#[error("{provider} API not configured. Set {env_key} and endpoint.")]
	ProviderNotConfigured {
		/// Provider display name.
		provider: &'static str,
		/// Environment variable holding the key.
		env_key: &'static str,
	},
}

impl From<serde_json::Error> for DataError {
	fn from(err: serde_json::Error) -> Self {
		DataError::Fixture(Arc::new(err))
	}
}
