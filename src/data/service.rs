use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use super::cluster::ClusterTopology;
use super::types::*;
use crate::error::DataError;

/// Read access to everything the dashboard shows.
///
/// Every call returns an owned copy; implementations keep no per-call state,
/// so calls may be repeated or dropped freely. Lookups by id yield `Ok(None)`
/// for unknown ids.
#[async_trait(?Send)]
pub trait DataService {
	/// All departments, in sidebar order.
	async fn departments(&self) -> Result<Vec<Department>, DataError>;

	/// One department.
	async fn department(&self, id: &str) -> Result<Option<Department>, DataError>;

	/// Nodes allocated to a department, 0 if unknown.
	async fn department_node_count(&self, id: &str) -> Result<u32, DataError>;

	/// Role graph of a department.
	async fn department_topology(&self, id: &str) -> Result<Option<DepartmentTopology>, DataError>;

	/// Processes of a department, empty if unknown.
	async fn processes(&self, department_id: &str) -> Result<Vec<Process>, DataError>;

	/// Tasks of one process, empty if either id is unknown.
	async fn tasks(&self, process_id: &str, department_id: &str) -> Result<Vec<Task>, DataError>;

	/// Cluster-wide KPIs.
	async fn cluster_summary(&self) -> Result<ClusterSummary, DataError>;

	/// Open alerts.
	async fn alerts(&self) -> Result<Vec<Alert>, DataError>;

	/// Agents per framework.
	async fn agent_distribution(&self) -> Result<Vec<AgentDistributionEntry>, DataError>;

	/// Heaviest token users.
	async fn top_consumers(&self) -> Result<Vec<TopConsumer>, DataError>;

	/// Daily token usage in millions, oldest first.
	async fn token_trend(&self) -> Result<Vec<f64>, DataError>;

	/// Agents owned by a department.
	async fn agents_by_department(&self, department_id: &str) -> Result<Vec<Agent>, DataError>;

	/// One agent.
	async fn agent(&self, id: &str) -> Result<Option<Agent>, DataError>;

	/// Every agent.
	async fn agents(&self) -> Result<Vec<Agent>, DataError>;

	/// Models the cluster can route to.
	async fn llm_models(&self) -> Result<Vec<LlmModel>, DataError>;

	/// Active LLM access route.
	async fn llm_provider(&self) -> Result<LlmProvider, DataError>;

	/// Newest creatives first, at most `limit` (a default applies when `None`).
	async fn ad_assets(&self, limit: Option<usize>) -> Result<Vec<AdAsset>, DataError>;

	/// Simulated physical node mesh.
	async fn cluster_topology(&self) -> Result<ClusterTopology, DataError>;
}

// Leptos context values must be Send + Sync; the app only ever runs on the
// browser's main thread.
#[derive(Clone)]
struct DataContext(SendWrapper<Rc<dyn DataService>>);

/// Makes `service` available to every component below the caller.
pub fn provide_data_service(service: Rc<dyn DataService>) {
	provide_context(DataContext(SendWrapper::new(service)));
}

/// The service installed by [`provide_data_service`].
///
/// # Panics
///
/// When no service was provided above the calling component.
pub fn use_data_service() -> Rc<dyn DataService> {
	let ctx = expect_context::<DataContext>();
	Rc::clone(&*ctx.0)
}
