use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use super::cluster::{ClusterTopology, simulated_cluster};
use super::service::DataService;
use super::types::*;
use crate::error::DataError;

const FIXTURE: &str = include_str!("fixtures/mock_data.json");
const CLUSTER_NODES: usize = 24;

/// Creatives returned by [`DataService::ad_assets`] when no limit is given.
pub const DEFAULT_AD_ASSET_LIMIT: usize = 12;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Fixture {
	agents: Vec<Agent>,
	departments: Vec<Department>,
	topologies: Vec<DepartmentTopology>,
	cluster_summary: ClusterSummary,
	alerts: Vec<Alert>,
	agent_distribution: Vec<AgentDistributionEntry>,
	top_consumers: Vec<TopConsumer>,
	token_trend: Vec<f64>,
	llm_models: Vec<LlmModel>,
	llm_provider: LlmProvider,
	ad_assets: Vec<AdAsset>,
}

/// [`DataService`] over a static fixture.
#[derive(Clone, Debug)]
pub struct MockDataService {
	fixture: Fixture,
	cluster: ClusterTopology,
	latency_ms: u32,
}

impl MockDataService {
	/// Service over the fixture bundled with the crate.
	pub fn new() -> Result<Self, DataError> {
		Self::from_json(FIXTURE)
	}

	/// Service over a fixture in the bundled JSON shape.
	pub fn from_json(json: &str) -> Result<Self, DataError> {
		let fixture: Fixture = serde_json::from_str(json)?;
		log::debug!(
			"loaded mock fixture: {} departments, {} topologies, {} agents",
			fixture.departments.len(),
			fixture.topologies.len(),
			fixture.agents.len()
		);
		Ok(Self {
			fixture,
			cluster: simulated_cluster(CLUSTER_NODES),
			latency_ms: 0,
		})
	}

	/// Delays every answer by `ms` milliseconds.
	pub fn with_latency(mut self, ms: u32) -> Self {
		self.latency_ms = ms;
		self
	}

	async fn respond<T>(&self, value: T) -> Result<T, DataError> {
		if self.latency_ms > 0 {
			TimeoutFuture::new(self.latency_ms).await;
		}
		Ok(value)
	}

	fn find_department(&self, id: &str) -> Option<&Department> {
		self.fixture.departments.iter().find(|d| d.id == id)
	}
}

#[async_trait(?Send)]
impl DataService for MockDataService {
	async fn departments(&self) -> Result<Vec<Department>, DataError> {
		self.respond(self.fixture.departments.clone()).await
	}

	async fn department(&self, id: &str) -> Result<Option<Department>, DataError> {
		self.respond(self.find_department(id).cloned()).await
	}

	async fn department_node_count(&self, id: &str) -> Result<u32, DataError> {
		self.respond(self.find_department(id).map_or(0, |d| d.node_count))
			.await
	}

	async fn department_topology(&self, id: &str) -> Result<Option<DepartmentTopology>, DataError> {
		let topology = self
			.fixture
			.topologies
			.iter()
			.find(|t| t.department_id == id)
			.cloned();
		self.respond(topology).await
	}

	async fn processes(&self, department_id: &str) -> Result<Vec<Process>, DataError> {
		let processes = self
			.find_department(department_id)
			.map(|d| d.processes.clone())
			.unwrap_or_default();
		self.respond(processes).await
	}

	async fn tasks(&self, process_id: &str, department_id: &str) -> Result<Vec<Task>, DataError> {
		let tasks = self
			.find_department(department_id)
			.and_then(|d| d.process(process_id))
			.map(|p| p.tasks.clone())
			.unwrap_or_default();
		self.respond(tasks).await
	}

	async fn cluster_summary(&self) -> Result<ClusterSummary, DataError> {
		self.respond(self.fixture.cluster_summary.clone()).await
	}

	async fn alerts(&self) -> Result<Vec<Alert>, DataError> {
		self.respond(self.fixture.alerts.clone()).await
	}

	async fn agent_distribution(&self) -> Result<Vec<AgentDistributionEntry>, DataError> {
		self.respond(self.fixture.agent_distribution.clone()).await
	}

	async fn top_consumers(&self) -> Result<Vec<TopConsumer>, DataError> {
		self.respond(self.fixture.top_consumers.clone()).await
	}

	async fn token_trend(&self) -> Result<Vec<f64>, DataError> {
		self.respond(self.fixture.token_trend.clone()).await
	}

	async fn agents_by_department(&self, department_id: &str) -> Result<Vec<Agent>, DataError> {
		let agents = self
			.fixture
			.agents
			.iter()
			.filter(|a| a.department_id.as_deref() == Some(department_id))
			.cloned()
			.collect();
		self.respond(agents).await
	}

	async fn agent(&self, id: &str) -> Result<Option<Agent>, DataError> {
		let agent = self.fixture.agents.iter().find(|a| a.id == id).cloned();
		self.respond(agent).await
	}

	async fn agents(&self) -> Result<Vec<Agent>, DataError> {
		self.respond(self.fixture.agents.clone()).await
	}

	async fn llm_models(&self) -> Result<Vec<LlmModel>, DataError> {
		self.respond(self.fixture.llm_models.clone()).await
	}

	async fn llm_provider(&self) -> Result<LlmProvider, DataError> {
		self.respond(self.fixture.llm_provider).await
	}

	async fn ad_assets(&self, limit: Option<usize>) -> Result<Vec<AdAsset>, DataError> {
		let mut assets = self.fixture.ad_assets.clone();
		assets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
		assets.truncate(limit.unwrap_or(DEFAULT_AD_ASSET_LIMIT));
		self.respond(assets).await
	}

	async fn cluster_topology(&self) -> Result<ClusterTopology, DataError> {
		self.respond(self.cluster.clone()).await
	}
}

#[cfg(test)]
mod tests {
	use futures::executor::block_on;

	use super::*;

	fn service() -> MockDataService {
		MockDataService::new().expect("bundled fixture parses")
	}

	#[test]
	fn bundled_fixture_covers_every_department() {
		let svc = service();
		let departments = block_on(svc.departments()).unwrap();

		assert_eq!(departments.len(), 12);
		for dept in &departments {
			let topology = block_on(svc.department_topology(&dept.id)).unwrap();
			assert!(topology.is_some(), "no topology for {}", dept.id);
		}
	}

	#[test]
	fn unknown_ids_resolve_to_empty_answers() {
		let svc = service();

		assert_eq!(block_on(svc.department("nope")).unwrap(), None);
		assert_eq!(block_on(svc.department_node_count("nope")).unwrap(), 0);
		assert_eq!(block_on(svc.department_topology("nope")).unwrap(), None);
		assert!(block_on(svc.processes("nope")).unwrap().is_empty());
		assert!(block_on(svc.tasks("monthly-close", "nope")).unwrap().is_empty());
		assert!(block_on(svc.tasks("nope", "finance")).unwrap().is_empty());
		assert_eq!(block_on(svc.agent("nope")).unwrap(), None);
	}

	#[test]
	fn department_lookups() {
		let svc = service();

		let finance = block_on(svc.department("finance")).unwrap().unwrap();
		assert_eq!(finance.status, Status::Warning);
		assert_eq!(block_on(svc.department_node_count("engineering")).unwrap(), 18);

		let tasks = block_on(svc.tasks("monthly-close", "finance")).unwrap();
		let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
		assert_eq!(
			names,
			["Reconcile Accounts", "Flag Anomalies", "Draft Variance Narrative", "Produce CFO Packet"]
		);

		let agents = block_on(svc.agents_by_department("marketing")).unwrap();
		assert_eq!(agents.len(), 4);
		assert!(agents.iter().all(|a| a.department_id.as_deref() == Some("marketing")));
	}

	#[test]
	fn ad_assets_are_newest_first_and_limited() {
		let svc = service();

		let all = block_on(svc.ad_assets(None)).unwrap();
		let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
		assert_eq!(ids, ["ad-mo-4", "ad-mo-3", "ad-mo-1", "ad-mo-2", "ad-mo-5"]);

		let two = block_on(svc.ad_assets(Some(2))).unwrap();
		assert_eq!(two.len(), 2);
		assert_eq!(two[0].id, "ad-mo-4");
	}

	#[test]
	fn answers_are_copies() {
		let svc = service();

		let mut first = block_on(svc.departments()).unwrap();
		first.clear();
		assert_eq!(block_on(svc.departments()).unwrap().len(), 12);
	}

	#[test]
	fn malformed_fixture_is_reported() {
		let err = MockDataService::from_json(r#"{"agents": 3}"#).unwrap_err();
		assert!(matches!(err, DataError::Fixture(_)));
		assert!(err.to_string().starts_with("mock fixture is malformed"));
	}

	#[test]
	fn cluster_metrics_match_fixture() {
		let svc = service();
		let departments = block_on(svc.departments()).unwrap();

		assert_eq!(crate::data::running_process_count(&departments), 5);
		assert_eq!(crate::data::total_process_count(&departments), 9);

		let models = block_on(svc.llm_models()).unwrap();
		assert_eq!(crate::data::total_llm_cost(&models), 0.0);
		assert_eq!(models.iter().filter(|m| m.in_use).count(), 1);
		assert_eq!(block_on(svc.llm_provider()).unwrap(), LlmProvider::DirectApi);
		assert_eq!(block_on(svc.cluster_topology()).unwrap().nodes.len(), 24);
	}
}
