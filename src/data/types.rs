//! Domain records served by a [`DataService`](super::DataService).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::topology::{RoleNode, TopologyEdge};

/// Health of a department, process, task or node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
	/// Working normally.
	Healthy,
	/// Degraded.
	Warning,
	/// Failing.
	Error,
	/// Nothing scheduled.
	Idle,
	/// Actively working.
	Running,
}

impl Status {
	/// Human readable name.
	pub fn label(self) -> &'static str {
		match self {
			Status::Healthy => "Healthy",
			Status::Warning => "Warning",
			Status::Error => "Error",
			Status::Idle => "Idle",
			Status::Running => "Running",
		}
	}

	/// Lowercase token used for CSS classes.
	pub fn css_class(self) -> &'static str {
		match self {
			Status::Healthy => "healthy",
			Status::Warning => "warning",
			Status::Error => "error",
			Status::Idle => "idle",
			Status::Running => "running",
		}
	}

	/// Fill color of a status dot.
	pub fn color(self) -> &'static str {
		match self {
			Status::Healthy => "#10b981",
			Status::Warning => "#f59e0b",
			Status::Error => "#f43f5e",
			Status::Idle => "#64748b",
			Status::Running => "#258cf4",
		}
	}
}

/// State of one step in a task's approval chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStepStatus {
	/// Not reached yet.
	Pending,
	/// Waiting on its agent.
	InProgress,
	/// Signed off.
	Approved,
	/// Sent back.
	Rejected,
}

impl WorkflowStepStatus {
	/// Lowercase words, e.g. `in progress`.
	pub fn label(self) -> &'static str {
		match self {
			WorkflowStepStatus::Pending => "pending",
			WorkflowStepStatus::InProgress => "in progress",
			WorkflowStepStatus::Approved => "approved",
			WorkflowStepStatus::Rejected => "rejected",
		}
	}
}

/// One hand-off in a task workflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
	/// Position in the chain, starting at 1.
	pub order: u32,
	/// Agent performing the step.
	pub agent_id: String,
	/// Role shown when the agent is unknown.
	#[serde(default)]
	pub role: Option<String>,
	/// Current state.
	pub status: WorkflowStepStatus,
	/// Agent that signed the step off.
	#[serde(default)]
	pub approved_by: Option<String>,
}

/// A decorative AI agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
	/// Unique id.
	pub id: String,
	/// Display name.
	pub name: String,
	/// What the agent does.
	pub role_title: String,
	/// Owning department.
	#[serde(default)]
	pub department_id: Option<String>,
}

/// A unit of work inside a process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
	/// Unique within its process.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Current state.
	pub status: Status,
	/// Free text.
	pub description: String,
	/// Percent complete, for running tasks.
	#[serde(default)]
	pub progress: Option<u8>,
	/// Completion note, e.g. `Completed 2h ago`.
	#[serde(default)]
	pub timestamp: Option<String>,
	/// Agents working on the task.
	#[serde(default)]
	pub assigned_agent_ids: Vec<String>,
	/// Approval chain, in any order.
	#[serde(default)]
	pub workflow_steps: Vec<WorkflowStep>,
}

impl Task {
	/// Workflow steps sorted by `order`.
	pub fn ordered_steps(&self) -> Vec<&WorkflowStep> {
		let mut steps: Vec<&WorkflowStep> = self.workflow_steps.iter().collect();
		steps.sort_by_key(|s| s.order);
		steps
	}

	/// Timestamp if present, otherwise a placeholder derived from the status.
	pub fn timing_label(&self) -> &str {
		match (&self.timestamp, self.status) {
			(Some(ts), _) => ts,
			(None, Status::Running) => "Running...",
			(None, _) => "Pending",
		}
	}
}

/// A long-running business process run by a department's agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
	/// Unique within its department.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Current state.
	pub status: Status,
	/// Percent of allocated capacity in use.
	pub workload: u8,
	/// Preformatted token count, e.g. `820k`.
	pub tokens: String,
	/// Free text.
	pub description: String,
	/// Subtasks, in display order.
	#[serde(default)]
	pub tasks: Vec<Task>,
}

/// Department icon identifiers, resolved to glyphs by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentIcon {
	/// Strategy.
	TrendingUp,
	/// Finance.
	Activity,
	/// Legal.
	Gavel,
	/// Risk and security.
	Shield,
	/// People.
	Users,
	/// Marketing.
	Megaphone,
	/// Sales.
	Tag,
	/// Support.
	Headphones,
	/// Product.
	Package,
	/// Engineering.
	Code,
	/// IT.
	Server,
	/// Operations.
	Settings,
}

/// A business department and its processes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
	/// Route segment, e.g. `finance`.
	pub id: String,
	/// Full name.
	pub name: String,
	/// Sidebar icon.
	pub icon: DepartmentIcon,
	/// Aggregate health.
	pub status: Status,
	/// Cluster nodes allocated to the department.
	pub node_count: u32,
	/// Processes, in display order.
	#[serde(default)]
	pub processes: Vec<Process>,
}

impl Department {
	/// Name without its parenthesised suffix: `People Ops (HR)` -> `People Ops`.
	pub fn short_name(&self) -> &str {
		self.name.split(" (").next().unwrap_or(&self.name)
	}

	/// Process by id.
	pub fn process(&self, id: &str) -> Option<&Process> {
		self.processes.iter().find(|p| p.id == id)
	}
}

/// Role graph of one department.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTopology {
	/// Owning department.
	pub department_id: String,
	/// Roles, in input order.
	pub roles: Vec<RoleNode>,
	/// Relationships between roles.
	pub edges: Vec<TopologyEdge>,
}

/// Cluster-wide KPIs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSummary {
	/// Agents across all departments.
	pub total_agents: u32,
	/// Change since last week, preformatted.
	pub total_agents_delta: String,
	/// Tokens spent in the last 24 hours, preformatted.
	#[serde(rename = "tokens24h")]
	pub tokens_24h: String,
	/// Change against the previous day, preformatted.
	pub tokens_delta: String,
	/// Share of the daily token budget used, in percent.
	pub tokens_threshold_pct: u8,
	/// Mean process workload, in percent.
	pub avg_workload: u8,
	/// Qualitative workload, e.g. `Optimal`.
	pub avg_workload_label: String,
	/// Nodes running within their targets.
	pub nodes_optimal: u32,
	/// Node counts per status.
	pub healthy_nodes: u32,
	/// See `healthy_nodes`.
	pub warning_nodes: u32,
	/// See `healthy_nodes`.
	pub idle_nodes: u32,
	/// See `healthy_nodes`.
	pub error_nodes: u32,
}

/// How loud an [`Alert`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
	/// Informational.
	Info,
	/// Needs attention soon.
	Warning,
	/// Needs attention now.
	Error,
}

/// A message on the dashboard's alert list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
	/// Unique id.
	pub id: String,
	/// Text shown to the operator.
	pub message: String,
	/// Loudness.
	pub severity: AlertSeverity,
	/// Panel or department that raised it.
	#[serde(default)]
	pub source: Option<String>,
}

/// One slice of the agent framework distribution chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDistributionEntry {
	/// Framework name.
	pub name: String,
	/// Agents running on it.
	pub value: u32,
	/// CSS color of the slice.
	pub color: String,
}

/// An agent ranked by token usage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopConsumer {
	/// Agent name.
	pub name: String,
	/// Agent role.
	pub role: String,
	/// Tokens spent, preformatted.
	pub tokens: String,
}

/// How the cluster reaches LLM APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
	/// Routed through OpenRouter.
	OpenRouter,
	/// Vendor API keys.
	DirectApi,
}

impl LlmProvider {
	/// Display name.
	pub fn label(self) -> &'static str {
		match self {
			LlmProvider::OpenRouter => "Open Router",
			LlmProvider::DirectApi => "Direct API Key",
		}
	}
}

/// An LLM the cluster can route to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmModel {
	/// Provider model id.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Cost in USD for the current period; `None` when not in use.
	pub cost_usd: Option<f64>,
	/// Selected for this cluster.
	pub in_use: bool,
}

/// Generative providers of the advertising pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeProviderId {
	/// Video generation.
	Higgsfield,
	/// Image generation.
	Krea,
	/// fal.ai, image and video.
	Fal,
}

/// Media kind of a creative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
	/// Still image.
	Image,
	/// Short video.
	Video,
}

impl AssetKind {
	/// Display name.
	pub fn label(self) -> &'static str {
		match self {
			AssetKind::Image => "Image",
			AssetKind::Video => "Video",
		}
	}
}

/// A creative produced by the advertising pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdAsset {
	/// Unique id.
	pub id: String,
	/// Campaign the creative belongs to.
	pub campaign_id: String,
	/// Campaign display name.
	pub campaign_name: String,
	/// Brand shown on the tile.
	pub brand_or_placeholder: String,
	/// Image or video.
	#[serde(rename = "type")]
	pub kind: AssetKind,
	/// Preview image; a placeholder is drawn when absent.
	#[serde(default)]
	pub thumbnail_url: Option<String>,
	/// Where the published creative lives.
	#[serde(default)]
	pub external_url: Option<String>,
	/// Provider that generated it.
	#[serde(default)]
	pub provider_id: Option<CreativeProviderId>,
	/// Pipeline state.
	pub status: Status,
	/// Creation time; newest creatives are listed first.
	pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn department(name: &str) -> Department {
		Department {
			id: "x".into(),
			name: name.into(),
			icon: DepartmentIcon::Users,
			status: Status::Idle,
			node_count: 0,
			processes: Vec::new(),
		}
	}

	#[test]
	fn short_name_drops_parenthesised_suffix() {
		assert_eq!(department("People Ops (HR)").short_name(), "People Ops");
		assert_eq!(department("Legal, Compliance, Privacy").short_name(), "Legal, Compliance, Privacy");
	}

	#[test]
	fn steps_are_sorted_by_order() {
		let step = |order, agent: &str| WorkflowStep {
			order,
			agent_id: agent.into(),
			role: None,
			status: WorkflowStepStatus::Pending,
			approved_by: None,
		};
		let task = Task {
			id: "t".into(),
			name: "T".into(),
			status: Status::Running,
			description: String::new(),
			progress: Some(10),
			timestamp: None,
			assigned_agent_ids: Vec::new(),
			workflow_steps: vec![step(2, "b"), step(1, "a")],
		};

		let agents: Vec<&str> = task.ordered_steps().iter().map(|s| s.agent_id.as_str()).collect();
		assert_eq!(agents, ["a", "b"]);
		assert_eq!(task.timing_label(), "Running...");
	}

	#[test]
	fn status_uses_snake_case_on_the_wire() {
		assert_eq!(serde_json::to_string(&Status::Running).unwrap(), r#""running""#);
		let step: WorkflowStepStatus = serde_json::from_str(r#""in_progress""#).unwrap();
		assert_eq!(step.label(), "in progress");
	}
}
