//! Dashboard widgets.

pub mod ad_creatives;
pub mod charts;
pub mod cluster_distribution;
pub mod creative_providers;
pub mod force_graph;
pub mod icon;
pub mod kpi_card;
pub mod llm_cost_panel;
pub mod node_topology;
pub mod panel;
pub mod role_topology;
pub mod sidebar;
pub mod status_badge;
pub mod task_workflow;
pub mod token_trend;

pub use ad_creatives::AdCreatives;
pub use cluster_distribution::ClusterDistribution;
pub use creative_providers::CreativeProviders;
pub use kpi_card::KpiCard;
pub use llm_cost_panel::LlmCostPanel;
pub use node_topology::NodeTopology;
pub use panel::{Panel, fetch_status};
pub use role_topology::RoleTopology;
pub use sidebar::Sidebar;
pub use status_badge::{StatusBadge, StatusDot};
pub use task_workflow::TaskWorkflowCard;
pub use token_trend::TokenTrend;
