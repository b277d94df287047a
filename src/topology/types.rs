use std::borrow::Cow;

use serde::{Deserialize, Serialize};

const TITLE_MAX_CHARS: usize = 14;
const TITLE_KEEP_CHARS: usize = 12;

/// A role (position) in a department's org chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleNode {
	/// Unique within one department.
	pub id: String,
	/// Short display name.
	pub label: String,
	/// Full title, truncated by [`display_title`] when drawn.
	pub role_title: String,
	/// Informational only; levels are derived from edges.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent_id: Option<String>,
}

impl RoleNode {
	/// Root-level role without a parent.
	pub fn new(id: impl Into<String>, label: impl Into<String>, role_title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			role_title: role_title.into(),
			parent_id: None,
		}
	}

	/// Sets the informational parent id.
	pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
		self.parent_id = Some(parent_id.into());
		self
	}
}

/// Relationship carried by a [`TopologyEdge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
	/// Solid line.
	#[default]
	ReportsTo,
	/// Dashed line.
	CollaboratesWith,
}

impl EdgeKind {
	/// SVG `stroke-dasharray` for this kind, if any.
	pub fn dash_array(self) -> Option<&'static str> {
		match self {
			EdgeKind::ReportsTo => None,
			EdgeKind::CollaboratesWith => Some("4 4"),
		}
	}
}

/// Directed edge between two role ids. Either end may be unknown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyEdge {
	/// Source role id.
	pub from_role_id: String,
	/// Target role id.
	pub to_role_id: String,
	/// Defaults to [`EdgeKind::ReportsTo`] when absent.
	#[serde(rename = "type", default)]
	pub kind: EdgeKind,
}

impl TopologyEdge {
	/// A `reports_to` edge.
	pub fn reports_to(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from_role_id: from.into(),
			to_role_id: to.into(),
			kind: EdgeKind::ReportsTo,
		}
	}

	/// A `collaborates_with` edge.
	pub fn collaborates_with(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			kind: EdgeKind::CollaboratesWith,
			..Self::reports_to(from, to)
		}
	}
}

/// Role title as drawn under the node label.
pub fn display_title(title: &str) -> Cow<'_, str> {
	if title.chars().count() <= TITLE_MAX_CHARS {
		return Cow::Borrowed(title);
	}
	let mut short: String = title.chars().take(TITLE_KEEP_CHARS).collect();
	short.push('…');
	Cow::Owned(short)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_titles_are_untouched() {
		assert_eq!(display_title("Controller"), "Controller");
		assert_eq!(display_title("Exactly 14 chr"), "Exactly 14 chr");
	}

	#[test]
	fn long_titles_are_cut_to_twelve_chars() {
		assert_eq!(display_title("Chief Marketing Officer"), "Chief Market…");
	}

	#[test]
	fn edge_type_defaults_to_reports_to() {
		let edge: TopologyEdge =
			serde_json::from_str(r#"{"fromRoleId":"a","toRoleId":"b"}"#).unwrap();
		assert_eq!(edge.kind, EdgeKind::ReportsTo);

		let edge: TopologyEdge = serde_json::from_str(
			r#"{"fromRoleId":"a","toRoleId":"b","type":"collaborates_with"}"#,
		)
		.unwrap();
		assert_eq!(edge.kind, EdgeKind::CollaboratesWith);
		assert_eq!(edge.kind.dash_array(), Some("4 4"));
	}
}
