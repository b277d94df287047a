use leptos::prelude::*;

use crate::data::{Agent, Status, Task, WorkflowStepStatus};

fn task_glyph(status: Status) -> &'static str {
	match status {
		Status::Healthy => "\u{2714}",
		Status::Running => "\u{21BB}",
		_ => "\u{23F2}",
	}
}

fn step_glyph(status: WorkflowStepStatus) -> &'static str {
	match status {
		WorkflowStepStatus::Approved => "\u{2714}",
		WorkflowStepStatus::Rejected => "\u{2716}",
		WorkflowStepStatus::InProgress => "\u{21BB}",
		WorkflowStepStatus::Pending => "\u{23F2}",
	}
}

/// Name shown for a workflow step: the agent's name, else the step's role,
/// else the raw agent id.
fn step_actor<'a>(agents: &'a [Agent], agent_id: &'a str, role: Option<&'a str>) -> &'a str {
	agents
		.iter()
		.find(|a| a.id == agent_id)
		.map(|a| a.name.as_str())
		.or(role)
		.unwrap_or(agent_id)
}

/// A task with its assignees, approval chain and progress bar.
///
/// `agents` is used to resolve ids to names; unknown assignees are skipped.
#[component]
pub fn TaskWorkflowCard(task: Task, #[prop(into)] agents: Signal<Vec<Agent>>) -> impl IntoView {
	let status = task.status;
	let timing = task.timing_label().to_owned();
	let assigned = task.assigned_agent_ids.clone();
	let steps: Vec<_> = task.ordered_steps().into_iter().cloned().collect();
	let has_steps = !steps.is_empty();

	let assignees = move || {
		agents.with(|agents| {
			let names: Vec<String> = assigned
				.iter()
				.filter_map(|id| agents.iter().find(|a| &a.id == id))
				.map(|a| a.name.clone())
				.collect();
			(!names.is_empty()).then(|| {
				view! {
					<div class="task-assigned">
						<span class="task-caption">"Assigned"</span>
						<span class="task-agents">{names.join(", ")}</span>
					</div>
				}
			})
		})
	};

	let workflow = move || {
		agents.with(|agents| {
			steps
				.iter()
				.enumerate()
				.map(|(i, step)| {
					let actor = step_actor(agents, &step.agent_id, step.role.as_deref()).to_owned();
					view! {
						{(i > 0).then_some(view! { <span class="step-arrow">"\u{203A}"</span> })}
						<span class=format!("workflow-step {}", step.status.label().replace(' ', "-"))>
							<span class="step-icon">{step_glyph(step.status)}</span>
							<span class="step-actor">{actor}</span>
							<span class="step-status">{step.status.label()}</span>
						</span>
					}
				})
				.collect_view()
		})
	};

	view! {
		<div class="task-card" class:dimmed={status == Status::Idle}>
			<div class=format!("task-icon {}", status.css_class())>{task_glyph(status)}</div>
			<div class="task-body">
				<div class="task-header">
					<h6>{task.name}</h6>
					<span class="task-timing">{timing}</span>
				</div>
				<p class="task-description">{task.description}</p>
				{assignees}
				{has_steps
					.then(|| {
						view! {
							<div class="task-workflow">
								<span class="task-caption">"Workflow"</span>
								<div class="workflow-chain">{workflow}</div>
							</div>
						}
					})}
				{task
					.progress
					.map(|pct| {
						view! {
							<div class="task-progress">
								<div class="progress-header">
									<span>"PROGRESS"</span>
									<span>{format!("{pct}%")}</span>
								</div>
								<div class="progress-track">
									<div class="progress-fill" style:width=format!("{pct}%")></div>
								</div>
							</div>
						}
					})}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn step_actor_falls_back_to_role_then_id() {
		let agents = vec![Agent {
			id: "fin-1".into(),
			name: "Ledger".into(),
			role_title: "Bookkeeper".into(),
			department_id: Some("finance".into()),
		}];

		assert_eq!(step_actor(&agents, "fin-1", Some("Clerk")), "Ledger");
		assert_eq!(step_actor(&agents, "fin-9", Some("Controller")), "Controller");
		assert_eq!(step_actor(&agents, "fin-9", None), "fin-9");
	}
}
