use super::types::{Department, LlmModel, Status};

/// Processes currently running across `departments`.
pub fn running_process_count(departments: &[Department]) -> usize {
	departments
		.iter()
		.flat_map(|d| &d.processes)
		.filter(|p| p.status == Status::Running)
		.count()
}

/// Processes across `departments`, whatever their status.
pub fn total_process_count(departments: &[Department]) -> usize {
	departments.iter().map(|d| d.processes.len()).sum()
}

/// Share of running processes in percent, 0 when there are none.
pub fn process_utilization(departments: &[Department]) -> f64 {
	match total_process_count(departments) {
		0 => 0.0,
		total => running_process_count(departments) as f64 / total as f64 * 100.0,
	}
}

/// Summed cost of all models; unpriced models count as free.
pub fn total_llm_cost(models: &[LlmModel]) -> f64 {
	models.iter().filter_map(|m| m.cost_usd).sum()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{DepartmentIcon, Process};

	fn process(status: Status) -> Process {
		Process {
			id: format!("{status:?}"),
			name: String::new(),
			status,
			workload: 0,
			tokens: "0".into(),
			description: String::new(),
			tasks: Vec::new(),
		}
	}

	fn department(processes: Vec<Process>) -> Department {
		Department {
			id: "d".into(),
			name: "D".into(),
			icon: DepartmentIcon::Code,
			status: Status::Healthy,
			node_count: 1,
			processes,
		}
	}

	#[test]
	fn counts_running_processes_across_departments() {
		let departments = [
			department(vec![process(Status::Running), process(Status::Idle)]),
			department(vec![]),
			department(vec![process(Status::Running), process(Status::Warning)]),
		];

		assert_eq!(running_process_count(&departments), 2);
		assert_eq!(total_process_count(&departments), 4);
		assert_eq!(process_utilization(&departments), 50.0);
	}

	#[test]
	fn utilization_without_processes_is_zero() {
		assert_eq!(process_utilization(&[department(vec![])]), 0.0);
		assert_eq!(process_utilization(&[]), 0.0);
	}

	#[test]
	fn unpriced_models_are_free() {
		let model = |cost| LlmModel {
			id: "m".into(),
			name: "M".into(),
			cost_usd: cost,
			in_use: cost.is_some(),
		};
		assert_eq!(total_llm_cost(&[model(None), model(Some(0.0)), model(Some(1.25))]), 1.25);
		assert_eq!(total_llm_cost(&[]), 0.0);
	}
}
