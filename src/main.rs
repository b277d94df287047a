//! Trunk entry point: mounts the dashboard on the mock service.

// dependencies belong to the library target
#![allow(unused_crate_dependencies)]

use std::rc::Rc;

use agent_cluster_dashboard::data::{DataService, MockDataService};
use agent_cluster_dashboard::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	let service: Rc<dyn DataService> = match MockDataService::new() {
		Ok(service) => Rc::new(service),
		Err(err) => {
			log::error!("cannot start dashboard: {err}");
			return;
		}
	};
	log::info!("mock data loaded");
	leptos::mount::mount_to_body(move || view! { <App service=service /> });
}
