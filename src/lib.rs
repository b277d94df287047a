//! Agent cluster dashboard: a Leptos client-side app over mock cluster data.
//!
//! The [`topology`] module holds the leveled role-graph layout, [`data`] the
//! domain records and the [`DataService`](data::DataService) they are served
//! through.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
pub mod data;
mod error;
mod hooks;
mod pages;
pub mod topology;

pub use error::DataError;

// Top-Level pages
use crate::components::Sidebar;
use crate::data::{DataService, provide_data_service};
use crate::pages::department::DepartmentPage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The dashboard shell: sidebar plus the routed page, all fed by `service`.
#[component]
pub fn App(service: Rc<dyn DataService>) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_data_service(service);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		<Title text="Agent Cluster Dashboard" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<div class="shell">
				<Sidebar />
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/department/:dept_id") view=DepartmentPage />
				</Routes>
			</div>
		</Router>
	}
}
