// The page only mounts in the browser; host builds exist for tests.
#![cfg_attr(not(target_family = "wasm"), allow(dead_code))]

use yew::prelude::*;
use yew_router::BrowserRouter;

mod api;
mod components;
mod config;
mod controller;
mod data;
mod hooks;
mod page;
mod response;
mod view;

#[cfg(target_family = "wasm")]
fn main() {
	wasm_logger::init(wasm_logger::Config::new(config::log_level()));
	yew::Renderer::<App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	if let Err(err) = init_host_logger() {
		eprintln!("failed to initialize logging: {err}");
	}
	log::error!(
		"{} renders in the browser; build it for wasm32-unknown-unknown (e.g. `trunk serve`).",
		env!("CARGO_PKG_NAME")
	);
}

#[cfg(not(target_family = "wasm"))]
fn init_host_logger() -> Result<(), log::SetLoggerError> {
	simplelog::SimpleLogger::init(config::log_level().to_level_filter(), simplelog::Config::default())
}

#[function_component]
fn App() -> Html {
	let controller = use_memo((), |_| {
		let backend = api::HttpBackend::from_document()?;
		let endpoints = config::Endpoints::for_build();
		log::debug!(target: env!("CARGO_PKG_NAME"), "Reading comments from {}.", endpoints.comments);
		anyhow::Ok(page::ForumController::new(backend.with_endpoints(endpoints)))
	});
	let controller = match &*controller {
		Ok(controller) => controller.clone(),
		Err(err) => {
			log::error!(target: env!("CARGO_PKG_NAME"), "Failed to reach the backend: {err:?}");
			return html! {
				<p>{"The forum could not be loaded."}</p>
			};
		}
	};
	html! {
		<ContextProvider<page::ForumController> context={controller}>
			<BrowserRouter>
				<page::Routes />
			</BrowserRouter>
		</ContextProvider<page::ForumController>>
	}
}
