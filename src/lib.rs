//! Graph Sketch: a single-page editor where nodes and edges are drawn on a
//! canvas and edited with the mouse.
//!
//! Routes:
//! - `/` shows the editor. `?size=fullscreen`, `?size=square` or
//!   `?width=..&height=..` pick how the canvas is sized.
//! - anything else renders the not-found page.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Route `log` output to the browser console and report panics there.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Graph Sketch logging ready");
}

/// Root component: document head plus the editor and 404 routes.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Graph Sketch" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
