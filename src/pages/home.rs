use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::graph_editor::{GraphEditorCanvas, Sizing};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Read once; the canvas sizes itself at mount and then follows the window.
	let sizing = use_query_map().with_untracked(|query| {
		Sizing::from_query(
			query.get("size").as_deref(),
			query.get("width").as_deref(),
			query.get("height").as_deref(),
		)
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-editor">
				<h1>"Graph Sketch"</h1>
				<p class="subtitle">
					"Click empty space to add a node. Click two nodes to connect them. "
					"Click an edge to delete it. Drag nodes to move them. Double-click a node to change its color."
				</p>
				<GraphEditorCanvas sizing=sizing />
			</div>
		</ErrorBoundary>
	}
}
