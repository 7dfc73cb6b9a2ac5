use log::{debug, info};
use rand::Rng;

use super::config::EditorConfig;
use super::generator::random_graph;
use super::interaction::{Action, InteractionState, dispatch};
use super::model::GraphModel;
use super::types::PointerEvent;

/// Everything one canvas owns for the lifetime of the page.
pub struct EditorSession {
	pub model: GraphModel,
	pub interaction: InteractionState,
	pub config: EditorConfig,
	pub width: f64,
	pub height: f64,
}

impl EditorSession {
	pub fn new(model: GraphModel, config: EditorConfig, width: f64, height: f64) -> Self {
		Self {
			model,
			interaction: InteractionState::default(),
			config,
			width,
			height,
		}
	}

	/// Start a session on a freshly generated random graph.
	pub fn generate<R: Rng>(rng: &mut R, config: EditorConfig, width: f64, height: f64) -> Self {
		let model = random_graph(rng, &config, width, height);
		info!(
			"Generated graph with {} nodes and {} edges on {}x{} surface",
			model.node_count(),
			model.edge_count(),
			width,
			height
		);
		Self::new(model, config, width, height)
	}

	pub fn handle(&mut self, event: PointerEvent) -> Action {
		let action = dispatch(&mut self.model, &mut self.interaction, &self.config, event);
		match action {
			Action::None | Action::NodeMoved(_) => {}
			_ => debug!("{:?} -> {:?}", event, action),
		}
		action
	}

	/// Node positions are kept as-is; a shrink may leave nodes off-surface.
	pub fn resize(&mut self, width: f64, height: f64) {
		info!("Surface resized to {}x{}", width, height);
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::graph_editor::types::Point;

	#[test]
	fn resize_does_not_rescale_nodes() {
		let mut rng = StdRng::seed_from_u64(11);
		let mut session = EditorSession::generate(&mut rng, EditorConfig::default(), 800.0, 800.0);
		let before: Vec<Point> = session.model.nodes().iter().map(|n| n.pos).collect();
		session.resize(100.0, 100.0);
		let after: Vec<Point> = session.model.nodes().iter().map(|n| n.pos).collect();
		assert_eq!(before, after);
		assert_eq!((session.width, session.height), (100.0, 100.0));
	}

	#[test]
	fn handle_routes_through_dispatch() {
		let config = EditorConfig::default();
		let model = GraphModel::new(config.palette.len());
		let mut session = EditorSession::new(model, config, 400.0, 400.0);
		let action = session.handle(PointerEvent::Down(Point::new(50.0, 50.0)));
		assert_eq!(action, Action::NodeAdded(0));
		assert_eq!(session.handle(PointerEvent::Up(Point::new(50.0, 50.0))), Action::None);
		assert_eq!(session.model.node(0).pos, Point::new(50.0, 50.0));
	}

	#[test]
	fn drag_released_off_surface_stays_there() {
		let config = EditorConfig::default();
		let mut model = GraphModel::new(config.palette.len());
		model.add_node(380.0, 200.0);
		let mut session = EditorSession::new(model, config, 400.0, 400.0);

		session.handle(PointerEvent::Down(Point::new(380.0, 200.0)));
		for x in [399.0, 430.0, 520.0] {
			session.handle(PointerEvent::Move(Point::new(x, 200.0)));
		}
		session.handle(PointerEvent::Move(Point::new(520.0, -30.0)));
		session.handle(PointerEvent::Up(Point::new(520.0, -30.0)));

		assert_eq!(session.model.node(0).pos, Point::new(520.0, -30.0));
		assert_eq!(session.interaction.highlight, None);
		assert!(!session.interaction.drag.is_active());
	}
}
