use rand::Rng;

use super::config::EditorConfig;
use super::model::GraphModel;

/// Build the startup graph for a `width` x `height` surface.
///
/// Every node circle lies fully inside the surface when the surface is large
/// enough to hold one; on a smaller axis the node is centered instead. Edge
/// generation stops after a bounded number of draws, so the result may hold
/// fewer edges than the random target.
pub fn random_graph<R: Rng>(
	rng: &mut R,
	config: &EditorConfig,
	width: f64,
	height: f64,
) -> GraphModel {
	let mut model = GraphModel::new(config.palette.len());
	let node_count = rng.random_range(config.node_count.clone());

	for _ in 0..node_count {
		let x = coordinate(rng, width, config.node_radius);
		let y = coordinate(rng, height, config.node_radius);
		model.add_node(x, y);
	}
	if node_count < 2 {
		return model;
	}

	let max_pairs = node_count * (node_count - 1) / 2;
	let target = rng
		.random_range(1..=config.edge_factor.max(1) * node_count)
		.min(max_pairs);
	let mut attempts = target * config.edge_attempts_per_edge.max(1);

	while model.edge_count() < target && attempts > 0 {
		attempts -= 1;
		let from = rng.random_range(0..node_count);
		let mut to = rng.random_range(0..node_count - 1);
		if to >= from {
			to += 1;
		}
		model.add_edge(from, to);
	}
	model
}

fn coordinate<R: Rng>(rng: &mut R, extent: f64, radius: f64) -> f64 {
	let span = extent - 2.0 * radius;
	if span > 0.0 {
		radius + rng.random::<f64>() * span
	} else {
		extent / 2.0
	}
}
