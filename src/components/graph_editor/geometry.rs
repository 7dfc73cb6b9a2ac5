//! Hit-testing of pointer positions against the graph.
//!
//! Both queries scan in model order and return the first match, so overlaps
//! resolve to the lowest index. Nodes are tested before edges by [`pick`].

use super::model::GraphModel;
use super::types::{Hit, Point};

/// Distance from `p` to the segment `a`-`b`, measured to the projection of `p`
/// clamped onto the segment. A zero-length segment measures to `a`.
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
	let (vx, vy) = (b.x - a.x, b.y - a.y);
	let len_sq = vx * vx + vy * vy;
	if len_sq == 0.0 {
		return p.distance(a);
	}
	let t = (((p.x - a.x) * vx + (p.y - a.y) * vy) / len_sq).clamp(0.0, 1.0);
	p.distance(Point::new(a.x + t * vx, a.y + t * vy))
}

pub fn find_node_at(model: &GraphModel, p: Point, radius: f64) -> Option<usize> {
	model
		.nodes()
		.iter()
		.position(|node| node.pos.distance(p) <= radius)
}

pub fn find_edge_at(model: &GraphModel, p: Point, tolerance: f64) -> Option<usize> {
	model.edges().iter().position(|edge| {
		segment_distance(p, model.node(edge.from).pos, model.node(edge.to).pos) < tolerance
	})
}

pub fn pick(model: &GraphModel, p: Point, radius: f64, tolerance: f64) -> Hit {
	if let Some(idx) = find_node_at(model, p, radius) {
		Hit::Node(idx)
	} else if let Some(idx) = find_edge_at(model, p, tolerance) {
		Hit::Edge(idx)
	} else {
		Hit::Empty
	}
}
