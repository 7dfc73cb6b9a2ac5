//! Node and edge storage.
//!
//! Nodes are addressed by their position in insertion order and are never
//! removed, so node indices stay valid for the whole session. Edge indices are
//! positional too, but shift down when an earlier edge is removed: do not hold
//! on to one across a mutating call.

use super::types::{Edge, Node, Point};

#[derive(Clone, Debug)]
pub struct GraphModel {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	palette_len: usize,
}

impl GraphModel {
	pub fn new(palette_len: usize) -> Self {
		Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			palette_len: palette_len.max(1),
		}
	}

	/// Append a node with the first palette color and return its index.
	pub fn add_node(&mut self, x: f64, y: f64) -> usize {
		self.nodes.push(Node {
			pos: Point::new(x, y),
			color_index: 0,
		});
		self.nodes.len() - 1
	}

	/// Connect `a` and `b`. Self-loops and existing pairs (in either order)
	/// are ignored; returns whether an edge was inserted.
	pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
		debug_assert!(a < self.nodes.len() && b < self.nodes.len());
		if a == b || self.has_edge(a, b) {
			return false;
		}
		self.edges.push(Edge::between(a, b));
		true
	}

	/// Remove the edge at `index`; later edges move down by one.
	pub fn remove_edge(&mut self, index: usize) -> Edge {
		self.edges.remove(index)
	}

	pub fn cycle_node_color(&mut self, index: usize) {
		let node = &mut self.nodes[index];
		node.color_index = (node.color_index + 1) % self.palette_len;
	}

	pub fn move_node(&mut self, index: usize, x: f64, y: f64) {
		self.nodes[index].pos = Point::new(x, y);
	}

	pub fn has_edge(&self, a: usize, b: usize) -> bool {
		self.edges.iter().any(|e| e.connects(a, b))
	}

	pub fn node(&self, index: usize) -> &Node {
		&self.nodes[index]
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Center points of both ends of the edge at `index`.
	pub fn edge_endpoints(&self, index: usize) -> (Point, Point) {
		let edge = self.edges[index];
		(self.nodes[edge.from].pos, self.nodes[edge.to].pos)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn with_nodes(n: usize) -> GraphModel {
		let mut model = GraphModel::new(3);
		for i in 0..n {
			model.add_node(i as f64 * 50.0, 0.0);
		}
		model
	}

	#[test]
	fn add_node_appends_with_first_color() {
		let mut model = GraphModel::new(3);
		assert_eq!(model.add_node(1.0, 2.0), 0);
		assert_eq!(model.add_node(3.0, 4.0), 1);
		assert_eq!(model.node(1).pos, Point::new(3.0, 4.0));
		assert_eq!(model.node(1).color_index, 0);
	}

	#[test]
	fn duplicate_edges_are_ignored_in_either_order() {
		let mut model = with_nodes(4);
		for a in 0..4 {
			for b in 0..4 {
				if a == b {
					continue;
				}
				model.add_edge(a, b);
				model.add_edge(b, a);
				let count = model.edges().iter().filter(|e| e.connects(a, b)).count();
				assert_eq!(count, 1, "pair {a},{b}");
			}
		}
		assert_eq!(model.edge_count(), 6);
	}

	#[test]
	fn self_loops_are_never_created() {
		let mut model = with_nodes(3);
		for a in 0..3 {
			assert!(!model.add_edge(a, a));
		}
		assert_eq!(model.edge_count(), 0);
	}

	#[test]
	fn edges_are_stored_canonically() {
		let mut model = with_nodes(3);
		assert!(model.add_edge(2, 0));
		assert_eq!(model.edges()[0], Edge { from: 0, to: 2 });
	}

	#[test]
	fn remove_edge_shifts_later_indices() {
		let mut model = with_nodes(3);
		model.add_edge(0, 1);
		model.add_edge(1, 2);
		model.add_edge(0, 2);
		assert_eq!(model.remove_edge(0), Edge { from: 0, to: 1 });
		assert_eq!(model.edges(), &[Edge::between(1, 2), Edge::between(0, 2)]);
		assert_eq!(model.node_count(), 3);
	}

	#[test]
	fn color_cycles_back_after_palette_len_steps() {
		let mut model = with_nodes(1);
		model.cycle_node_color(0);
		let start = model.node(0).color_index;
		for _ in 0..3 {
			model.cycle_node_color(0);
		}
		assert_eq!(model.node(0).color_index, start);
	}

	#[test]
	fn empty_palette_keeps_first_color() {
		let mut model = GraphModel::new(0);
		model.add_node(0.0, 0.0);
		model.cycle_node_color(0);
		assert_eq!(model.node(0).color_index, 0);
	}

	#[test]
	fn move_node_overwrites_position() {
		let mut model = with_nodes(2);
		model.move_node(1, -40.0, 900.0);
		assert_eq!(model.node(1).pos, Point::new(-40.0, 900.0));
	}

	#[test]
	fn edge_endpoints_follow_moved_nodes() {
		let mut model = with_nodes(2);
		model.add_edge(1, 0);
		model.move_node(1, 10.0, 20.0);
		assert_eq!(
			model.edge_endpoints(0),
			(Point::new(0.0, 0.0), Point::new(10.0, 20.0))
		);
	}
}
