/// A position in surface-local pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub pos: Point,
	pub color_index: usize,
}

/// An undirected edge, stored with `from < to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub from: usize,
	pub to: usize,
}

impl Edge {
	/// Canonical form of the pair `{a, b}`.
	pub fn between(a: usize, b: usize) -> Self {
		Self {
			from: a.min(b),
			to: a.max(b),
		}
	}

	pub fn connects(&self, a: usize, b: usize) -> bool {
		*self == Self::between(a, b)
	}
}

/// What a pointer position resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
	Node(usize),
	Edge(usize),
	Empty,
}

/// Pointer input in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down(Point),
	Move(Point),
	Up(Point),
	DoubleClick(Point),
}
