//! Pointer gestures to graph mutations.
//!
//! A press on a node both selects it and starts a drag; the two are told apart
//! only on release, by whether the pointer actually moved in between.

use super::config::EditorConfig;
use super::geometry::{find_node_at, pick};
use super::model::GraphModel;
use super::types::{Edge, Hit, Point, PointerEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
	pub node_idx: Option<usize>,
	/// Pointer position of the press that started the gesture.
	pub origin: Point,
	pub moved: bool,
}

impl DragState {
	pub fn is_active(&self) -> bool {
		self.node_idx.is_some()
	}
}

/// Session state that lives only between pointer events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	pub highlight: Option<usize>,
	pub drag: DragState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	NodeSelected,
	Dragging,
}

impl InteractionState {
	pub fn phase(&self) -> Phase {
		if self.drag.is_active() {
			Phase::Dragging
		} else if self.highlight.is_some() {
			Phase::NodeSelected
		} else {
			Phase::Idle
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.highlight == Some(idx)
	}
}

/// Outcome of a single dispatched event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
	NodeAdded(usize),
	NodeSelected(usize),
	SelectionCleared(usize),
	EdgeAdded { from: usize, to: usize },
	/// Second click landed on a node already connected to the highlight.
	EdgeRejected { from: usize, to: usize },
	EdgeRemoved(Edge),
	NodeMoved(usize),
	DragEnded { node: usize, moved: bool },
	NodeRecolored { node: usize, color_index: usize },
	None,
}

impl Action {
	pub fn needs_redraw(&self) -> bool {
		!matches!(self, Action::None)
	}
}

/// Apply one pointer event to the model and interaction state.
pub fn dispatch(
	model: &mut GraphModel,
	state: &mut InteractionState,
	config: &EditorConfig,
	event: PointerEvent,
) -> Action {
	match event {
		PointerEvent::Down(p) => pointer_down(model, state, config, p),
		PointerEvent::Move(p) => pointer_move(model, state, p),
		PointerEvent::Up(_) => pointer_up(state),
		PointerEvent::DoubleClick(p) => match find_node_at(model, p, config.node_radius) {
			Some(node) => {
				model.cycle_node_color(node);
				Action::NodeRecolored {
					node,
					color_index: model.node(node).color_index,
				}
			}
			None => Action::None,
		},
	}
}

fn pointer_down(
	model: &mut GraphModel,
	state: &mut InteractionState,
	config: &EditorConfig,
	p: Point,
) -> Action {
	let phase = state.phase();
	state.drag = DragState::default();
	match pick(model, p, config.node_radius, config.edge_tolerance) {
		Hit::Node(idx) if phase == Phase::Idle => {
			state.highlight = Some(idx);
			state.drag = DragState {
				node_idx: Some(idx),
				origin: p,
				moved: false,
			};
			Action::NodeSelected(idx)
		}
		Hit::Node(idx) => match state.highlight.take() {
			Some(prev) if prev != idx => {
				let edge = Edge::between(prev, idx);
				if model.add_edge(prev, idx) {
					Action::EdgeAdded {
						from: edge.from,
						to: edge.to,
					}
				} else {
					Action::EdgeRejected {
						from: edge.from,
						to: edge.to,
					}
				}
			}
			_ => Action::SelectionCleared(idx),
		},
		Hit::Edge(idx) => {
			state.highlight = None;
			Action::EdgeRemoved(model.remove_edge(idx))
		}
		Hit::Empty => {
			state.highlight = None;
			Action::NodeAdded(model.add_node(p.x, p.y))
		}
	}
}

fn pointer_move(model: &mut GraphModel, state: &mut InteractionState, p: Point) -> Action {
	let (Phase::Dragging, Some(idx)) = (state.phase(), state.drag.node_idx) else {
		return Action::None;
	};
	model.move_node(idx, p.x, p.y);
	state.drag.moved |= p != state.drag.origin;
	Action::NodeMoved(idx)
}

fn pointer_up(state: &mut InteractionState) -> Action {
	let drag = std::mem::take(&mut state.drag);
	let Some(node) = drag.node_idx else {
		return Action::None;
	};
	if drag.moved {
		state.highlight = None;
	}
	Action::DragEnded {
		node,
		moved: drag.moved,
	}
}
