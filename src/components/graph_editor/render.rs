use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::EditorSession;
use super::types::Point;

const HIGHLIGHT_WIDTH: f64 = 3.0;
const OUTLINE_WIDTH: f64 = 1.0;
const EDGE_WIDTH: f64 = 1.0;
/// Fill for a color index the palette does not cover.
const FALLBACK_FILL: &str = "#999";

/// The drawing primitives the editor needs from a 2D backend.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn circle(&self, center: Point, radius: f64, fill: &str, stroke: &str, line_width: f64);
	fn line(&self, from: Point, to: Point, color: &str, line_width: f64);
	fn centered_text(&self, text: &str, at: Point, color: &str, font: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn circle(&self, center: Point, radius: f64, fill: &str, stroke: &str, line_width: f64) {
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
		self.set_stroke_style_str(stroke);
		self.set_line_width(line_width);
		self.stroke();
		self.set_line_width(1.0);
	}

	fn line(&self, from: Point, to: Point, color: &str, line_width: f64) {
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.set_stroke_style_str(color);
		self.set_line_width(line_width);
		self.stroke();
	}

	fn centered_text(&self, text: &str, at: Point, color: &str, font: &str) {
		self.set_fill_style_str(color);
		self.set_text_align("center");
		self.set_text_baseline("middle");
		self.set_font(font);
		let _ = self.fill_text(text, at.x, at.y);
	}
}

/// Redraw the whole session: edges first so nodes sit on top of them.
pub fn render(session: &EditorSession, surface: &impl Surface) {
	surface.clear(session.width, session.height);
	draw_edges(session, surface);
	draw_nodes(session, surface);
}

fn draw_edges(session: &EditorSession, surface: &impl Surface) {
	for i in 0..session.model.edge_count() {
		let (from, to) = session.model.edge_endpoints(i);
		surface.line(from, to, session.config.edge_color, EDGE_WIDTH);
	}
}

fn draw_nodes(session: &EditorSession, surface: &impl Surface) {
	let config = &session.config;
	for (idx, node) in session.model.nodes().iter().enumerate() {
		let (stroke, width) = if session.interaction.is_highlighted(idx) {
			(config.highlight_color, HIGHLIGHT_WIDTH)
		} else {
			(config.outline_color, OUTLINE_WIDTH)
		};
		let fill = config
			.palette
			.get(node.color_index)
			.copied()
			.unwrap_or(FALLBACK_FILL);
		surface.circle(node.pos, config.node_radius, fill, stroke, width);
		surface.centered_text(&idx.to_string(), node.pos, config.label_color, config.label_font);
	}
}
