use std::ops::RangeInclusive;

/// Fill colors a node cycles through on double-click: green, red, blue.
pub const PALETTE: &[&str] = &["#4CAF50", "#f44336", "#2196F3"];

pub const NODE_RADIUS: f64 = 20.0;
pub const EDGE_TOLERANCE: f64 = 10.0;

/// Margins subtracted from the window before sizing the square canvas.
const SQUARE_MARGIN_X: f64 = 40.0;
const SQUARE_MARGIN_Y: f64 = 100.0;

/// Tunables shared by hit-testing, rendering and startup generation.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Visual radius of a node, also its pick radius.
	pub node_radius: f64,
	/// Max distance from an edge segment that still counts as a hit.
	pub edge_tolerance: f64,
	pub palette: &'static [&'static str],
	pub node_count: RangeInclusive<usize>,
	/// Upper edge target is `edge_factor * node_count`.
	pub edge_factor: usize,
	/// Random pair draws allowed per requested edge before giving up.
	pub edge_attempts_per_edge: usize,
	pub edge_color: &'static str,
	pub outline_color: &'static str,
	pub highlight_color: &'static str,
	pub label_color: &'static str,
	pub label_font: &'static str,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			node_radius: NODE_RADIUS,
			edge_tolerance: EDGE_TOLERANCE,
			palette: PALETTE,
			node_count: 3..=7,
			edge_factor: 2,
			edge_attempts_per_edge: 16,
			edge_color: "#666",
			outline_color: "#333",
			highlight_color: "#000",
			label_color: "white",
			label_font: "16px Arial",
		}
	}
}

/// How the canvas derives its size from the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Sizing {
	/// Largest square that fits the window minus fixed margins.
	#[default]
	Square,
	/// Full window inner size.
	Fullscreen,
	/// Explicit pixel size, independent of the window.
	Fixed { width: f64, height: f64 },
}

impl Sizing {
	/// Surface size for a window of the given inner size.
	pub fn surface_size(self, inner_width: f64, inner_height: f64) -> (f64, f64) {
		match self {
			Sizing::Square => {
				let side = (inner_width - SQUARE_MARGIN_X)
					.min(inner_height - SQUARE_MARGIN_Y)
					.max(0.0);
				(side, side)
			}
			Sizing::Fullscreen => (inner_width.max(0.0), inner_height.max(0.0)),
			Sizing::Fixed { width, height } => (width, height),
		}
	}

	/// Sizing requested by page query parameters: `size=fullscreen`,
	/// `size=square`, or explicit positive `width` and `height`.
	pub fn from_query(size: Option<&str>, width: Option<&str>, height: Option<&str>) -> Self {
		let pixels = |v: Option<&str>| {
			v.and_then(|v| v.trim().parse::<f64>().ok())
				.filter(|v| *v > 0.0)
		};
		match (size, pixels(width), pixels(height)) {
			(Some("fullscreen"), _, _) => Sizing::Fullscreen,
			(Some("square"), _, _) => Sizing::Square,
			(_, Some(width), Some(height)) => Sizing::Fixed { width, height },
			_ => Sizing::default(),
		}
	}

	/// Whether window resizes change the surface.
	pub fn follows_window(self) -> bool {
		!matches!(self, Sizing::Fixed { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn square_uses_the_tighter_margin() {
		assert_eq!(Sizing::Square.surface_size(840.0, 700.0), (600.0, 600.0));
		assert_eq!(Sizing::Square.surface_size(440.0, 900.0), (400.0, 400.0));
	}

	#[test]
	fn square_never_goes_negative() {
		assert_eq!(Sizing::Square.surface_size(20.0, 50.0), (0.0, 0.0));
	}

	#[test]
	fn fixed_ignores_window() {
		let sizing = Sizing::Fixed {
			width: 320.0,
			height: 240.0,
		};
		assert_eq!(sizing.surface_size(1920.0, 1080.0), (320.0, 240.0));
		assert!(!sizing.follows_window());
		assert!(Sizing::Fullscreen.follows_window());
	}

	#[test]
	fn query_selects_sizing_mode() {
		assert_eq!(Sizing::from_query(None, None, None), Sizing::Square);
		assert_eq!(Sizing::from_query(Some("fullscreen"), None, None), Sizing::Fullscreen);
		assert_eq!(
			Sizing::from_query(None, Some("640"), Some(" 480 ")),
			Sizing::Fixed {
				width: 640.0,
				height: 480.0
			}
		);
		assert_eq!(Sizing::from_query(Some("square"), Some("640"), Some("480")), Sizing::Square);
	}

	#[test]
	fn malformed_dimensions_fall_back_to_square() {
		assert_eq!(Sizing::from_query(None, Some("640"), None), Sizing::Square);
		assert_eq!(Sizing::from_query(None, Some("-5"), Some("480")), Sizing::Square);
		assert_eq!(Sizing::from_query(Some("huge"), Some("wide"), Some("480")), Sizing::Square);
	}
}
