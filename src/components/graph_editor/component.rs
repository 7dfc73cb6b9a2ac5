use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::{EditorConfig, Sizing};
use super::error::{HostError, describe};
use super::render;
use super::state::EditorSession;
use super::types::{Point, PointerEvent};

/// A live session together with the context it draws into.
struct Mounted {
	session: EditorSession,
	ctx: CanvasRenderingContext2d,
}

impl Mounted {
	fn redraw(&self) {
		render::render(&self.session, &self.ctx);
	}
}

type Shared = Rc<RefCell<Option<Mounted>>>;

/// Window listeners kept alive for as long as the page runs.
#[derive(Default)]
struct Listeners {
	resize: Option<Closure<dyn FnMut()>>,
	pointer: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

#[component]
pub fn GraphEditorCanvas(
	#[prop(optional)] sizing: Sizing,
	#[prop(optional)] config: EditorConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Shared = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Listeners>> = Rc::default();
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let mut listeners = listeners.borrow_mut();
		if let Err(err) = mount(&canvas, sizing, config.clone(), &mounted_init, &mut listeners) {
			error!("Graph editor failed to start: {}", err);
		}
	});

	// Move and release are heard on the window (see `mount`) so a drag can
	// continue past the canvas edge; presses only count on the canvas itself.
	let mounted_md = mounted.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some(canvas) = canvas_ref.get() {
			forward(&mounted_md, PointerEvent::Down(surface_point(&canvas, &ev)));
		}
	};

	let mounted_dc = mounted.clone();
	let on_dblclick = move |ev: MouseEvent| {
		if let Some(canvas) = canvas_ref.get() {
			forward(&mounted_dc, PointerEvent::DoubleClick(surface_point(&canvas, &ev)));
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			on:mousedown=on_mousedown
			on:dblclick=on_dblclick
			style="display: block; cursor: pointer; border: 1px solid #ccc;"
		/>
	}
}

/// Client coordinates of `ev` relative to the canvas' top-left corner.
fn surface_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn forward(mounted: &Shared, event: PointerEvent) {
	if let Some(ref mut m) = *mounted.borrow_mut() {
		if m.session.handle(event).needs_redraw() {
			m.redraw();
		}
	}
}

fn mount(
	canvas: &HtmlCanvasElement,
	sizing: Sizing,
	config: EditorConfig,
	mounted: &Shared,
	listeners: &mut Listeners,
) -> Result<(), HostError> {
	let window = web_sys::window().ok_or(HostError::NoWindow)?;
	let (w, h) = window_surface_size(&window, sizing)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|_| HostError::NoContext)?
		.ok_or(HostError::NoContext)?
		.dyn_into()
		.map_err(|_| HostError::NoContext)?;

	let mut rng = SmallRng::seed_from_u64((js_sys::Math::random() * (1u64 << 53) as f64) as u64);
	let session = EditorSession::generate(&mut rng, config, w, h);
	let m = Mounted { session, ctx };
	m.redraw();
	*mounted.borrow_mut() = Some(m);

	let pointer_events: [(&'static str, fn(Point) -> PointerEvent); 2] = [
		("mousemove", PointerEvent::Move),
		("mouseup", PointerEvent::Up),
	];
	for (event, to_pointer) in pointer_events {
		let (mounted_ptr, canvas_ptr) = (mounted.clone(), canvas.clone());
		let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			forward(&mounted_ptr, to_pointer(surface_point(&canvas_ptr, &ev)));
		});
		attach(&window, event, cb.as_ref().unchecked_ref())?;
		listeners.pointer.push(cb);
	}

	if !sizing.follows_window() {
		return Ok(());
	}
	let (mounted_resize, canvas_resize) = (mounted.clone(), canvas.clone());
	let cb = Closure::<dyn FnMut()>::new(move || {
		let size = web_sys::window()
			.ok_or(HostError::NoWindow)
			.and_then(|win| window_surface_size(&win, sizing));
		let (nw, nh) = match size {
			Ok(size) => size,
			Err(err) => {
				error!("Resize ignored: {}", err);
				return;
			}
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut m) = *mounted_resize.borrow_mut() {
			m.session.resize(nw, nh);
			m.redraw();
		}
	});
	attach(&window, "resize", cb.as_ref().unchecked_ref())?;
	listeners.resize.replace(cb);
	Ok(())
}

fn attach(window: &Window, event: &'static str, cb: &js_sys::Function) -> Result<(), HostError> {
	window
		.add_event_listener_with_callback(event, cb)
		.map_err(|e| HostError::Listener {
			event,
			reason: describe(&e),
		})
}

fn window_surface_size(window: &Window, sizing: Sizing) -> Result<(f64, f64), HostError> {
	let dimension = |value: Result<JsValue, JsValue>| -> Result<f64, HostError> {
		let value = value.map_err(|e| HostError::WindowSize(describe(&e)))?;
		value
			.as_f64()
			.ok_or_else(|| HostError::WindowSize(describe(&value)))
	};
	let (inner_w, inner_h) = (dimension(window.inner_width())?, dimension(window.inner_height())?);
	Ok(sizing.surface_size(inner_w, inner_h))
}
