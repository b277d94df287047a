use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::ClusterGraphState;
use crate::data::ClusterTopology;

const FALLBACK_SIZE: (f64, f64) = (600.0, 360.0);
const FRAME_DT: f32 = 0.016;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(FALLBACK_SIZE)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn request_frame(cb: &FrameCallback) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(cb) = cb.borrow().as_ref() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Interactive canvas of the cluster mesh: drag nodes, pan the background,
/// scroll to zoom, hover to highlight a node's links and ring its degraded peers.
#[component]
pub fn ClusterCanvas(#[prop(into)] topology: Signal<ClusterTopology>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ClusterGraphState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let alive = Rc::new(Cell::new(true));

	on_cleanup({
		let alive = SendWrapper::new(alive.clone());
		move || alive.set(false)
	});

	let (state_init, animate_init, resize_init, alive_init) =
		(state.clone(), animate.clone(), resize_cb.clone(), alive.clone());
	Effect::new(move |_| {
		let topology = topology.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let graph_state = ClusterGraphState::new(&topology, w, h);
		log::debug!(
			"cluster canvas {w}x{h}: {} nodes, {} of {} links drawn",
			topology.nodes.len(),
			graph_state.link_count(),
			topology.links.len()
		);
		*state_init.borrow_mut() = Some(graph_state);

		if animate_init.borrow().is_some() {
			return;
		}
		let Some(ctx) = context_2d(&canvas) else {
			log::warn!("canvas 2d context unavailable");
			return;
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), resize_init.borrow().as_ref()) {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, alive_anim, resize_inner) = (
			state_init.clone(),
			animate_init.clone(),
			alive_init.clone(),
			resize_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_anim.get() {
				if let (Some(window), Some(cb)) = (web_sys::window(), resize_inner.borrow().as_ref())
				{
					let _ = window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			request_frame(&animate_inner);
		}));
		request_frame(&animate_init);
	});

	let position = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = position(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				let mut start = (0.0, 0.0);
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						start = (node.x(), node.y());
					}
				});
				(s.drag.node_start_x, s.drag.node_start_y) = start;
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = position(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}

			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let mouse: &MouseEvent = &ev;
		let Some((x, y)) = position(mouse) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="cluster-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
		/>
	}
}
