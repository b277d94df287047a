use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ClusterGraphState, NODE_RADIUS};
use crate::data::Status;

const BACKGROUND: &str = "#0f172a";
const LINK_RGB: &str = "96, 165, 250";
const MIN_FONT_ZOOM: f64 = 0.5;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// `#rrggbb` to an `rgba()` string.
fn with_alpha(hex: &str, alpha: f64) -> String {
	let channel = |i: usize| {
		hex.get(i..i + 2)
			.and_then(|c| u8::from_str_radix(c, 16).ok())
			.unwrap_or(255)
	};
	format!("rgba({}, {}, {}, {alpha:.3})", channel(1), channel(3), channel(5))
}

pub fn render(state: &ClusterGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ClusterGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap) = (1.2 / k, 6.0 / k, 4.0 / k);
	let dash_offset = -(state.pulse_time * 24.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(dash_offset);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		// t=0: every link at 0.45, t=1: highlighted at 0.9, the rest at 0.1
		let (alpha, width) = if state.is_highlighted(n1.index()) && state.is_highlighted(n2.index())
		{
			(0.45 + 0.45 * t, line_width * (1.0 + 0.4 * t))
		} else {
			(0.45 - 0.35 * t, line_width)
		};

		ctx.set_stroke_style_str(&format!("rgba({LINK_RGB}, {alpha:.3})"));
		ctx.set_line_width(width);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, inner: f64, outer: f64, color: &str) {
	let Ok(gradient) = ctx.create_radial_gradient(x, y, inner, x, y, outer) else {
		return;
	};
	let stops = [(0.0, color.to_owned()), (1.0, with_alpha("#000000", 0.0))];
	if stops
		.iter()
		.any(|(offset, c)| gradient.add_color_stop(*offset, c).is_err())
	{
		return;
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, outer, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_nodes(state: &ClusterGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	// slow breathing for nodes that need attention
	let pulse = 0.5 + 0.5 * (state.pulse_time * 2.5).sin();
	let font = format!("{}px sans-serif", 10.0 / k.max(MIN_FONT_ZOOM));

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let color = info.status.color();
		let highlighted = has_highlight && state.is_highlighted(idx);

		let (alpha, radius) = if !has_highlight {
			(1.0, NODE_RADIUS)
		} else if state.is_hovered(idx) {
			(1.0, NODE_RADIUS * (1.0 + 0.35 * t))
		} else if highlighted {
			(1.0, NODE_RADIUS * (1.0 + 0.2 * t))
		} else {
			(1.0 - 0.7 * t, NODE_RADIUS * (1.0 - 0.15 * t))
		};

		if matches!(info.status, Status::Warning | Status::Error) {
			let glow = NODE_RADIUS * (2.0 + 0.8 * pulse);
			draw_glow(ctx, x, y, radius * 0.5, glow, &with_alpha(color, 0.45 * alpha));
		}
		if state.is_hovered(idx) && t > 0.01 {
			draw_glow(
				ctx,
				x,
				y,
				radius * 0.3,
				NODE_RADIUS * (1.8 + 1.2 * t),
				&format!("rgba(255, 255, 255, {:.3})", 0.35 * t),
			);
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if state.is_hovered(idx) && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {:.3})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}
		if state.is_degraded_peer(idx) && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 4.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&with_alpha(color, 0.9 * t));
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		if let Some(label) = &info.label {
			let text_alpha = if highlighted { 1.0 } else { alpha * 0.8 };
			ctx.set_fill_style_str(&format!("rgba(226, 232, 240, {text_alpha:.3})"));
			ctx.set_font(&font);
			let text = match state.degraded_peer_count() {
				Some(n) if n > 0 && state.is_hovered(idx) => peer_note(label, n),
				_ => label.clone(),
			};
			let _ = ctx.fill_text(&text, x + radius + 3.0, y + 3.0);
		}
	});
}

fn peer_note(label: &str, degraded: usize) -> String {
	let noun = if degraded == 1 { "peer" } else { "peers" };
	format!("{label} \u{00b7} {degraded} degraded {noun}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_colors_gain_alpha() {
		assert_eq!(with_alpha("#10b981", 0.5), "rgba(16, 185, 129, 0.500)");
		assert_eq!(with_alpha("#zzzzzz", 1.0), "rgba(255, 255, 255, 1.000)");
	}

	#[test]
	fn hovered_label_counts_degraded_peers() {
		assert_eq!(peer_note("Node-00", 1), "Node-00 \u{00b7} 1 degraded peer");
		assert_eq!(peer_note("Node-00", 3), "Node-00 \u{00b7} 3 degraded peers");
	}

	#[test]
	fn easing_hits_both_ends() {
		assert_eq!(ease_out_cubic(0.0), 0.0);
		assert_eq!(ease_out_cubic(1.0), 1.0);
	}
}
