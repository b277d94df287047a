use super::layout::Point;
use super::types::TopologyEdge;

// Below this, two centers count as the same point.
const MIN_LENGTH: f64 = 1e-3;

/// A line between two node boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	/// Point on the source boundary.
	pub start: Point,
	/// Point on the target boundary, where the arrowhead goes.
	pub end: Point,
}

/// An edge together with the segment to draw for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawableEdge<'e> {
	/// The input edge.
	pub edge: &'e TopologyEdge,
	/// Where to draw it.
	pub segment: Segment,
}

/// Pulls both ends of `from -> to` inward by `offset`.
///
/// Returns `None` when the two centers coincide, since there is no
/// direction to pull along.
pub fn trim_segment(from: Point, to: Point, offset: f64) -> Option<Segment> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let len = dx.hypot(dy);
	if len.is_nan() || len < MIN_LENGTH {
		return None;
	}
	let (ux, uy) = (dx / len, dy / len);
	Some(Segment {
		start: Point::new(from.x + ux * offset, from.y + uy * offset),
		end: Point::new(to.x - ux * offset, to.y - uy * offset),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vertical_edge_is_trimmed_at_both_ends() {
		let seg = trim_segment(Point::new(100.0, 36.0), Point::new(100.0, 108.0), 32.0).unwrap();

		assert_eq!(seg.start, Point::new(100.0, 68.0));
		assert_eq!(seg.end, Point::new(100.0, 76.0));
	}

	#[test]
	fn diagonal_edge_keeps_direction() {
		let seg = trim_segment(Point::new(0.0, 0.0), Point::new(30.0, 40.0), 5.0).unwrap();

		assert!((seg.start.x - 3.0).abs() < 1e-9);
		assert!((seg.start.y - 4.0).abs() < 1e-9);
		assert!((seg.end.x - 27.0).abs() < 1e-9);
		assert!((seg.end.y - 36.0).abs() < 1e-9);
	}

	#[test]
	fn coinciding_points_yield_nothing() {
		let p = Point::new(12.0, 12.0);
		assert_eq!(trim_segment(p, p, 32.0), None);
	}

	#[test]
	fn nan_input_yields_nothing() {
		let p = Point::new(f64::NAN, 0.0);
		assert_eq!(trim_segment(p, Point::new(1.0, 1.0), 1.0), None);
	}
}
