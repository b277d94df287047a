//! SVG geometry for the dashboard charts.

use std::f64::consts::PI;

/// Donut chart slice.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
	/// Index of the value this slice stands for.
	pub index: usize,
	/// Clockwise from 12 o'clock, in degrees.
	pub start_deg: f64,
	/// End angle, greater than `start_deg`.
	pub end_deg: f64,
	/// SVG path data of the annular sector.
	pub path: String,
}

/// Geometry of a donut chart centered on `(cx, cy)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Donut {
	/// Center x.
	pub cx: f64,
	/// Center y.
	pub cy: f64,
	/// Radius of the hole.
	pub inner_radius: f64,
	/// Outer edge of the ring.
	pub outer_radius: f64,
	/// Gap between neighbouring slices, in degrees.
	pub padding_deg: f64,
}

impl Default for Donut {
	fn default() -> Self {
		Self {
			cx: 100.0,
			cy: 100.0,
			inner_radius: 60.0,
			outer_radius: 80.0,
			padding_deg: 5.0,
		}
	}
}

// A full turn cannot be drawn as a single arc.
const MAX_SWEEP_DEG: f64 = 359.99;

impl Donut {
	fn point(&self, radius: f64, deg: f64) -> (f64, f64) {
		let rad = (deg - 90.0) * PI / 180.0;
		(self.cx + radius * rad.cos(), self.cy + radius * rad.sin())
	}

	fn sector_path(&self, start_deg: f64, end_deg: f64) -> String {
		let (r0, r1) = (self.inner_radius, self.outer_radius);
		let large_arc = u8::from(end_deg - start_deg > 180.0);
		let (ox0, oy0) = self.point(r1, start_deg);
		let (ox1, oy1) = self.point(r1, end_deg);
		let (ix1, iy1) = self.point(r0, end_deg);
		let (ix0, iy0) = self.point(r0, start_deg);
		format!(
			"M{ox0:.2},{oy0:.2} A{r1},{r1} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
			 L{ix1:.2},{iy1:.2} A{r0},{r0} 0 {large_arc} 0 {ix0:.2},{iy0:.2} Z"
		)
	}

	/// One slice per non-zero value, proportional to its share.
	pub fn segments(&self, values: &[f64]) -> Vec<DonutSegment> {
		let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
		if total <= 0.0 {
			return Vec::new();
		}
		let visible = values.iter().filter(|v| **v > 0.0).count();
		let padding = if visible > 1 { self.padding_deg } else { 0.0 };
		let available = 360.0 - padding * visible as f64;

		let mut angle = 0.0;
		let mut segments = Vec::with_capacity(visible);
		for (index, &value) in values.iter().enumerate() {
			if value <= 0.0 {
				continue;
			}
			let sweep = (value / total * available).min(MAX_SWEEP_DEG);
			let (start_deg, end_deg) = (angle, angle + sweep);
			segments.push(DonutSegment {
				index,
				start_deg,
				end_deg,
				path: self.sector_path(start_deg, end_deg),
			});
			angle = end_deg + padding;
		}
		segments
	}
}

/// Stroke and fill paths of a sparkline.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkline {
	/// Open polyline through the points.
	pub line: String,
	/// The line closed along the bottom edge.
	pub area: String,
}

/// Sparkline of `values` scaled into a `width` x `height` box, 0 at the bottom.
pub fn sparkline(values: &[f64], width: f64, height: f64) -> Option<Sparkline> {
	let max = values.iter().copied().fold(0.0, f64::max);
	if max <= 0.0 {
		return None;
	}
	let step = if values.len() > 1 {
		width / (values.len() - 1) as f64
	} else {
		0.0
	};

	let mut points: Vec<(f64, f64)> = values
		.iter()
		.enumerate()
		.map(|(i, v)| (i as f64 * step, height - v.max(0.0) / max * height))
		.collect();
	if let [only] = points[..] {
		points.push((width, only.1));
	}

	let line = points
		.iter()
		.enumerate()
		.map(|(i, (x, y))| format!("{}{x:.2},{y:.2}", if i == 0 { 'M' } else { 'L' }))
		.collect::<Vec<_>>()
		.join(" ");
	let last_x = points.last().map_or(0.0, |p| p.0);
	let area = format!("{line} L{last_x:.2},{height:.2} L0.00,{height:.2} Z");
	Some(Sparkline { line, area })
}

/// Upper bound of a bar chart axis: the largest value, but never below `floor`.
pub fn bar_domain_max(values: &[f64], floor: f64) -> f64 {
	values.iter().copied().fold(floor, f64::max)
}

/// Bar length for `value` on a `[0, domain_max]` axis drawn `full` units long.
///
/// Bars are never shorter than `min_len`, so zero values stay visible.
pub fn bar_length(value: f64, domain_max: f64, full: f64, min_len: f64) -> f64 {
	if domain_max <= 0.0 {
		return min_len;
	}
	(value.max(0.0) / domain_max * full).clamp(min_len, full)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn donut_slices_share_the_turn_minus_padding() {
		let donut = Donut::default();
		let segments = donut.segments(&[42.0, 28.0, 37.0, 35.0]);

		assert_eq!(segments.len(), 4);
		let swept: f64 = segments.iter().map(|s| s.end_deg - s.start_deg).sum();
		assert!((swept - 340.0).abs() < 1e-9);
		assert!((segments[1].start_deg - segments[0].end_deg - 5.0).abs() < 1e-9);
		assert!(segments[0].path.starts_with("M100.00,20.00 A80,80"));
	}

	#[test]
	fn donut_skips_empty_values() {
		let donut = Donut::default();

		assert!(donut.segments(&[]).is_empty());
		assert!(donut.segments(&[0.0, 0.0]).is_empty());

		let single = donut.segments(&[0.0, 5.0]);
		assert_eq!(single.len(), 1);
		assert_eq!(single[0].index, 1);
		assert_eq!(single[0].end_deg, MAX_SWEEP_DEG);
	}

	#[test]
	fn sparkline_scales_to_box() {
		let spark = sparkline(&[2.0, 4.0, 1.0], 100.0, 40.0).unwrap();

		assert_eq!(spark.line, "M0.00,20.00 L50.00,0.00 L100.00,30.00");
		assert!(spark.area.ends_with("L100.00,40.00 L0.00,40.00 Z"));
	}

	#[test]
	fn sparkline_of_one_value_is_flat() {
		let spark = sparkline(&[3.0], 100.0, 40.0).unwrap();
		assert_eq!(spark.line, "M0.00,0.00 L100.00,0.00");
	}

	#[test]
	fn sparkline_needs_positive_data() {
		assert_eq!(sparkline(&[], 10.0, 10.0), None);
		assert_eq!(sparkline(&[0.0, 0.0], 10.0, 10.0), None);
	}

	#[test]
	fn bars_use_a_floor_and_a_minimum_length() {
		assert_eq!(bar_domain_max(&[0.0, 0.0], 0.5), 0.5);
		assert_eq!(bar_domain_max(&[0.2, 3.0], 0.5), 3.0);

		assert_eq!(bar_length(0.0, 0.5, 200.0, 2.0), 2.0);
		assert_eq!(bar_length(1.5, 3.0, 200.0, 2.0), 100.0);
		assert_eq!(bar_length(9.0, 3.0, 200.0, 2.0), 200.0);
	}
}
