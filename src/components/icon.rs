use crate::data::DepartmentIcon;

/// Glyph drawn for a department icon.
pub fn department_glyph(icon: DepartmentIcon) -> &'static str {
	match icon {
		DepartmentIcon::TrendingUp => "\u{1F4C8}",
		DepartmentIcon::Activity => "\u{1F4C9}",
		DepartmentIcon::Gavel => "\u{2696}",
		DepartmentIcon::Shield => "\u{1F6E1}",
		DepartmentIcon::Users => "\u{1F465}",
		DepartmentIcon::Megaphone => "\u{1F4E3}",
		DepartmentIcon::Tag => "\u{1F3F7}",
		DepartmentIcon::Headphones => "\u{1F3A7}",
		DepartmentIcon::Package => "\u{1F4E6}",
		DepartmentIcon::Code => "\u{1F4BB}",
		DepartmentIcon::Server => "\u{1F5A5}",
		DepartmentIcon::Settings => "\u{2699}",
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn every_icon_has_its_own_glyph() {
		let icons = [
			DepartmentIcon::TrendingUp,
			DepartmentIcon::Activity,
			DepartmentIcon::Gavel,
			DepartmentIcon::Shield,
			DepartmentIcon::Users,
			DepartmentIcon::Megaphone,
			DepartmentIcon::Tag,
			DepartmentIcon::Headphones,
			DepartmentIcon::Package,
			DepartmentIcon::Code,
			DepartmentIcon::Server,
			DepartmentIcon::Settings,
		];
		let glyphs: HashSet<&str> = icons.into_iter().map(department_glyph).collect();
		assert_eq!(glyphs.len(), icons.len());
	}
}
