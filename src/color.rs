use crate::buffer::Blendable;
use nalgebra as na;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::rgba(r, g, b, 255)
	}

	pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	pub fn transparent() -> Self {
		Self { r: 0, g: 0, b: 0, a: 0 }
	}

	pub fn black() -> Self {
		Self::rgb(0, 0, 0)
	}

	pub fn white() -> Self {
		Self::rgb(255, 255, 255)
	}

	pub fn from_floats(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self::rgba(to_byte(r), to_byte(g), to_byte(b), to_byte(a))
	}

	pub fn as_floats(&self) -> (f32, f32, f32, f32) {
		(
			self.r as f32 / 255.0,
			self.g as f32 / 255.0,
			self.b as f32 / 255.0,
			self.a as f32 / 255.0,
		)
	}

	pub fn as_rgba(&self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Multiply each channel by a light factor, alpha untouched
	pub fn lit(&self, light: &na::Vector3<f32>) -> Color {
		let (r, g, b, a) = self.as_floats();
		Color::from_floats(r * light.x, g * light.y, b * light.z, a)
	}

	pub fn opaque(mut self) -> Self {
		self.a = 255;
		self
	}
}

fn to_byte(v: f32) -> u8 {
	(v.max(0.0).min(1.0) * 255.0).round() as u8
}

impl From<[u8; 4]> for Color {
	fn from(rgba: [u8; 4]) -> Self {
		Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
	}
}

impl Blendable for Color {
	fn lerp(&self, rhs: &Self, t: f32) -> Self {
		let (r0, g0, b0, a0) = self.as_floats();
		let (r1, g1, b1, a1) = rhs.as_floats();
		Color::from_floats(
			r0 + (r1 - r0) * t,
			g0 + (g1 - g0) * t,
			b0 + (b1 - b0) * t,
			a0 + (a1 - a0) * t,
		)
	}

	fn blend(&self, bg: &Color) -> Color {
		let (fg_r, fg_g, fg_b, fg_a) = self.as_floats();
		let (bg_r, bg_g, bg_b, bg_a) = bg.as_floats();

		let a = (1.0 - fg_a) * bg_a + fg_a;
		if a <= 0.0 {
			return Color::transparent();
		}
		let r = ((1.0 - fg_a) * bg_a * bg_r + fg_a * fg_r) / a;
		let g = ((1.0 - fg_a) * bg_a * bg_g + fg_a * fg_g) / a;
		let b = ((1.0 - fg_a) * bg_a * bg_b + fg_a * fg_b) / a;
		Color::from_floats(r, g, b, a)
	}
}
