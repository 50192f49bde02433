use std::fmt::Debug;

pub trait Blendable: Copy + Clone + Default + Debug {
	fn lerp(&self, rhs: &Self, t: f32) -> Self;
	fn blend(&self, bg: &Self) -> Self;
}

#[derive(Default, Clone, Debug)]
pub struct Buffer<P: Clone> {
	width: u32,
	height: u32,
	pixels: Vec<P>,
}

impl<P: Clone + Default> Buffer<P> {
	pub fn new(width: u32, height: u32) -> Self {
		Self::new_with_value(P::default(), width, height)
	}
}

impl<P: Clone> Buffer<P> {
	pub fn new_with_value(value: P, width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			pixels: vec![value; width as usize * height as usize],
		}
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn fill(&mut self, value: P) {
		for pixel in self.pixels.iter_mut() {
			*pixel = value.clone();
		}
	}

	pub fn index(&self, x: i32, y: i32) -> Option<usize> {
		if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
			return None;
		}

		Some(x as usize + y as usize * self.width as usize)
	}

	pub fn get(&self, x: i32, y: i32) -> Option<&P> {
		let idx = self.index(x, y)?;
		self.pixels.get(idx)
	}

	pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut P> {
		let idx = self.index(x, y)?;
		self.pixels.get_mut(idx)
	}

	pub fn pixels(&self) -> &[P] {
		&self.pixels
	}
}
