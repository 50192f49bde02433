use crate::buffer::{Blendable, Buffer};
use image::io::Reader as ImageReader;
use std::error::Error;
use std::path::Path;

/// How texture coordinates outside 0.0..=1.0 are folded back in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
	Repeat,
	MirroredRepeat,
	ClampToEdge,
}

impl Wrap {
	fn apply(self, t: f32) -> f32 {
		match self {
			Wrap::Repeat => t - t.floor(),
			Wrap::MirroredRepeat => {
				let period = t.rem_euclid(2.0);
				if period > 1.0 {
					2.0 - period
				} else {
					period
				}
			}
			Wrap::ClampToEdge => t.max(0.0).min(1.0),
		}
	}

	// Fold a texel index into 0..size
	fn index(self, i: i32, size: i32) -> i32 {
		match self {
			Wrap::Repeat => i.rem_euclid(size),
			Wrap::MirroredRepeat => {
				let i = i.rem_euclid(2 * size);
				if i >= size {
					2 * size - 1 - i
				} else {
					i
				}
			}
			Wrap::ClampToEdge => i.max(0).min(size - 1),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
	Nearest,
	Linear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampler {
	pub wrap_s: Wrap,
	pub wrap_t: Wrap,
	pub filter: Filter,
}

impl Default for Sampler {
	fn default() -> Self {
		Self {
			wrap_s: Wrap::Repeat,
			wrap_t: Wrap::Repeat,
			filter: Filter::Linear,
		}
	}
}

#[derive(Clone, Debug)]
pub struct Texture<P: Blendable> {
	buffer: Buffer<P>,
	pub sampler: Sampler,
}

impl<P> Texture<P>
where
	P: Blendable + From<[u8; 4]>,
{
	/// Decode an image file. Rows are flipped so that `v = 0.0` is the bottom of the image.
	pub fn load<A: AsRef<Path>>(path: A) -> Result<Self, Box<dyn Error>> {
		let path = path.as_ref();
		log::debug!("Loading image: {}", path.display());
		let img = ImageReader::open(path)?.decode()?.flipv().to_rgba8();
		let width = img.width();
		let height = img.height();
		log::debug!("Loaded image: {} - {}x{}", path.display(), width, height);

		let mut buffer: Buffer<P> = Buffer::new(width, height);
		for (x, y, pixel) in img.enumerate_pixels() {
			if let Some(p) = buffer.get_mut(x as i32, y as i32) {
				*p = pixel.0.into();
			}
		}
		Ok(Self {
			buffer,
			sampler: Sampler::default(),
		})
	}

	/// Like `load`, but a broken or missing image only costs a warning and a blank texture.
	pub fn load_or_blank<A: AsRef<Path>>(path: A) -> Self {
		let path = path.as_ref();
		match Self::load(path) {
			Ok(texture) => texture,
			Err(err) => {
				log::warn!("Image load failed: {}: {}", path.display(), err);
				Self::new(1, 1)
			}
		}
	}
}

impl<P> Texture<P>
where
	P: Blendable,
{
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			buffer: Buffer::new(width, height),
			sampler: Sampler::default(),
		}
	}

	pub fn with_sampler(mut self, sampler: Sampler) -> Self {
		self.sampler = sampler;
		self
	}

	pub fn width(&self) -> u32 {
		self.buffer.width()
	}

	pub fn height(&self) -> u32 {
		self.buffer.height()
	}

	/// Sample at texel centres the way GL does: `u * width - 0.5` for linear, with
	/// neighbour indices folded by the wrap mode so `Repeat` blends across the seam.
	pub fn sample(&self, u: f32, v: f32) -> P {
		let (w, h) = (self.width() as i32, self.height() as i32);
		if w == 0 || h == 0 {
			return P::default();
		}

		let (wrap_s, wrap_t) = (self.sampler.wrap_s, self.sampler.wrap_t);
		let xf = wrap_s.apply(u) * w as f32;
		let yf = wrap_t.apply(v) * h as f32;

		match self.sampler.filter {
			Filter::Nearest => self.texel(
				wrap_s.index(xf.floor() as i32, w),
				wrap_t.index(yf.floor() as i32, h),
			),
			Filter::Linear => {
				let xf = xf - 0.5;
				let yf = yf - 0.5;
				let x0 = xf.floor();
				let y0 = yf.floor();
				let (xn, yn) = (xf - x0, yf - y0);
				let (x0, y0) = (x0 as i32, y0 as i32);

				let (xa, xb) = (wrap_s.index(x0, w), wrap_s.index(x0 + 1, w));
				let (ya, yb) = (wrap_t.index(y0, h), wrap_t.index(y0 + 1, h));
				let t = self.texel(xa, ya).lerp(&self.texel(xb, ya), xn);
				let b = self.texel(xa, yb).lerp(&self.texel(xb, yb), xn);

				t.lerp(&b, yn)
			}
		}
	}

	fn texel(&self, x: i32, y: i32) -> P {
		self.buffer.get(x, y).copied().unwrap_or_default()
	}

	pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut P> {
		self.buffer.get_mut(x as i32, y as i32)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Color;

	fn two_by_one() -> Texture<Color> {
		let mut texture = Texture::new(2, 1);
		*texture.get_pixel_mut(0, 0).unwrap() = Color::black();
		*texture.get_pixel_mut(1, 0).unwrap() = Color::white();
		texture
	}

	#[test]
	fn wrap_modes_fold_coordinates() {
		assert!((Wrap::Repeat.apply(1.25) - 0.25).abs() < 1e-6);
		assert!((Wrap::Repeat.apply(-0.25) - 0.75).abs() < 1e-6);
		assert!((Wrap::MirroredRepeat.apply(1.25) - 0.75).abs() < 1e-6);
		assert!((Wrap::MirroredRepeat.apply(-0.25) - 0.25).abs() < 1e-6);
		assert_eq!(Wrap::ClampToEdge.apply(3.0), 1.0);
		assert_eq!(Wrap::ClampToEdge.apply(-3.0), 0.0);
	}

	#[test]
	fn nearest_and_linear_filtering() {
		let texture = two_by_one().with_sampler(Sampler {
			filter: Filter::Nearest,
			wrap_s: Wrap::ClampToEdge,
			wrap_t: Wrap::ClampToEdge,
		});
		assert_eq!(texture.sample(0.2, 0.0), Color::black());
		assert_eq!(texture.sample(0.8, 0.0), Color::white());

		let sampler = texture.sampler;
		let texture = texture.with_sampler(Sampler {
			filter: Filter::Linear,
			..sampler
		});
		assert_eq!(texture.sample(0.5, 0.5).r, 128);
	}

	fn strip() -> Texture<Color> {
		let mut texture = Texture::new(4, 1);
		for (x, r) in [10, 20, 30, 40].iter().enumerate() {
			*texture.get_pixel_mut(x as u32, 0).unwrap() = Color::rgb(*r, 0, 0);
		}
		texture
	}

	#[test]
	fn nearest_picks_the_covering_texel() {
		let texture = strip().with_sampler(Sampler {
			filter: Filter::Nearest,
			..Sampler::default()
		});
		assert_eq!(texture.sample(0.2, 0.5).r, 10);
		assert_eq!(texture.sample(0.26, 0.5).r, 20);
		assert_eq!(texture.sample(0.99, 0.5).r, 40);
		// Repeat folds 1.0 back onto the first texel
		assert_eq!(texture.sample(1.0, 0.5).r, 10);
	}

	#[test]
	fn linear_blends_across_the_seam() {
		let texture = strip();
		assert_eq!(texture.sample(0.0, 0.5).r, 25);
		assert_eq!(texture.sample(0.25, 0.5).r, 15);

		let clamped = strip().with_sampler(Sampler {
			wrap_s: Wrap::ClampToEdge,
			..Sampler::default()
		});
		assert_eq!(clamped.sample(0.0, 0.5).r, 10);

		let mirrored = strip().with_sampler(Sampler {
			wrap_s: Wrap::MirroredRepeat,
			..Sampler::default()
		});
		assert_eq!(mirrored.sample(0.0, 0.5).r, 10);
	}

	#[test]
	fn missing_file_gives_blank_texture() {
		let texture: Texture<Color> = Texture::load_or_blank("assets/does-not-exist.jpg");
		assert_eq!(texture.width(), 1);
		assert_eq!(texture.sample(0.5, 0.5), Color::default());
	}
}
