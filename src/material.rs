use crate::{Blendable, Texture};

#[derive(Clone, Debug)]
pub enum Material<P: Blendable> {
	Color(P),
	Texture(Texture<P>),
}

impl<P: Blendable> Material<P> {
	pub fn sample(&self, u: f32, v: f32) -> P {
		match self {
			Material::Color(color) => *color,
			Material::Texture(texture) => texture.sample(u, v),
		}
	}
}

impl<P: Blendable> From<P> for Material<P> {
	fn from(color: P) -> Self {
		Self::Color(color)
	}
}

impl<P: Blendable> From<Texture<P>> for Material<P> {
	fn from(texture: Texture<P>) -> Self {
		Self::Texture(texture)
	}
}
