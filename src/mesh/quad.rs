use super::{face_triangles, Face, Mesh, Triangle};
use crate::{Blendable, Color, Material};

static FACE: Face = [[-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0]];

/// Flat square in the XY plane facing +Z; `size` is the half extent.
#[derive(Clone, Debug)]
pub struct Quad<P: Blendable = Color> {
	size: f32,
	material: Material<P>,
}

impl<P: Blendable> Mesh<P> for Quad<P> {
	fn triangles<'a>(&'a self) -> Box<dyn Iterator<Item = Triangle> + 'a> {
		Box::new(face_triangles(&FACE, self.size).to_vec().into_iter())
	}

	fn material(&self) -> Option<&Material<P>> {
		Some(&self.material)
	}
}

impl<P: Blendable> Quad<P> {
	pub fn new(size: f32, material: Material<P>) -> Self {
		Self { size, material }
	}
}
