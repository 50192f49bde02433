use super::{face_triangles, Face, Mesh, Triangle};
use crate::{Blendable, Color, Material};

static FACES: [Face; 6] = [
	// Back
	[[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
	// Front
	[[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
	// Left
	[[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
	// Right
	[[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
	// Bottom
	[[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
	// Top
	[[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
];

/// Axis-aligned cube centred on the origin; `size` is the half extent.
#[derive(Clone, Debug)]
pub struct Cube<P: Blendable = Color> {
	size: f32,
	material: Material<P>,
}

impl<P: Blendable> Mesh<P> for Cube<P> {
	fn triangles<'a>(&'a self) -> Box<dyn Iterator<Item = Triangle> + 'a> {
		let size = self.size;
		Box::new(FACES.iter().flat_map(move |face| face_triangles(face, size).to_vec()))
	}

	fn material(&self) -> Option<&Material<P>> {
		Some(&self.material)
	}
}

impl<P: Blendable> Cube<P> {
	pub fn new(size: f32, material: Material<P>) -> Self {
		Self { size, material }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn thirty_six_vertices() {
		let cube = Cube::new(0.5, Color::white().into());
		let tris: Vec<Triangle> = cube.triangles().collect();
		assert_eq!(tris.len(), 12);
		for tri in &tris {
			for p in tri.points.iter() {
				assert_eq!(p.x.abs(), 0.5);
				assert_eq!(p.y.abs(), 0.5);
				assert_eq!(p.z.abs(), 0.5);
			}
		}
	}

	#[test]
	fn normals_point_outwards() {
		let cube = Cube::new(0.5, Color::white().into());
		for tri in cube.triangles() {
			let outward = tri.centroid().coords;
			assert!(tri.normal.dot(&outward) > 0.0, "{:?}", tri);
			// Axis aligned
			assert!((tri.normal.abs().max() - 1.0).abs() < 1e-6);
		}
	}
}
