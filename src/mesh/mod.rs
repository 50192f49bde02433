use crate::{Blendable, Material};

mod geom;
pub use geom::*;
mod cube;
pub use cube::*;
mod quad;
pub use quad::*;

pub trait Mesh<P: Blendable> {
	fn triangles<'a>(&'a self) -> Box<dyn Iterator<Item = Triangle> + 'a>;
	fn material(&self) -> Option<&Material<P>> {
		None
	}
}

/// Corners of one flat face, counter-clockwise when seen from the front.
type Face = [[f32; 3]; 4];

const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

// Two triangles per face, sharing the 0-2 diagonal
fn face_triangles(face: &Face, scale: f32) -> [Triangle; 2] {
	let corner = |i: usize| {
		let c = face[i];
		(
			nalgebra::Point3::new(c[0] * scale, c[1] * scale, c[2] * scale),
			nalgebra::Point2::new(FACE_UVS[i][0], FACE_UVS[i][1]),
		)
	};
	let (p0, t0) = corner(0);
	let (p1, t1) = corner(1);
	let (p2, t2) = corner(2);
	let (p3, t3) = corner(3);

	[
		Triangle::new(p0, p1, p2).uv(t0, t1, t2),
		Triangle::new(p0, p2, p3).uv(t0, t2, t3),
	]
}
